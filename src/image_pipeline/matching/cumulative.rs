use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::frame::{RgbFrame, CHANNELS};
use crate::image_pipeline::matching::BINS;
use crate::image_pipeline::matching::histogram::Histogram;

/// Per-channel cumulative distribution: non-decreasing, last bin ≈ 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeHistogram {
    channels: [[f32; BINS]; CHANNELS],
}

impl CumulativeHistogram {
    pub fn from_histogram(histogram: &Histogram) -> Self {
        let mut channels = [[0.0f32; BINS]; CHANNELS];
        for (channel, cumulative) in channels.iter_mut().enumerate() {
            *cumulative = prefix_sum(histogram.channel(channel));
        }
        Self { channels }
    }

    /// Histogram and integrate in one step.
    pub fn from_frame(frame: &RgbFrame) -> Result<Self> {
        Ok(Histogram::from_frame(frame)?.cumulative())
    }

    /// Wraps precomputed distributions. Callers are responsible for monotonicity.
    pub fn from_channels(channels: [[f32; BINS]; CHANNELS]) -> Self {
        Self { channels }
    }

    pub fn channel(&self, channel: usize) -> &[f32; BINS] {
        &self.channels[channel]
    }
}

fn prefix_sum(bins: &[f32; BINS]) -> [f32; BINS] {
    let mut cumulative = [0.0f32; BINS];
    // f64 running total keeps the last bin close to 1.0
    let mut total = 0.0f64;
    for (out, &mass) in cumulative.iter_mut().zip(bins.iter()) {
        total += mass as f64;
        *out = total as f32;
    }
    cumulative
}
