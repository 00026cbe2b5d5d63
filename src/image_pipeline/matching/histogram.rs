use rayon::prelude::*;
use tracing::trace;

use crate::image_pipeline::common::error::{MatchError, Result};
use crate::image_pipeline::frame::{RgbFrame, CHANNELS};
use crate::image_pipeline::matching::{BINS, PARALLEL_THRESHOLD};
use crate::image_pipeline::matching::cumulative::CumulativeHistogram;

type Counts = [[u64; BINS]; CHANNELS];

/// Normalized per-channel intensity histogram. Each channel sums to 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    channels: [[f32; BINS]; CHANNELS],
}

impl Histogram {
    /// Bins every channel of `frame` and divides by the pixel count.
    ///
    /// Returns [`MatchError::EmptyImage`] for a frame without pixels.
    pub fn from_frame(frame: &RgbFrame) -> Result<Self> {
        if frame.is_empty() {
            return Err(MatchError::EmptyImage(frame.width, frame.height));
        }

        let counts = count_channels(&frame.data);
        let total = (frame.data.len() / CHANNELS) as f64;
        trace!("Histogram over {} pixels", total);

        let mut channels = [[0.0f32; BINS]; CHANNELS];
        for (bins, counts) in channels.iter_mut().zip(counts.iter()) {
            for (bin, &count) in bins.iter_mut().zip(counts.iter()) {
                *bin = (count as f64 / total) as f32;
            }
        }

        Ok(Self { channels })
    }

    pub fn channel(&self, channel: usize) -> &[f32; BINS] {
        &self.channels[channel]
    }

    pub fn cumulative(&self) -> CumulativeHistogram {
        CumulativeHistogram::from_histogram(self)
    }
}

fn count_channels(data: &[u8]) -> Counts {
    let init = || [[0u64; BINS]; CHANNELS];
    let fold = |mut acc: Counts, pixel: &[u8]| {
        for (counts, &value) in acc.iter_mut().zip(pixel.iter()) {
            counts[value as usize] += 1;
        }
        acc
    };
    let reduce = |mut a: Counts, b: Counts| {
        for (left, right) in a.iter_mut().zip(b.iter()) {
            for (l, r) in left.iter_mut().zip(right.iter()) {
                *l += r;
            }
        }
        a
    };

    if data.len() / CHANNELS >= PARALLEL_THRESHOLD {
        data.par_chunks_exact(CHANNELS)
            .fold(&init, &fold)
            .reduce(&init, &reduce)
    } else {
        data.chunks_exact(CHANNELS).fold(init(), &fold)
    }
}
