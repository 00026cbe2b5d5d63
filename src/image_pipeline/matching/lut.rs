use rayon::prelude::*;

use crate::image_pipeline::frame::{RgbFrame, CHANNELS};
use crate::image_pipeline::matching::{BINS, PARALLEL_THRESHOLD};
use crate::image_pipeline::matching::cumulative::CumulativeHistogram;

/// Tolerance absorbing float noise when comparing cumulative levels.
pub const MATCH_EPSILON: f32 = 1.0e-6;

/// Per-channel 256-entry intensity lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut {
    tables: [[u8; BINS]; CHANNELS],
}

impl Lut {
    pub fn identity() -> Self {
        let mut table = [0u8; BINS];
        for (value, entry) in table.iter_mut().enumerate() {
            *entry = value as u8;
        }
        Self { tables: [table; CHANNELS] }
    }

    /// Builds the table that maps `source` intensities onto `reference`.
    ///
    /// Each channel is a single merge over both distributions: the target
    /// cursor starts at 1 and only ever moves forward while the reference
    /// level is still below the source level, so the resulting table is
    /// non-decreasing in the source intensity. Entry `b` is the cursor
    /// position minus one, which keeps entry 0 at 0 when the cursor has not
    /// moved.
    pub fn matching(source: &CumulativeHistogram, reference: &CumulativeHistogram) -> Self {
        let mut tables = [[0u8; BINS]; CHANNELS];
        for (channel, table) in tables.iter_mut().enumerate() {
            *table = match_channel(source.channel(channel), reference.channel(channel));
        }
        Self { tables }
    }

    pub fn table(&self, channel: usize) -> &[u8; BINS] {
        &self.tables[channel]
    }

    /// Returns a copy of `frame` with every channel value passed through its table.
    pub fn apply(&self, frame: &RgbFrame) -> RgbFrame {
        let mut data = frame.data.clone();
        let tables = &self.tables;
        let remap = |pixel: &mut [u8]| {
            for (value, table) in pixel.iter_mut().zip(tables.iter()) {
                *value = table[*value as usize];
            }
        };

        if frame.pixel_count() >= PARALLEL_THRESHOLD {
            data.par_chunks_exact_mut(CHANNELS).for_each(remap);
        } else {
            data.chunks_exact_mut(CHANNELS).for_each(remap);
        }

        RgbFrame {
            width: frame.width,
            height: frame.height,
            data,
        }
    }
}

fn match_channel(source: &[f32; BINS], reference: &[f32; BINS]) -> [u8; BINS] {
    let mut table = [0u8; BINS];
    // must not be reset between bins
    let mut target = 1usize;

    for (entry, &level) in table.iter_mut().zip(source.iter()) {
        while reference[target] < level - MATCH_EPSILON && target < BINS - 1 {
            target += 1;
        }
        *entry = (target - 1) as u8;
    }

    table
}
