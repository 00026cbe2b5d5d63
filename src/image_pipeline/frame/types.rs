//! Decoded frame types

/// Number of interleaved channels in an [`RgbFrame`].
pub const CHANNELS: usize = 3;

/// Decoded 8-bit RGB raster
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbFrame {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl RgbFrame {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), width * height * CHANNELS);
        Self { width, height, data }
    }

    /// A frame where every pixel has the same value.
    pub fn filled(width: usize, height: usize, pixel: [u8; CHANNELS]) -> Self {
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(width * height * CHANNELS)
            .collect();
        Self { width, height, data }
    }

    /// Builds a frame by evaluating `f(x, y)` for every pixel, row by row.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; CHANNELS],
    {
        let mut data = Vec::with_capacity(width * height * CHANNELS);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, data }
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0 || self.data.is_empty()
    }
}
