//! Frame codec backed by the `image` crate.
//!
//! Any format `image` can decode is accepted on input; the output format is
//! chosen from the output file's extension. Alpha and higher bit depths are
//! reduced to 8-bit RGB on load.

use std::path::Path;

use image::{ColorType, ImageError};
use tracing::debug;

use crate::image_pipeline::common::error::{MatchError, Result};
use crate::image_pipeline::frame::reader::FrameReader;
use crate::image_pipeline::frame::types::RgbFrame;
use crate::image_pipeline::frame::writer::FrameWriter;

pub struct ImageCodec;

impl FrameReader for ImageCodec {
    /// Decodes the file at `path` into an interleaved RGB8 frame.
    ///
    /// # Returns
    ///
    /// * `Ok(RgbFrame)` - Successfully decoded image
    /// * `Err(MatchError::InputReadError)` - The file could not be opened
    /// * `Err(MatchError::DecodeError)` - The file is not a decodable image
    fn read_frame(&self, path: &Path) -> Result<RgbFrame> {
        debug!("Decoding {}", path.display());

        let decoded = image::open(path).map_err(|e| match e {
            ImageError::IoError(io) => {
                MatchError::InputReadError(format!("{}: {}", path.display(), io))
            }
            other => MatchError::DecodeError(format!("{}: {}", path.display(), other)),
        })?;

        let rgb = decoded.into_rgb8();
        let (width, height) = rgb.dimensions();

        debug!("Decoded image: {}x{}", width, height);

        Ok(RgbFrame {
            width: width as usize,
            height: height as usize,
            data: rgb.into_raw(),
        })
    }
}

impl FrameWriter for ImageCodec {
    fn write_frame(&self, frame: &RgbFrame, path: &Path) -> Result<()> {
        debug!("Encoding {}x{} to {}", frame.width, frame.height, path.display());

        image::save_buffer(
            path,
            &frame.data,
            frame.width as u32,
            frame.height as u32,
            ColorType::Rgb8,
        )
        .map_err(|e| match e {
            ImageError::IoError(io) => {
                MatchError::OutputWriteError(format!("{}: {}", path.display(), io))
            }
            other => MatchError::EncodeError(format!("{}: {}", path.display(), other)),
        })
    }
}
