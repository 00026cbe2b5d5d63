//! Frame decoding and encoding module
//!
//! This module wraps the image codec behind reader and writer traits so the
//! sequence driver can be exercised without touching the filesystem.

mod reader;
mod writer;
mod image_codec;
pub mod types;

pub use reader::FrameReader;
pub use writer::FrameWriter;
pub use image_codec::ImageCodec;
pub use types::{RgbFrame, CHANNELS};
