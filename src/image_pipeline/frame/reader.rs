use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::frame::types::RgbFrame;

pub trait FrameReader: Sync {
    fn read_frame(&self, path: &Path) -> Result<RgbFrame>;
}
