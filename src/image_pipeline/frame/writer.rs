use std::path::Path;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::frame::types::RgbFrame;

pub trait FrameWriter: Sync {
    fn write_frame(&self, frame: &RgbFrame, path: &Path) -> Result<()>;
}
