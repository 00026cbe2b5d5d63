//! Frame sequence configuration types

use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::image_pipeline::common::error::{MatchError, Result};
use crate::image_pipeline::sequence::naming::FrameNaming;

/// Configuration for a histogram matching run
#[derive(Debug, Clone)]
pub struct SequenceConfig {
    /// Width of the zero-padded frame index in filenames
    pub digit_count: usize,
    /// Index of the reference frame, also the first frame of the run
    pub start_frame: usize,
    /// Number of frames including the reference
    pub frame_count: usize,
    /// Filename prefix before the index
    pub prefix: String,
    /// Filename extension after the index, including the dot
    pub extension: String,
    /// Directory the input frames are read from
    pub input_dir: PathBuf,
    /// Directory the matched frames are written to. Must already exist.
    pub output_dir: PathBuf,
    /// Worker threads for frame processing; `None` lets rayon decide
    pub threads: Option<usize>,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            digit_count: 5,
            start_frame: 1,
            frame_count: 20505,
            prefix: "Frame".to_string(),
            extension: ".png".to_string(),
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("processed"),
            threads: None,
        }
    }
}

impl SequenceConfig {
    pub fn builder() -> SequenceConfigBuilder {
        SequenceConfigBuilder::default()
    }

    /// Checks everything that can be checked without touching the filesystem.
    pub fn validate(&self) -> Result<()> {
        if self.digit_count == 0 {
            return Err(MatchError::ConfigurationError(
                "digit count must be at least 1".to_string(),
            ));
        }
        if self.frame_count == 0 {
            return Err(MatchError::ConfigurationError(
                "frame count must be at least 1".to_string(),
            ));
        }
        if self.threads == Some(0) {
            return Err(MatchError::ConfigurationError(
                "thread count must be at least 1".to_string(),
            ));
        }

        let last = self.last_frame().ok_or_else(|| {
            MatchError::ConfigurationError(format!(
                "frame range {} + {} overflows",
                self.start_frame, self.frame_count
            ))
        })?;

        // the last index is the widest one
        self.naming().file_name(last)?;
        Ok(())
    }

    pub fn last_frame(&self) -> Option<usize> {
        self.start_frame.checked_add(self.frame_count.saturating_sub(1))
    }

    /// All frame indices of the run, reference first.
    pub fn frame_indices(&self) -> Range<usize> {
        self.start_frame..self.start_frame.saturating_add(self.frame_count)
    }

    pub fn naming(&self) -> FrameNaming {
        FrameNaming::new(self.prefix.clone(), self.extension.clone(), self.digit_count)
    }

    pub fn input_path(&self, file_name: &str) -> PathBuf {
        self.input_dir.join(file_name)
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_dir.join(file_name)
    }
}

/// Builder for SequenceConfig
#[derive(Default)]
pub struct SequenceConfigBuilder {
    digit_count: Option<usize>,
    start_frame: Option<usize>,
    frame_count: Option<usize>,
    prefix: Option<String>,
    extension: Option<String>,
    input_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    threads: Option<Option<usize>>,
}

impl SequenceConfigBuilder {
    pub fn digit_count(mut self, digits: usize) -> Self {
        self.digit_count = Some(digits);
        self
    }

    pub fn start_frame(mut self, index: usize) -> Self {
        self.start_frame = Some(index);
        self
    }

    pub fn frame_count(mut self, count: usize) -> Self {
        self.frame_count = Some(count);
        self
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn input_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.input_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn threads(mut self, threads: Option<usize>) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn build(self) -> SequenceConfig {
        let default = SequenceConfig::default();
        SequenceConfig {
            digit_count: self.digit_count.unwrap_or(default.digit_count),
            start_frame: self.start_frame.unwrap_or(default.start_frame),
            frame_count: self.frame_count.unwrap_or(default.frame_count),
            prefix: self.prefix.unwrap_or(default.prefix),
            extension: self.extension.unwrap_or(default.extension),
            input_dir: self.input_dir.unwrap_or(default.input_dir),
            output_dir: self.output_dir.unwrap_or(default.output_dir),
            threads: self.threads.unwrap_or(default.threads),
        }
    }
}
