use crate::image_pipeline::common::error::MatchError;

/// A frame that produced no output.
#[derive(Debug)]
pub struct FrameFailure {
    pub index: usize,
    pub error: MatchError,
}

/// Outcome of a completed run, ordered by frame index.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Indices whose output file was written, reference included
    pub written: Vec<usize>,
    pub failed: Vec<FrameFailure>,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn failed_indices(&self) -> Vec<usize> {
        self.failed.iter().map(|f| f.index).collect()
    }
}
