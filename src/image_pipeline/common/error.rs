use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid configuration: {0}")]
    ConfigurationError(String),

    #[error("Output directory does not exist: {0}")]
    MissingOutputDirectory(String),

    #[error("Failed to load reference frame: {0}")]
    ReferenceLoadError(String),

    #[error("Failed to load frame: {0}")]
    FrameLoadError(String),

    #[error("Image has no pixels: width={0}, height={1}")]
    EmptyImage(usize, usize),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to decode image: {0}")]
    DecodeError(String),

    #[error("Failed to encode image: {0}")]
    EncodeError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to start worker pool: {0}")]
    WorkerPoolError(String),
}

impl MatchError {
    /// Fatal errors end the run; everything else is confined to one frame.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MatchError::ConfigurationError(_)
                | MatchError::MissingOutputDirectory(_)
                | MatchError::ReferenceLoadError(_)
                | MatchError::WorkerPoolError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        let fatal = [
            MatchError::ConfigurationError("digits".to_string()),
            MatchError::MissingOutputDirectory("out".to_string()),
            MatchError::ReferenceLoadError("Frame00001.png".to_string()),
            MatchError::WorkerPoolError("pool".to_string()),
        ];
        let per_frame = [
            MatchError::FrameLoadError("Frame00002.png".to_string()),
            MatchError::EmptyImage(0, 0),
            MatchError::InputReadError("Frame00002.png".to_string()),
            MatchError::DecodeError("Frame00002.png".to_string()),
            MatchError::EncodeError("Frame00002.png".to_string()),
            MatchError::OutputWriteError("Frame00002.png".to_string()),
        ];

        assert!(fatal.iter().all(MatchError::is_fatal));
        assert!(!per_frame.iter().any(MatchError::is_fatal));
    }
}
