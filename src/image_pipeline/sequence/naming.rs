use crate::image_pipeline::common::error::{MatchError, Result};

/// Builds frame filenames: prefix, zero-padded index, extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNaming {
    pub prefix: String,
    pub extension: String,
    pub digit_count: usize,
}

impl FrameNaming {
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>, digit_count: usize) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
            digit_count,
        }
    }

    /// `Frame` / `.png` / 5 digits turns index 1 into `Frame00001.png`.
    ///
    /// Fails with [`MatchError::ConfigurationError`] when the index needs more
    /// digits than configured.
    pub fn file_name(&self, index: usize) -> Result<String> {
        let numeric = index.to_string();
        if numeric.len() > self.digit_count {
            return Err(MatchError::ConfigurationError(format!(
                "frame index {} needs {} digits but the digit count is {}",
                index,
                numeric.len(),
                self.digit_count
            )));
        }

        Ok(format!(
            "{}{:0>width$}{}",
            self.prefix,
            numeric,
            self.extension,
            width = self.digit_count
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding() {
        let naming = FrameNaming::new("Frame", ".png", 5);
        assert_eq!(naming.file_name(1).unwrap(), "Frame00001.png");
        assert_eq!(naming.file_name(20505).unwrap(), "Frame20505.png");
        assert_eq!(naming.file_name(0).unwrap(), "Frame00000.png");
    }

    #[test]
    fn test_digit_overflow() {
        let naming = FrameNaming::new("Frame", ".png", 4);
        assert_eq!(naming.file_name(9999).unwrap(), "Frame9999.png");
        assert!(matches!(
            naming.file_name(10000),
            Err(MatchError::ConfigurationError(_))
        ));
    }
}
