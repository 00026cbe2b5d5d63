//! Image processing pipeline module
//!
//! This module provides histogram matching for frame sequences, with separate
//! modules for frame I/O, distribution matching, and sequence orchestration.

pub mod frame;
pub mod matching;
pub mod sequence;
pub mod common;

pub use common::{
    MatchError,
    Result,
};

pub use frame::{
    RgbFrame,
    FrameReader,
    FrameWriter,
    ImageCodec,
};

pub use matching::{
    Histogram,
    CumulativeHistogram,
    Lut,
};

pub use sequence::{
    SequenceConfig,
    SequenceConfigBuilder,
    SequenceDriver,
    FrameNaming,
    FrameFailure,
    RunSummary,
};
