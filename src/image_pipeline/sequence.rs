//! Frame sequence orchestration module
//!
//! Configuration, filename construction and the driver that matches every
//! frame of a sequence against the sequence's first frame.

mod config;
mod naming;
mod driver;
mod summary;


pub use config::{SequenceConfig, SequenceConfigBuilder};
pub use naming::FrameNaming;
pub use driver::SequenceDriver;
pub use summary::{FrameFailure, RunSummary};
