//! Histogram matching module
//!
//! Estimates per-channel intensity distributions, integrates them into
//! cumulative distributions, and derives lookup tables that remap a frame's
//! distribution onto a reference distribution.

mod histogram;
mod cumulative;
mod lut;


pub use histogram::Histogram;
pub use cumulative::CumulativeHistogram;
pub use lut::{Lut, MATCH_EPSILON};

/// Number of intensity bins per channel (full 8-bit range).
pub const BINS: usize = 256;

/// Minimum number of pixels before pixel loops are split across threads.
pub const PARALLEL_THRESHOLD: usize = 100_000;
