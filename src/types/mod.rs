//! Core types for irwav.
//!
//! - [`Pulse`] / [`PulsePair`]: on and off intervals and their frame counts
//! - [`timing`]: the constants table for the encoded command
//! - [`EncodeReport`]: summary of a finished run

mod pulse;
mod report;
pub mod timing;

pub use pulse::{frame_count, Level, Pulse, PulsePair};
pub use report::{frames_to_duration, EncodeReport};
