//! Audio output module.
//!
//! Provides the byte sink, the WAV header layout and read-back inspection.

pub mod format;
pub mod sink;
pub mod wav;

// Re-export commonly used items
pub use format::{PlaceholderOffsets, WavFormat, HEADER_LEN};
pub use sink::SampleSink;
pub use wav::{inspect, samples_to_duration, WavSummary};
