//! Pulse-train generation.
//!
//! Provides pulse synthesis and the encoding pipeline.

pub mod pipeline;
pub mod pulse;

// Re-export commonly used items
pub use pipeline::{
    encode, encode_to_file, encode_to_file_with_progress, encode_to_vec, encode_with_progress,
    pulse_script, PulseEncoder, PulseEvent, Stage,
};
pub use pulse::{emit_pulse, emit_silence};
