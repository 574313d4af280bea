//! Pulse synthesis.
//!
//! Turns a [`Pulse`] into a run of identical stereo frames.

use std::io::{Seek, Write};

use crate::audio::SampleSink;
use crate::error::Result;
use crate::types::timing::SAMPLE_RATE;
use crate::types::Pulse;

/// Writes `pulse` to the sink as constant-amplitude frames.
///
/// Both channels carry the level's amplitude. Returns the number of frames
/// written, which is 0 for a zero-cycle pulse.
pub fn emit_pulse<W: Write + Seek>(sink: &mut SampleSink<W>, pulse: &Pulse) -> Result<u64> {
    let frames = pulse.frame_count(SAMPLE_RATE)?;
    let amplitude = pulse.level.amplitude();

    for _ in 0..frames {
        sink.emit_sample_frame(amplitude, amplitude)?;
    }

    Ok(frames)
}

/// Writes `frames` frames of silence.
pub fn emit_silence<W: Write + Seek>(sink: &mut SampleSink<W>, frames: u64) -> Result<()> {
    for _ in 0..frames {
        sink.emit_sample_frame(0, 0)?;
    }
    Ok(())
}
