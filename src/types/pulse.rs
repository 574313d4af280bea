//! Pulse descriptions.
//!
//! A [`Pulse`] is an on or off interval measured in cycles of a reference
//! signal. It is converted to a run of identical stereo frames at the output
//! sample rate by [`frame_count`].

use serde::{Deserialize, Serialize};

use crate::error::{EncoderError, Result};

/// Whether the transmitter is lit during a pulse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Carrier on: full-scale positive sample.
    On,
    /// Carrier off: silence.
    Off,
}

impl Level {
    /// Returns the 16-bit sample value written for this level.
    pub fn amplitude(&self) -> i16 {
        match self {
            Level::On => i16::MAX,
            Level::Off => 0,
        }
    }

    /// Returns the string representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::On => "on",
            Level::Off => "off",
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single on or off interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pulse {
    /// Transmitter state for the whole interval.
    pub level: Level,
    /// Length of the interval in cycles of the reference signal.
    pub cycles: u32,
    /// Frequency of the reference signal in Hz.
    pub frequency_hz: u32,
}

impl Pulse {
    /// Creates an "on" pulse.
    pub const fn on(cycles: u32, frequency_hz: u32) -> Self {
        Self {
            level: Level::On,
            cycles,
            frequency_hz,
        }
    }

    /// Creates an "off" pulse.
    pub const fn off(cycles: u32, frequency_hz: u32) -> Self {
        Self {
            level: Level::Off,
            cycles,
            frequency_hz,
        }
    }

    /// Number of frames this pulse occupies at `sample_rate`.
    pub fn frame_count(&self, sample_rate: u32) -> Result<u64> {
        frame_count(self.cycles, self.frequency_hz, sample_rate)
    }
}

/// A mark followed by a space: how markers and bits are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PulsePair {
    pub on: Pulse,
    pub off: Pulse,
}

impl PulsePair {
    /// Creates a pair of an on pulse and an off pulse at the same frequency.
    pub const fn new(on_cycles: u32, off_cycles: u32, frequency_hz: u32) -> Self {
        Self {
            on: Pulse::on(on_cycles, frequency_hz),
            off: Pulse::off(off_cycles, frequency_hz),
        }
    }

    /// Returns both pulses in transmission order.
    pub fn pulses(&self) -> [Pulse; 2] {
        [self.on, self.off]
    }
}

/// Converts a cycle count at `frequency_hz` into whole frames at `sample_rate`.
///
/// The duration is computed as `cycles / frequency_hz` seconds and the frame
/// count is truncated toward zero. Output must stay bit-exact, so this is
/// never rounded to nearest even though the error accumulates across pulses.
pub fn frame_count(cycles: u32, frequency_hz: u32, sample_rate: u32) -> Result<u64> {
    if frequency_hz == 0 {
        return Err(EncoderError::zero_frequency(cycles));
    }

    let duration_sec = cycles as f64 / frequency_hz as f64;
    Ok((duration_sec * sample_rate as f64) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn amplitude_levels() {
        assert_eq!(Level::On.amplitude(), 32767);
        assert_eq!(Level::Off.amplitude(), 0);
    }

    #[test]
    fn frame_count_truncates() {
        // 4909 us at 44.1 kHz = 216.4869 frames
        assert_eq!(frame_count(4909, 1_000_000, 44100).unwrap(), 216);
        // 1425 us = 62.8425 frames
        assert_eq!(frame_count(1425, 1_000_000, 44100).unwrap(), 62);
        // 325 us = 14.3325 frames
        assert_eq!(frame_count(325, 1_000_000, 44100).unwrap(), 14);
    }

    #[test]
    fn frame_count_exact_durations() {
        assert_eq!(frame_count(1, 1, 44100).unwrap(), 44100);
        assert_eq!(frame_count(500_000, 1_000_000, 44100).unwrap(), 22050);
    }

    #[test]
    fn zero_cycles_is_zero_frames() {
        assert_eq!(frame_count(0, 1_000_000, 44100).unwrap(), 0);
        assert_eq!(Pulse::on(0, 38_000).frame_count(44100).unwrap(), 0);
    }

    #[test]
    fn zero_frequency_is_rejected() {
        let err = frame_count(818, 0, 44100).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);

        let err = Pulse::off(0, 0).frame_count(44100).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParameter);
    }

    #[test]
    fn pulse_pair_order() {
        let pair = PulsePair::new(818, 325, 1_000_000);
        let [first, second] = pair.pulses();
        assert_eq!(first.level, Level::On);
        assert_eq!(second.level, Level::Off);
        assert_eq!(first.cycles, 818);
        assert_eq!(second.cycles, 325);
    }
}
