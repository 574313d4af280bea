//! Summary of a completed encoding run.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::timing::SAMPLE_RATE;

/// What an encoding run wrote.
///
/// Contains no timestamps, so two runs of the same command produce equal
/// reports as well as equal files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncodeReport {
    /// Output file path, when the run wrote to a file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    /// Stereo frames written after the header.
    pub frames: u64,

    /// Audio payload bytes (4 per frame).
    pub payload_bytes: u64,

    /// Value patched into the RIFF chunk size field.
    pub riff_size: u32,

    /// Number of pulses emitted, markers included.
    pub pulses: usize,

    /// Length of the produced audio in seconds.
    pub duration_sec: f64,

    /// The code word that was encoded.
    pub code_word: u32,
}

impl EncodeReport {
    /// Total size of the produced file in bytes.
    pub fn file_size(&self) -> u64 {
        self.riff_size as u64 + 8
    }
}

/// Converts a stereo frame count to seconds at the output sample rate.
pub fn frames_to_duration(frames: u64) -> f64 {
    frames as f64 / SAMPLE_RATE as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> EncodeReport {
        EncodeReport {
            path: None,
            frames: 44100,
            payload_bytes: 176_400,
            riff_size: 176_436,
            pulses: 68,
            duration_sec: 1.0,
            code_word: 0xE0E0_40BF,
        }
    }

    #[test]
    fn file_size_includes_riff_preamble() {
        assert_eq!(report().file_size(), 176_444);
    }

    #[test]
    fn duration_from_frames() {
        assert_eq!(frames_to_duration(44100), 1.0);
        assert_eq!(frames_to_duration(22050), 0.5);
    }

    #[test]
    fn json_omits_missing_path() {
        let json = serde_json::to_value(report()).unwrap();
        assert!(json.get("path").is_none());
        assert_eq!(json["frames"], 44100);
        assert_eq!(json["duration_sec"], 1.0);
        assert_eq!(json["code_word"], 0xE0E0_40BFu32);
    }
}
