//! Read-back inspection of produced WAV files.
//!
//! Opens a finished file with the hound crate to confirm it parses as PCM
//! WAV and to report its format and length.

use std::path::Path;

use hound::{SampleFormat, WavReader};

use crate::error::{EncoderError, Result};

/// Format and length of a WAV file on disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WavSummary {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
    pub sample_format: SampleFormat,
    /// Number of frames (samples per channel).
    pub frames: u32,
}

impl WavSummary {
    /// Duration of the audio in seconds.
    pub fn duration_sec(&self) -> f32 {
        samples_to_duration(self.frames as usize, self.sample_rate)
    }
}

/// Reads the header of a WAV file and reports what it contains.
///
/// # Example
///
/// ```ignore
/// use irwav::audio::inspect;
///
/// let summary = inspect(Path::new("output.wav"))?;
/// println!("{:.2}s", summary.duration_sec());
/// ```
pub fn inspect(path: &Path) -> Result<WavSummary> {
    let reader = WavReader::open(path).map_err(|e| EncoderError::inspect_failed(path, e))?;
    let spec = reader.spec();

    Ok(WavSummary {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        sample_format: spec.sample_format,
        frames: reader.duration(),
    })
}

/// Calculates the duration of audio in seconds from sample count.
pub fn samples_to_duration(sample_count: usize, sample_rate: u32) -> f32 {
    sample_count as f32 / sample_rate as f32
}
