//! WAV header layout.
//!
//! The header is written once with both size fields set to 0, then those two
//! fields are patched when the payload length is known.

use std::io::{Seek, Write};

use super::sink::SampleSink;
use crate::error::Result;
use crate::types::timing::{BITS_PER_SAMPLE, CHANNELS, SAMPLE_RATE};

/// Size of the canonical PCM WAV header.
pub const HEADER_LEN: u64 = 44;

/// Offset of the RIFF chunk size field.
pub const RIFF_SIZE_OFFSET: u64 = 4;

/// Offset of the data chunk size field.
pub const DATA_SIZE_OFFSET: u64 = 40;

/// Header bytes counted by the RIFF size field in front of the payload.
pub const RIFF_SIZE_BASE: u32 = 36;

/// PCM WAV format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// The format every irwav file uses: 44.1 kHz, 16-bit, stereo.
    pub fn ir_output() -> Self {
        Self {
            channels: CHANNELS,
            sample_rate: SAMPLE_RATE,
            bits_per_sample: BITS_PER_SAMPLE,
        }
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.channels as u32 * (self.bits_per_sample / 8) as u32
    }

    /// Writes the header with zeroed size fields.
    ///
    /// Returns where the two placeholders landed so they can be patched.
    pub fn write_skeleton<W: Write + Seek>(
        &self,
        sink: &mut SampleSink<W>,
    ) -> Result<PlaceholderOffsets> {
        sink.write_raw(b"RIFF")?;
        let riff_size = sink.position()?;
        sink.write_le32(0)?;
        sink.write_raw(b"WAVE")?;

        sink.write_raw(b"fmt ")?;
        sink.write_le32(16)?;
        sink.write_le16(1)?; // linear PCM
        sink.write_le16(self.channels)?;
        sink.write_le32(self.sample_rate)?;
        sink.write_le32(self.byte_rate())?;
        sink.write_le16(self.block_align())?;
        sink.write_le16(self.bits_per_sample)?;

        sink.write_raw(b"data")?;
        let data_size = sink.position()?;
        sink.write_le32(0)?;

        Ok(PlaceholderOffsets {
            riff_size,
            data_size,
        })
    }
}

impl Default for WavFormat {
    fn default() -> Self {
        Self::ir_output()
    }
}

/// Stream offsets of the two header fields that depend on the payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderOffsets {
    pub riff_size: u64,
    pub data_size: u64,
}

impl PlaceholderOffsets {
    /// Patches both size fields for a payload of `payload_bytes`.
    ///
    /// Sizes are narrowed to the 32-bit field width without range checks.
    pub fn patch<W: Write + Seek>(
        &self,
        sink: &mut SampleSink<W>,
        payload_bytes: u64,
    ) -> Result<()> {
        let data_size = payload_bytes as u32;
        sink.patch_le32(self.riff_size, RIFF_SIZE_BASE.wrapping_add(data_size))?;
        sink.patch_le32(self.data_size, data_size)
    }
}
