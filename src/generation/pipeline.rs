//! Encoding pipeline.
//!
//! Writes one complete WAV file for [`CODE_WORD`]: header skeleton, leading
//! silence, start marker, 32 bit pulse pairs, stop marker, trailing silence,
//! then the patched length fields.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;

use super::pulse::{emit_pulse, emit_silence};
use crate::audio::format::RIFF_SIZE_BASE;
use crate::audio::{SampleSink, WavFormat};
use crate::error::{EncoderError, Result};
use crate::types::timing::{self, CODE_WORD, SILENCE_FRAMES, START_MARKER, STOP_MARKER};
use crate::types::{frames_to_duration, EncodeReport, Level, Pulse};

/// Steps of an encoding run, in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Open,
    HeaderSkeleton,
    Preamble,
    StartMarker,
    BitStream,
    StopMarker,
    Postamble,
    PatchLengths,
    Close,
}

impl Stage {
    /// Returns the string representation of the stage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Open => "open",
            Stage::HeaderSkeleton => "header",
            Stage::Preamble => "preamble",
            Stage::StartMarker => "start-marker",
            Stage::BitStream => "bits",
            Stage::StopMarker => "stop-marker",
            Stage::Postamble => "postamble",
            Stage::PatchLengths => "patch-lengths",
            Stage::Close => "close",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reported once for every pulse written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseEvent {
    pub stage: Stage,
    /// Position of the pulse in the script, starting at 0.
    pub index: usize,
    pub level: Level,
    pub frames: u64,
    pub amplitude: i16,
}

/// Ordered pulses transmitted for `code`, each tagged with its stage.
///
/// Silence is not part of the script.
pub fn pulse_script(code: u32) -> Vec<(Stage, Pulse)> {
    let mut script = Vec::with_capacity(4 + 2 * timing::CODE_BITS as usize);

    script.extend(START_MARKER.pulses().map(|p| (Stage::StartMarker, p)));
    for bit in timing::code_bits(code) {
        script.extend(timing::bit_pair(bit).pulses().map(|p| (Stage::BitStream, p)));
    }
    script.extend(STOP_MARKER.pulses().map(|p| (Stage::StopMarker, p)));

    script
}

/// Encoder state for a single run over a seekable writer.
pub struct PulseEncoder<W: Write + Seek> {
    sink: SampleSink<W>,
    format: WavFormat,
    stage: Stage,
    pulses: usize,
}

impl<W: Write + Seek> PulseEncoder<W> {
    /// Creates an encoder writing from the start of `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            sink: SampleSink::new(writer),
            format: WavFormat::ir_output(),
            stage: Stage::Open,
            pulses: 0,
        }
    }

    /// The stage the encoder is in, or failed in.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Writes the header, every pulse and the patched lengths.
    ///
    /// `on_pulse` is called after each pulse is written. On error the encoder
    /// stays in the stage that failed.
    pub fn run<F>(&mut self, mut on_pulse: F) -> Result<EncodeReport>
    where
        F: FnMut(&PulseEvent),
    {
        self.stage = Stage::HeaderSkeleton;
        let offsets = self.format.write_skeleton(&mut self.sink)?;

        self.stage = Stage::Preamble;
        emit_silence(&mut self.sink, SILENCE_FRAMES)?;

        for (index, (stage, pulse)) in pulse_script(CODE_WORD).into_iter().enumerate() {
            self.stage = stage;
            let frames = emit_pulse(&mut self.sink, &pulse)?;
            self.pulses += 1;
            on_pulse(&PulseEvent {
                stage,
                index,
                level: pulse.level,
                frames,
                amplitude: pulse.level.amplitude(),
            });
        }

        self.stage = Stage::Postamble;
        emit_silence(&mut self.sink, SILENCE_FRAMES)?;

        self.stage = Stage::PatchLengths;
        let payload_bytes = self.sink.payload_bytes();
        offsets.patch(&mut self.sink, payload_bytes)?;

        let frames = self.sink.frames();
        Ok(EncodeReport {
            path: None,
            frames,
            payload_bytes,
            riff_size: RIFF_SIZE_BASE.wrapping_add(payload_bytes as u32),
            pulses: self.pulses,
            duration_sec: frames_to_duration(frames),
            code_word: CODE_WORD,
        })
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.stage = Stage::Close;
        self.sink.into_inner()
    }
}

/// Encodes the command into `writer`.
pub fn encode<W: Write + Seek>(writer: W) -> Result<(W, EncodeReport)> {
    encode_with_progress(writer, |_| {})
}

/// Encodes the command into `writer`, reporting each pulse.
pub fn encode_with_progress<W, F>(writer: W, on_pulse: F) -> Result<(W, EncodeReport)>
where
    W: Write + Seek,
    F: FnMut(&PulseEvent),
{
    let mut encoder = PulseEncoder::new(writer);
    let report = encoder.run(on_pulse)?;
    let writer = encoder.finish()?;
    Ok((writer, report))
}

/// Encodes the command into a WAV file, truncating any existing content.
///
/// # Example
///
/// ```ignore
/// use irwav::generation::encode_to_file;
///
/// let report = encode_to_file(Path::new("output.wav"))?;
/// assert_eq!(report.pulses, 68);
/// ```
pub fn encode_to_file(path: &Path) -> Result<EncodeReport> {
    encode_to_file_with_progress(path, |_| {})
}

/// Encodes the command into a WAV file, reporting each pulse.
pub fn encode_to_file_with_progress<F>(path: &Path, on_pulse: F) -> Result<EncodeReport>
where
    F: FnMut(&PulseEvent),
{
    let file = File::create(path).map_err(|e| EncoderError::resource_open_failed(path, e))?;

    let (_, mut report) = encode_with_progress(BufWriter::new(file), on_pulse)?;
    report.path = Some(path.to_path_buf());

    Ok(report)
}

/// Encodes the command into an in-memory WAV buffer.
pub fn encode_to_vec() -> Result<(Vec<u8>, EncodeReport)> {
    let (cursor, report) = encode(Cursor::new(Vec::new()))?;
    Ok((cursor.into_inner(), report))
}
