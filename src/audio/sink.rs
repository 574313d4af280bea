//! Byte sink for WAV output.
//!
//! [`SampleSink`] performs every raw write of an encoding run and keeps the
//! running count of payload bytes needed to patch the header afterwards.

use std::io::{Seek, SeekFrom, Write};

use crate::error::{EncoderError, Result};

/// Bytes in one stereo frame of 16-bit samples.
pub const FRAME_BYTES: u64 = 4;

/// Seekable writer that counts the audio payload it has written.
pub struct SampleSink<W: Write + Seek> {
    inner: W,
    payload_bytes: u64,
}

impl<W: Write + Seek> SampleSink<W> {
    /// Wraps a writer positioned at the start of the output.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            payload_bytes: 0,
        }
    }

    /// Appends bytes verbatim.
    pub fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        self.inner
            .write_all(bytes)
            .map_err(|e| EncoderError::write_failed(format!("{} bytes", bytes.len()), e))
    }

    /// Writes a 32-bit little-endian integer.
    pub fn write_le32(&mut self, value: u32) -> Result<()> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Writes a 16-bit little-endian integer.
    pub fn write_le16(&mut self, value: u16) -> Result<()> {
        self.write_raw(&value.to_le_bytes())
    }

    /// Writes one stereo frame, left channel first.
    ///
    /// This is the only place the payload counter advances.
    pub fn emit_sample_frame(&mut self, left: i16, right: i16) -> Result<()> {
        let mut frame = [0u8; FRAME_BYTES as usize];
        frame[..2].copy_from_slice(&left.to_le_bytes());
        frame[2..].copy_from_slice(&right.to_le_bytes());
        self.write_raw(&frame)?;
        self.payload_bytes += FRAME_BYTES;
        Ok(())
    }

    /// Audio payload bytes written so far, header excluded.
    pub fn payload_bytes(&self) -> u64 {
        self.payload_bytes
    }

    /// Stereo frames written so far.
    pub fn frames(&self) -> u64 {
        self.payload_bytes / FRAME_BYTES
    }

    /// Current write position in the underlying stream.
    pub fn position(&mut self) -> Result<u64> {
        self.inner
            .stream_position()
            .map_err(|e| EncoderError::write_failed("stream position", e))
    }

    /// Overwrites a 32-bit little-endian field at an earlier offset.
    ///
    /// Leaves the stream positioned just after the patched field.
    pub fn patch_le32(&mut self, offset: u64, value: u32) -> Result<()> {
        self.inner
            .seek(SeekFrom::Start(offset))
            .map_err(|e| EncoderError::write_failed(format!("seek to offset {}", offset), e))?;
        self.write_le32(value)
    }

    /// Flushes buffered output and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W> {
        self.inner
            .flush()
            .map_err(|e| EncoderError::write_failed("final flush", e))?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::{self, Cursor};

    /// Writer that rejects every write, for exercising the failure path.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Seek for BrokenWriter {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Ok(0)
        }
    }

    #[test]
    fn little_endian_fields() {
        let mut sink = SampleSink::new(Cursor::new(Vec::new()));
        sink.write_le32(0x1234_5678).unwrap();
        sink.write_le16(0xABCD).unwrap();
        let bytes = sink.into_inner().unwrap().into_inner();
        assert_eq!(bytes, vec![0x78, 0x56, 0x34, 0x12, 0xCD, 0xAB]);
    }

    #[test]
    fn raw_writes_do_not_count_as_payload() {
        let mut sink = SampleSink::new(Cursor::new(Vec::new()));
        sink.write_raw(b"RIFF").unwrap();
        sink.write_le32(0).unwrap();
        assert_eq!(sink.payload_bytes(), 0);
        assert_eq!(sink.position().unwrap(), 8);
    }

    #[test]
    fn frames_advance_counter_by_four() {
        let mut sink = SampleSink::new(Cursor::new(Vec::new()));
        sink.emit_sample_frame(i16::MAX, i16::MAX).unwrap();
        sink.emit_sample_frame(-2, 1).unwrap();
        assert_eq!(sink.payload_bytes(), 8);
        assert_eq!(sink.frames(), 2);

        let bytes = sink.into_inner().unwrap().into_inner();
        assert_eq!(bytes, vec![0xFF, 0x7F, 0xFF, 0x7F, 0xFE, 0xFF, 0x01, 0x00]);
    }

    #[test]
    fn patch_overwrites_in_place() {
        let mut sink = SampleSink::new(Cursor::new(Vec::new()));
        sink.write_raw(b"abcd").unwrap();
        sink.write_le32(0).unwrap();
        sink.write_raw(b"efgh").unwrap();
        sink.patch_le32(4, 0xDEAD_BEEF).unwrap();

        let bytes = sink.into_inner().unwrap().into_inner();
        assert_eq!(bytes.len(), 12);
        assert_eq!(&bytes[4..8], &0xDEAD_BEEFu32.to_le_bytes());
        assert_eq!(&bytes[8..], b"efgh");
    }

    #[test]
    fn write_failure_is_fatal_error() {
        let mut sink = SampleSink::new(BrokenWriter);
        let err = sink.emit_sample_frame(0, 0).unwrap_err();
        assert_eq!(err.code, ErrorCode::WriteFailed);
        assert!(err.to_string().contains("device gone"));
        assert_eq!(sink.payload_bytes(), 0);
    }
}
