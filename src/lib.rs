//! irwav: encodes an infrared remote-control command as a WAV pulse train.
//!
//! The 32-bit code word `0xE0E040BF` is written as on/off pulses in a 16-bit
//! stereo 44.1 kHz PCM WAV file. Played through an infrared transmitter
//! circuit, the file reproduces the command's timing.
//!
//! # Modules
//!
//! - [`types`]: Pulses, the timing table and the run report
//! - [`audio`]: Byte sink, WAV header layout and read-back inspection
//! - [`generation`]: Pulse synthesis and the encoding pipeline
//! - [`config`]: Runtime configuration (EncoderConfig)
//! - [`error`]: Error types and codes (EncoderError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use irwav::generation::encode_to_file_with_progress;
//!
//! let report = encode_to_file_with_progress(Path::new("output.wav"), |event| {
//!     println!("write {} samples of {}", event.frames, event.amplitude);
//! })?;
//! assert_eq!(report.payload_bytes, 4 * report.frames);
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod generation;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use config::EncoderConfig;
pub use error::{EncoderError, ErrorCode, Result};
pub use types::{EncodeReport, Level, Pulse, PulsePair};
