//! Error types for irwav.
//!
//! Every failure is fatal: the library returns an [`EncoderError`] and the
//! binary prints it and exits with status 1.

use std::fmt;
use std::path::Path;

/// Error codes identifying what went wrong during an encoding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The output file could not be created or opened for writing.
    /// Trigger: missing parent directory, permissions, read-only filesystem.
    ResourceOpenFailed,

    /// A write, seek or flush on the output sink failed.
    /// Trigger: disk full, I/O error, sink closed underneath us.
    WriteFailed,

    /// A pulse was described with parameters that cannot be converted to frames.
    /// Trigger: signal frequency of 0 Hz.
    InvalidParameter,

    /// A produced file could not be read back as WAV.
    /// Trigger: file removed or truncated after writing.
    InspectFailed,
}

impl ErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ResourceOpenFailed => "RESOURCE_OPEN_FAILED",
            ErrorCode::WriteFailed => "WRITE_FAILED",
            ErrorCode::InvalidParameter => "INVALID_PARAMETER",
            ErrorCode::InspectFailed => "INSPECT_FAILED",
        }
    }

    /// Returns a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::ResourceOpenFailed => "Output file could not be created",
            ErrorCode::WriteFailed => "Writing to the output file failed",
            ErrorCode::InvalidParameter => "Pulse parameters are out of range",
            ErrorCode::InspectFailed => "Produced file could not be read back as WAV",
        }
    }

    /// Returns a recovery hint suggesting how to resolve this error.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCode::ResourceOpenFailed => {
                "Check that the parent directory exists and is writable, \
                 or pass a different path with --output"
            }
            ErrorCode::WriteFailed => {
                "Check free disk space and rerun; the partial output file is not usable"
            }
            ErrorCode::InvalidParameter => "Pulse signal frequency must be greater than 0 Hz",
            ErrorCode::InspectFailed => {
                "Make sure nothing else modifies the output file while irwav runs"
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for encoding operations.
#[derive(Debug)]
pub struct EncoderError {
    /// The error code identifying the type of error.
    pub code: ErrorCode,
    /// Human-readable error message with context.
    pub message: String,
    /// Optional underlying cause of the error.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EncoderError {
    /// Creates a new EncoderError with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new EncoderError with an underlying cause.
    pub fn with_source(
        code: ErrorCode,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a RESOURCE_OPEN_FAILED error carrying the OS reason.
    pub fn resource_open_failed(path: &Path, err: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::ResourceOpenFailed,
            format!("Failed to open {}: {}", path.display(), err),
            err,
        )
    }

    /// Creates a WRITE_FAILED error.
    pub fn write_failed(what: impl Into<String>, err: std::io::Error) -> Self {
        Self::with_source(
            ErrorCode::WriteFailed,
            format!("Failed to write {}: {}", what.into(), err),
            err,
        )
    }

    /// Creates an INVALID_PARAMETER error for a pulse with no signal frequency.
    pub fn zero_frequency(cycles: u32) -> Self {
        Self::new(
            ErrorCode::InvalidParameter,
            format!("Pulse of {} cycles has a signal frequency of 0 Hz", cycles),
        )
    }

    /// Creates an INSPECT_FAILED error.
    pub fn inspect_failed(path: &Path, err: hound::Error) -> Self {
        Self::with_source(
            ErrorCode::InspectFailed,
            format!("Failed to read back {}: {}", path.display(), err),
            err,
        )
    }
}

impl fmt::Display for EncoderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}. Recovery: {}",
            self.code,
            self.message,
            self.code.recovery_hint()
        )
    }
}

impl std::error::Error for EncoderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias using EncoderError.
pub type Result<T> = std::result::Result<T, EncoderError>;
