//! Runtime configuration.
//!
//! Covers where the output goes and how much is printed. Nothing here
//! changes the encoded signal.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Output file used when no path is configured.
pub const DEFAULT_OUTPUT: &str = "output.wav";

/// Runtime configuration for an encoding run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Path of the WAV file to write.
    /// If None, writes `output.wav` in the current directory.
    pub output_path: Option<PathBuf>,

    /// Suppress the per-pulse diagnostic lines.
    pub quiet: bool,

    /// Print the run summary as JSON on stdout.
    pub json: bool,
}

impl EncoderConfig {
    /// Creates a new EncoderConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an EncoderConfig from environment variables.
    ///
    /// Reads the following environment variables:
    /// - `IRWAV_OUTPUT` - Output file path
    /// - `IRWAV_QUIET` - Suppress per-pulse lines (`1`, `true`, `yes`)
    ///
    /// Falls back to defaults for unset or unparseable variables.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = var("IRWAV_OUTPUT") {
            if !path.is_empty() {
                config.output_path = Some(PathBuf::from(path));
            }
        }

        if let Some(quiet) = var("IRWAV_QUIET") {
            if let Some(quiet) = parse_flag(&quiet) {
                config.quiet = quiet;
            }
        }

        config
    }

    /// Returns the effective output path, defaulting to `output.wav`.
    pub fn effective_output_path(&self) -> PathBuf {
        self.output_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if let Some(ref path) = self.output_path {
            if path.as_os_str().is_empty() {
                return Some("output path cannot be empty".to_string());
            }
            if path.is_dir() {
                return Some(format!("output path is a directory: {}", path.display()));
            }
        }

        None
    }
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
