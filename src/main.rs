//! irwav: writes the remote-control command to a pulse-train WAV file.
//!
//! Exits 0 when the file is complete, 1 if it could not be written.

use std::path::Path;

use irwav::audio::inspect;
use irwav::cli::Cli;
use irwav::config::EncoderConfig;
use irwav::error::{EncoderError, ErrorCode, Result};
use irwav::generation::{encode_to_file_with_progress, PulseEvent};
use irwav::types::EncodeReport;

fn main() {
    if let Err(e) = run() {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = cli.apply(EncoderConfig::from_env());

    if let Some(reason) = config.validate() {
        return Err(EncoderError::new(ErrorCode::ResourceOpenFailed, reason));
    }

    let output_path = config.effective_output_path();

    if !config.quiet {
        eprintln!("=== irwav ===");
        eprintln!("Code word: {:#010X}", irwav::types::timing::CODE_WORD);
        eprintln!("Output: {}", output_path.display());
        eprintln!();
    }

    let report = encode_to_file_with_progress(&output_path, |event| {
        if !config.quiet {
            print_pulse(event);
        }
    })?;

    let duration_sec = audio_duration(&output_path, &report);

    if !config.quiet {
        eprintln!();
        eprintln!("Encoding complete!");
        eprintln!("  Pulses: {}", report.pulses);
        eprintln!("  Frames: {}", report.frames);
        eprintln!("  Payload: {} bytes", report.payload_bytes);
        eprintln!("  Audio duration: {:.3}s", duration_sec);
        eprintln!("Saved to: {}", output_path.display());
    }

    if config.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            EncoderError::with_source(ErrorCode::WriteFailed, "Failed to serialize report", e)
        })?;
        println!("{}", json);
    }

    Ok(())
}

/// Reads the finished file back to report its duration.
///
/// The file is already complete at this point, so a failed read-back only
/// warns and falls back to the duration computed while encoding.
fn audio_duration(path: &Path, report: &EncodeReport) -> f64 {
    match inspect(path) {
        Ok(summary) => summary.duration_sec() as f64,
        Err(e) => {
            eprintln!("Warning: {}", e);
            report.duration_sec
        }
    }
}

/// Prints the diagnostic line for one pulse.
fn print_pulse(event: &PulseEvent) {
    eprintln!(
        "[{}] write {} samples of {}",
        event.stage, event.frames, event.amplitude
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use irwav::generation::{encode_to_file, Stage};
    use irwav::types::Level;
    use tempfile::tempdir;

    #[test]
    fn print_pulse_doesnt_panic() {
        print_pulse(&PulseEvent {
            stage: Stage::StartMarker,
            index: 0,
            level: Level::On,
            frames: 216,
            amplitude: i16::MAX,
        });
    }

    #[test]
    fn audio_duration_reads_written_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.wav");
        let report = encode_to_file(&path).unwrap();

        let duration = audio_duration(&path, &report);
        assert!((duration - report.duration_sec).abs() < 1e-4);
    }

    #[test]
    fn unreadable_output_does_not_fail_the_run() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output.wav");
        let report = encode_to_file(&path).unwrap();

        // a file hound cannot parse stands in for one we may not read
        std::fs::write(&path, b"not a wav file").unwrap();
        assert!(inspect(&path).is_err());
        assert_eq!(audio_duration(&path, &report), report.duration_sec);

        std::fs::remove_file(&path).unwrap();
        assert_eq!(audio_duration(&path, &report), report.duration_sec);
    }
}
