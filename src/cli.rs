//! CLI argument parser.
//!
//! Every flag is optional; running with none writes `output.wav`.

use std::path::PathBuf;

use clap::Parser;

use crate::config::EncoderConfig;

/// irwav: encode an infrared remote-control command as a WAV pulse train
#[derive(Parser, Debug)]
#[command(name = "irwav")]
#[command(about = "Encodes the 0xE0E040BF remote-control command as a pulse-train WAV file")]
#[command(version)]
pub struct Cli {
    /// Output WAV file path (default: output.wav, or $IRWAV_OUTPUT)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress the per-pulse diagnostic lines
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the per-pulse diagnostic lines even if $IRWAV_QUIET is set
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the run summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Applies the command-line flags on top of `base`.
    ///
    /// Flags that were given take precedence; the rest keep the base values.
    pub fn apply(&self, base: EncoderConfig) -> EncoderConfig {
        EncoderConfig {
            output_path: self.output.clone().or(base.output_path),
            quiet: if self.verbose {
                false
            } else {
                self.quiet || base.quiet
            },
            json: self.json || base.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["irwav"]).unwrap();
        assert!(cli.output.is_none());
        assert!(!cli.quiet);
        assert!(!cli.json);

        let config = cli.apply(EncoderConfig::default());
        assert_eq!(config.effective_output_path(), PathBuf::from("output.wav"));
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["irwav", "-o", "tv.wav", "-q", "--json"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("tv.wav")));
        assert!(cli.quiet);
        assert!(cli.json);
    }

    #[test]
    fn cli_overrides_environment() {
        let base = EncoderConfig {
            output_path: Some(PathBuf::from("env.wav")),
            quiet: true,
            json: false,
        };
        let cli = Cli::try_parse_from(["irwav", "--output", "flag.wav"]).unwrap();
        let config = cli.apply(base);
        assert_eq!(config.effective_output_path(), PathBuf::from("flag.wav"));
        assert!(config.quiet);
    }

    #[test]
    fn environment_used_without_flags() {
        let base = EncoderConfig {
            output_path: Some(PathBuf::from("env.wav")),
            ..Default::default()
        };
        let cli = Cli::try_parse_from(["irwav"]).unwrap();
        assert_eq!(
            cli.apply(base).effective_output_path(),
            PathBuf::from("env.wav")
        );
    }

    #[test]
    fn verbose_overrides_quiet_environment() {
        let base = EncoderConfig {
            quiet: true,
            ..Default::default()
        };
        let cli = Cli::try_parse_from(["irwav", "--verbose"]).unwrap();
        assert!(!cli.apply(base.clone()).quiet);

        let cli = Cli::try_parse_from(["irwav"]).unwrap();
        assert!(cli.apply(base).quiet);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["irwav", "-q", "-v"]).is_err());
    }

    #[test]
    fn unknown_argument_is_rejected() {
        assert!(Cli::try_parse_from(["irwav", "--code", "0x1234"]).is_err());
    }
}
