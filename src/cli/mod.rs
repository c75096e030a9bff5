//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Spec-style console reporter for streamed test results
#[derive(Parser, Debug)]
#[command(name = "spec-reporter")]
#[command(version)]
#[command(about = "Render recorded test runs as spec-style console output")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a recorded event log through the printer
    Replay(ReplayArgs),
}

/// Arguments for replay command
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// Event log (.json, .yaml/.yml, or JSON Lines); falls back to SPEC_REPORTER_INPUT
    pub input: Option<PathBuf>,

    /// Diagnostic log level written to stderr (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let args = Args::try_parse_from(["spec-reporter", "replay", "run.jsonl", "-l", "debug"])
            .unwrap();
        let Command::Replay(replay) = args.command;
        assert_eq!(replay.input, Some(PathBuf::from("run.jsonl")));
        assert_eq!(replay.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_input_is_optional() {
        let args = Args::try_parse_from(["spec-reporter", "replay"]).unwrap();
        let Command::Replay(replay) = args.command;
        assert!(replay.input.is_none());
    }
}
