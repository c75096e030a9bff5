use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use spec_reporter::cli::{Args, Command, ReplayArgs};
use spec_reporter::config::{EnvConfig, ReplayConfig};
use spec_reporter::output::{Reporter, ResultPrinter};
use spec_reporter::replay;
use spec_reporter::utils::init_logger;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    match args.command {
        Command::Replay(replay_args) => run_replay(replay_args),
    }
}

fn run_replay(args: ReplayArgs) -> Result<ExitCode> {
    let env = EnvConfig::load();
    let config = ReplayConfig::resolve(args.input, args.log_level.as_deref(), &env)?;

    init_logger(config.log_level);

    let events = replay::load_events(&config.input)
        .with_context(|| format!("Failed to load event log {}", config.input.display()))?;

    let mut printer = ResultPrinter::new();
    info!(
        "Replaying {} (prints to stdio: {})",
        config.input.display(),
        printer.prints_to_stdio()
    );
    replay::replay(&events, &mut printer);

    Ok(ExitCode::from(replay::exit_status(&printer.counters())))
}
