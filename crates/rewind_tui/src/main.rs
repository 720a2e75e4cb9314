//! Rewind - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind_tui::{Cli, Command, RewindConfig, logging, replay, terminal};

fn main() -> Result<()> {
    // Load .env file so RUST_LOG can live there
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = RewindConfig::load(cli.config.as_deref())?;
    if let Some(sort) = cli.sort {
        config = config.with_sort_order(sort);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => terminal::run(&config),
        Command::Replay {
            moves,
            jump,
            format,
        } => {
            logging::init_stderr_logging(config.log_filter());
            let output = replay::run(&moves, jump, format, &config)?;
            println!("{}", output);
            Ok(())
        }
    }
}
