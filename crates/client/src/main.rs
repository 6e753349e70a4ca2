//! `mana` command-line client.
mod cli;
mod commands;
mod config;
mod logging;
mod render;
mod store;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use commands::Invocation;
use config::CliConfig;

fn main() -> ExitCode {
    // Load .env file if it exists (for MANA_* settings)
    let _ = dotenvy::dotenv();
    logging::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            commands::report(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CliConfig::load()?;
    if let Some(path) = cli.session {
        config.session_file = Some(path);
    }
    if let Some(mode) = cli.display {
        config.mana.display_mode = mode;
    }
    if let Some(point) = cli.insertion {
        config.mana.situational_insertion = point;
    }
    let invocation = Invocation::new(&config);
    tracing::debug!(?config, session = %invocation.store.path().display(), "configuration resolved");
    let stdout = std::io::stdout();
    commands::run(cli.command, &invocation, &mut stdout.lock())
}
