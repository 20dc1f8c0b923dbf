//! journal - browse and edit a book journal from the terminal

mod cli;
mod commands;
mod logging;

use std::io::Write as _;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

fn main() -> ExitCode {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn try_main() -> anyhow::Result<()> {
    logging::init().context("init logging")?;

    let cli = cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(cli, &mut out)?;
    out.flush().context("flush stdout")?;

    Ok(())
}
