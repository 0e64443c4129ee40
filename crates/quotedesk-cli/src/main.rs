mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::error::CliError;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

async fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    tracing::debug!(command = ?cli.command, "parsed command line");

    let result = commands::run(&cli).await?;
    output::render(&result, cli.format, cli.pretty)?;

    result.enforce_strict(cli.strict)?;
    Ok(ExitCode::SUCCESS)
}
