mod args;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use ulcompress::CompressionEngine;

use args::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Help and version go to stdout and succeed; every usage error exits 1.
            let code = if e.use_stderr() { 1 } else { 0 };
            if e.print().is_err() {
                // The usual stream is gone; the exit code still reports the failure.
                eprintln!("{e}");
            }
            return ExitCode::from(code);
        }
    };

    logging::setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let shift = cli.shift();
    debug!(%shift, "net shift");

    let engine = CompressionEngine::new();
    ulcompress::fs::compress_file(&engine, &cli.file, &shift)
        .with_context(|| format!("Failed to shift {}", cli.file.display()))?;

    Ok(())
}
