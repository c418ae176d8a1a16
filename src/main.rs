use anyhow::Result;
use clap::Parser;
use imgdims::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if cli::run(&cli)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
