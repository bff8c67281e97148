// src/main.rs
use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use pyinitgen::cli::{Args, run};
use pyinitgen::logging::init_logging;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.log_level())?;

    let result = run(&args)?;
    Ok(ExitCode::from(result.status))
}
