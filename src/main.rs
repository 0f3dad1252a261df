//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `tracer` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Final user-facing output
//!
//! All core functionality is implemented in the library crate.

use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use tracer::initialization::init_logger_with;
use tracer::{run_trace, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_trace(config).await {
        Ok(report) => {
            if let Some(path) = &report.report_path {
                println!("Report saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("tracer error: {:#}", e);
            process::exit(1);
        }
    }
}
