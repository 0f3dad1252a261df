//! tracer library: username presence scanning across websites.
//!
//! Given a username, this library probes a registry of websites with one
//! concurrent HTTP request per site and classifies each response into an
//! existence verdict using site-specific rules (status code, redirect
//! pattern, body pattern). Results stream back in completion order.
//!
//! # Example
//!
//! ```no_run
//! use futures::StreamExt;
//! use tracer::{dispatch, Registry};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = Registry::builtin()?;
//! let client = reqwest::Client::new();
//!
//! let mut results = dispatch(&registry, "chr3st5an", &client, None)?;
//! while let Some(result) = results.next().await {
//!     if result.exists {
//!         println!("{}", result.url);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
pub mod diagnostics;
mod error_handling;
pub mod initialization;
pub mod probe;
pub mod registry;
pub mod report;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, RegistryError, TracerError};
pub use probe::{classify, dispatch, dispatch_with_cap, ProbeResult, ProbeStream};
pub use registry::{Category, FilterRules, Registry, SiteDefinition};
pub use run::{run_trace, TraceReport};

// Internal run module (ties registry, engine and output together)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use colored::Colorize;
    use futures::StreamExt;
    use log::debug;

    use crate::config::Config;
    use crate::diagnostics;
    use crate::initialization::init_client;
    use crate::probe::dispatch_with_cap;
    use crate::registry::{self, Registry};
    use crate::report::write_report;

    /// Summary of a completed trace run.
    #[derive(Debug, Clone)]
    pub struct TraceReport {
        /// Number of sites probed (after filtering)
        pub sites_checked: usize,
        /// Number of sites where the username appears to exist
        pub matches: usize,
        /// Total elapsed wall-clock time in seconds
        pub elapsed_seconds: f64,
        /// Path of the written report file, if one was requested
        pub report_path: Option<PathBuf>,
    }

    /// Runs a full trace with the provided configuration.
    ///
    /// Loads and filters the site registry, dispatches one probe per site,
    /// prints each verdict as it arrives (matches always; misses and
    /// timeouts only with `--all`), and optionally writes a report file.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry fails to load, the filter rules
    /// name an unknown category, the HTTP client cannot be built, the
    /// filtered registry or username is empty, or the report file cannot
    /// be written. Individual probe failures are not errors.
    pub async fn run_trace(config: Config) -> Result<TraceReport> {
        let registry = Registry::builtin().context("Failed to load the site registry")?;
        let registry = registry::filter(&registry, &config.filter_rules())?;

        let client = init_client(&config).context("Failed to initialize HTTP client")?;

        if config.ip_check {
            match diagnostics::public_ip(&client).await {
                Some(ip) => println!("Your IP address is {}\n", ip.cyan()),
                None => println!("Your IP address could not be determined\n"),
            }
        }

        println!(
            "[{}] Checking {} on {} sites:\n",
            "*".cyan(),
            config.username.cyan(),
            registry.len()
        );

        let start = Instant::now();
        let mut results = dispatch_with_cap(
            &registry,
            &config.username,
            &client,
            config.probe_timeout(),
            config.concurrency_cap(),
        )?;

        let mut sites_checked = 0usize;
        let mut matches = Vec::new();

        while let Some(result) = results.next().await {
            sites_checked += 1;

            if let Some(error) = &result.error {
                debug!("{}: {error}", result.site.domain);
            }

            let message = if config.verbose {
                format!("{} {}", result.url, result.verbose().cyan())
            } else {
                result.url.clone()
            };

            if result.exists {
                println!("{} {message}", "[+]".green());
                matches.push(result);
            } else if config.all {
                if result.timed_out {
                    println!("{} {message}", "[Timeout]".red());
                } else {
                    println!("{} {message}", "[-]".red());
                }
            }
        }

        let elapsed_seconds = (start.elapsed().as_secs_f64() * 100.0).round() / 100.0;

        println!(
            "\n[{}] Found {} match(es) in {}s",
            "=".cyan(),
            matches.len().to_string().cyan(),
            format!("{elapsed_seconds}").cyan()
        );

        let report_path = match &config.output {
            Some(dir) => Some(
                write_report(dir, &config.username, &matches)
                    .await
                    .context("Failed to write report file")?,
            ),
            None => None,
        };

        Ok(TraceReport {
            sites_checked,
            matches: matches.len(),
            elapsed_seconds,
            report_path,
        })
    }
}
