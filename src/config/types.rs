//! Configuration types and CLI options.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::DEFAULT_USER_AGENT;
use crate::registry::FilterRules;

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Run configuration, parsed from the command line.
///
/// The probe engine treats this as an opaque read-only settings struct; it
/// can also be constructed programmatically when the crate is used as a
/// library.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tracer",
    version,
    about = "Check on which websites a username is in use"
)]
pub struct Config {
    /// The username to check
    pub username: String,

    /// Per-probe timeout in seconds (unbounded if omitted)
    #[arg(short, long, value_name = "seconds")]
    pub timeout: Option<u64>,

    /// Exclude a website, e.g. instagram.com. Can be used multiple times
    #[arg(short = 'e', long = "exclude", value_name = "domain")]
    pub exclude: Vec<String>,

    /// Probe only the given site. Can be used multiple times
    #[arg(short = 'o', long = "only", value_name = "domain")]
    pub only: Vec<String>,

    /// Exclude every website belonging to the given category
    #[arg(short = 'E', long = "exclude-category", value_name = "category")]
    pub exclude_category: Vec<String>,

    /// Probe only the websites belonging to the given category
    #[arg(short = 'O', long = "only-category", value_name = "category")]
    pub only_category: Vec<String>,

    /// Also print misses and timeouts, not just matches
    #[arg(short, long)]
    pub all: bool,

    /// Append timing, responding host and status code to every line
    #[arg(short, long)]
    pub verbose: bool,

    /// Retrieve and print the public IP address before the run starts
    #[arg(long)]
    pub ip_check: bool,

    /// Directory to write a per-username report file into
    #[arg(long, value_name = "dir")]
    pub output: Option<PathBuf>,

    /// Cap on concurrently running probes (0 = one task per site, no cap)
    #[arg(long, value_name = "n", default_value_t = 0)]
    pub max_concurrency: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Config {
    /// Per-probe timeout as a `Duration`. `None` means "no bound".
    pub fn probe_timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }

    /// Concurrency ceiling for the dispatcher. `None` reproduces the
    /// default unbounded one-task-per-site fan-out.
    pub fn concurrency_cap(&self) -> Option<usize> {
        if self.max_concurrency == 0 {
            None
        } else {
            Some(self.max_concurrency)
        }
    }

    /// Include/exclude rules for the site filter.
    pub fn filter_rules(&self) -> FilterRules {
        FilterRules {
            exclude_domains: self.exclude.clone(),
            only_domains: self.only.clone(),
            exclude_categories: self.exclude_category.clone(),
            only_categories: self.only_category.clone(),
        }
    }
}
