//! Structured logging setup
//!
//! Logs go to stderr so that rendered snippets on stdout stay copy-paste
//! clean. Configuration comes from environment variables:
//!
//! - `SNIPPETS_LOG_LEVEL` - trace/debug/info/warn/error (default `warn`)
//! - `SNIPPETS_LOG_FORMAT` - `json` or `pretty` (default `pretty`)
//! - `SNIPPETS_LOG_TARGET_FILTER` - extra comma-separated filter directives
//! - `SNIPPETS_LOG_INCLUDE_LOCATION` - include file:line (default `false`)
//! - `SNIPPETS_LOG_ASYNC` - buffer output on a background thread (default `false`)
//!
//! `RUST_LOG`, when set, takes precedence over `SNIPPETS_LOG_LEVEL`. The CLI
//! `--verbose` flag still raises the result to at least `debug`.

use anyhow::{Context, Result};
use std::env;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Log format: JSON for machines, pretty-print for people
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Extra filter directives (comma-separated)
    pub target_filter: Option<String>,
    /// Include file:line location
    pub include_location: bool,
    /// Buffer output on a background writer thread
    pub async_logging: bool,
    /// Floor of `debug` applied after `RUST_LOG`
    pub verbose: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Pretty,
            target_filter: None,
            include_location: false,
            async_logging: false,
            verbose: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: env::var("SNIPPETS_LOG_LEVEL").unwrap_or(defaults.log_level),
            format: env::var("SNIPPETS_LOG_FORMAT")
                .map(|s| LogFormat::parse(&s))
                .unwrap_or(defaults.format),
            target_filter: env::var("SNIPPETS_LOG_TARGET_FILTER").ok(),
            include_location: env::var("SNIPPETS_LOG_INCLUDE_LOCATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.include_location),
            async_logging: env::var("SNIPPETS_LOG_ASYNC")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.async_logging),
            verbose: defaults.verbose,
        }
    }

    /// Raise the level to at least `debug` (CLI `--verbose`)
    pub fn verbose(mut self) -> Self {
        let level = parse_level(&self.log_level);
        if level != Level::TRACE && level != Level::DEBUG {
            self.log_level = "debug".to_string();
        }
        self.verbose = true;
        self
    }
}

fn parse_level(s: &str) -> Level {
    match s.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

/// Mask a credential for logging, keeping a short prefix for recognition
pub fn redact(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else if value.chars().count() > 8 {
        let prefix: String = value.chars().take(4).collect();
        format!("{prefix}***")
    } else {
        "<REDACTED>".to_string()
    }
}

fn build_filter(config: &LogConfig, rust_log: Option<&str>) -> EnvFilter {
    let level = parse_level(&config.log_level);
    let mut env_filter = rust_log
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str()));

    if config.verbose && env_filter.max_level_hint() != Some(LevelFilter::TRACE) {
        if let Ok(directive) = "debug".parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    // reqwest/hyper chatter is never useful next to a rendered snippet
    for noisy in ["hyper_util=warn", "reqwest=warn", "rustls=warn"] {
        if let Ok(directive) = noisy.parse() {
            env_filter = env_filter.add_directive(directive);
        }
    }

    if let Some(target_filter) = &config.target_filter {
        for filter in target_filter.split(',') {
            let filter = filter.trim();
            if filter.is_empty() {
                continue;
            }
            match filter.parse() {
                Ok(directive) => env_filter = env_filter.add_directive(directive),
                Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
            }
        }
    }
    env_filter
}

/// Initialize the global subscriber
///
/// When async logging is enabled the returned guard must be held until
/// exit so buffered lines are flushed.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging_with_config(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let (writer, guard) = if config.async_logging {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
        (tracing_subscriber::fmt::writer::BoxMakeWriter::new(non_blocking), Some(guard))
    } else {
        (
            tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr),
            None,
        )
    };

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .compact()
            .with_target(false)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_writer(writer)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(build_filter(config, env::var("RUST_LOG").ok().as_deref()))
        .with(fmt_layer)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(guard)
}
