//! Tracing subscriber setup
//!
//! Every run writes a plain-text log file in the invocation's working
//! directory (truncated each run) and mirrors warnings to stderr. The
//! pipeline itself only emits `tracing` events.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Layer};

/// Log file name used when none is given.
pub const DEFAULT_LOG_FILE: &str = "regex_subdir_graph.txt";

/// Layer writing DEBUG and above to `file` without ANSI colouring.
pub fn file_layer<S>(file: File) -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .with_filter(LevelFilter::DEBUG)
}

/// Filter for the stderr layer.
///
/// Directives from `env_directives` (the RUST_LOG value) are used as given.
/// Only when there are none does `verbose` pick DEBUG, otherwise WARN.
pub fn stderr_filter(env_directives: Option<&str>, verbose: bool) -> EnvFilter {
    let default = if verbose { LevelFilter::DEBUG } else { LevelFilter::WARN };
    EnvFilter::builder()
        .with_default_directive(default.into())
        .parse_lossy(env_directives.unwrap_or_default())
}

/// Install the global subscriber.
pub fn init(log_file: &Path, verbose: bool) -> Result<()> {
    let file = File::create(log_file)
        .with_context(|| format!("Failed creating log file: {}", log_file.display()))?;

    let env_directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = stderr_filter(env_directives.as_deref(), verbose);

    let _ = tracing_subscriber::registry()
        .with(file_layer(file))
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .try_init();

    Ok(())
}
