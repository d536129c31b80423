//! Tracing setup
//!
//! The TUI owns the terminal, so logs go to a file instead of stderr.
//!
//! # Priority (highest to lowest)
//!
//! 1. `DOCFINDER_LOG` env var (directives, e.g. `docfinder=trace`)
//! 2. `RUST_LOG` env var
//! 3. `--debug` flag → `docfinder=debug`
//!
//! With none of these set, no subscriber is installed.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

fn build_env_filter(debug: bool) -> Option<EnvFilter> {
    if let Ok(directives) = std::env::var("DOCFINDER_LOG") {
        if let Ok(filter) = EnvFilter::try_new(&directives) {
            return Some(filter);
        }
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Some(filter);
    }

    debug.then(|| EnvFilter::new("docfinder=debug,warn"))
}

/// Install the global subscriber writing to `log_path`
///
/// Must be called at most once, before config loading.
pub fn init_logging(debug: bool, log_path: &Path) -> Result<()> {
    let Some(filter) = build_env_filter(debug) else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open debug log {}", log_path.display()))?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!(path = %log_path.display(), "logging initialized");
    Ok(())
}
