//! Diagnostic logging setup
//!
//! Diagnostics go to stderr through `tracing`; stdout carries only documents.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: Verbosity, color: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi(color, std::io::stderr().is_terminal()))
        .try_init()
        .ok();
}

/// Escape codes only when colour is enabled and stderr is a terminal
fn use_ansi(color: bool, stderr_is_terminal: bool) -> bool {
    color && stderr_is_terminal
}
