//! CLI module for skillbook
//!
//! Handles command-line argument parsing, subcommand execution and rendering.

pub mod args;
pub mod commands;
pub mod display;

pub use args::{Args, Commands, Verbosity};
pub use commands::{execute, exit_code, EXIT_FAILURE};
