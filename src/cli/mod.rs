//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Startup and the interactive session.
pub mod commands;

pub use args::Args;
