//! # pons - Interactive Dictionary CLI
//!
//! `pons` looks words up in the PONS online dictionary and prints the
//! results as aligned two-column tables. Raw API responses are cached on
//! disk so repeated lookups work without the network.
//!
//! ## Quick Start
//!
//! ```text
//! $ pons
//! >>> .set api_key <your_api_key>
//! >>> .dict ende
//! ende >>> house
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/pons-cli/config.toml`:
//!
//! ```toml
//! api_key = "..."
//! cache_ttl = 604800
//! cmd_history_limit = 100
//! ```

/// PONS API client and response model.
pub mod api;

/// On-disk response cache.
pub mod cache;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Search history database.
pub mod history;

/// Diagnostic logging and best-effort side effects.
pub mod logging;

/// Cache-or-fetch lookup pipelines.
pub mod lookup;

/// Global output configuration (colors).
pub mod output;

/// XDG-style path utilities for configuration, cache and data.
pub mod paths;

/// Rendering of lookup results as terminal tables.
pub mod render;

/// Interactive session.
pub mod repl;

/// Terminal UI components (spinner, colors).
pub mod ui;
