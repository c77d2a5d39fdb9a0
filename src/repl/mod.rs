//! Interactive dictionary session.
//!
//! Provides a REPL-style interface: words are looked up in the active
//! dictionary, lines starting with a dot are commands.

/// Dot command parsing and completion.
pub mod command;
mod session;
mod ui;

pub use session::Session;
pub use ui::print_error;
