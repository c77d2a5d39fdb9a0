//! Command handlers.

/// Interactive session startup.
pub mod interactive;
