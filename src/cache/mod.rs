//! On-disk cache of raw API responses.
//!
//! Each lookup is stored as `<sha256>.json` next to a fixed-name
//! `dictionaries.json`; file modification time decides freshness.

mod store;

pub use store::{CacheStore, DICTIONARIES_FILE, SweepReport, derive_key, is_fresh};
