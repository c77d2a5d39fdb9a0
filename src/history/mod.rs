//! Search history persisted in SQLite.

mod sqlite;

pub use sqlite::{HistoryStore, SearchRecord};
