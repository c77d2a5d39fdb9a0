use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

/// One recorded lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub term: String,
    pub dict: String,
    pub date: DateTime<Local>,
}

/// Append-only log of looked-up words.
pub struct HistoryStore {
    db_path: PathBuf,
}

impl HistoryStore {
    /// Opens (and if necessary creates) `pons-cli.db` inside `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir).with_context(|| {
            format!("Failed to create data directory: {}", data_dir.display())
        })?;

        let store = Self {
            db_path: data_dir.join("pons-cli.db"),
        };
        store.init_db()?;

        Ok(store)
    }

    fn init_db(&self) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS search_history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                searched_term TEXT NOT NULL,
                dict TEXT NOT NULL,
                date DATETIME NOT NULL
            )",
            [],
        )
        .context("Failed to create search_history table")?;

        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Connection::open(&self.db_path).with_context(|| {
            format!(
                "Failed to open history database: {}",
                self.db_path.display()
            )
        })
    }

    /// Records a lookup at the current local time.
    pub fn add(&self, term: &str, dict: &str) -> Result<()> {
        self.add_at(term, dict, Local::now())
    }

    fn add_at(&self, term: &str, dict: &str, date: DateTime<Local>) -> Result<()> {
        let conn = self.connect()?;

        conn.execute(
            "INSERT INTO search_history (searched_term, dict, date) VALUES (?1, ?2, ?3)",
            params![term, dict, date],
        )
        .context("Failed to insert search history")?;

        Ok(())
    }

    /// All recorded lookups, newest first.
    pub fn recent(&self) -> Result<Vec<SearchRecord>> {
        let conn = self.connect()?;

        let mut stmt = conn
            .prepare("SELECT searched_term, dict, date FROM search_history ORDER BY date DESC, id DESC")
            .context("could not query search history")?;

        let rows = stmt.query_map([], |row| {
            Ok(SearchRecord {
                term: row.get(0)?,
                dict: row.get(1)?,
                date: row.get(2)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>()
            .context("could not read search history")
    }
}
