use anyhow::{Context, Result};

use crate::cache::CacheStore;
use crate::config::ConfigManager;
use crate::history::HistoryStore;
use crate::logging::best_effort;
use crate::paths;
use crate::repl::{Session, print_error};

const CMD_HISTORY_FILE: &str = "cmd_history.txt";

pub struct InteractiveOptions {
    pub dict: Option<String>,
}

/// Prepares directories, config, cache and history, then runs the session.
///
/// Setup failures are fatal. An unknown `--dict` is reported and the
/// session starts without a dictionary.
pub async fn run_interactive(options: InteractiveOptions) -> Result<()> {
    let mut session = open_session()?;

    if let Some(key) = options.dict
        && let Err(e) = session.select_dictionary(&key).await
    {
        print_error(&e);
    }

    session.run().await
}

fn open_session() -> Result<Session> {
    let config_manager = ConfigManager::new()?;
    let config = config_manager
        .load_or_init()
        .context("Error setting up config")?;

    let cache = CacheStore::open(paths::cache_dir()?)?;
    best_effort(
        "clean up expired cache files",
        cache.sweep(config.cache_ttl()).map(|report| {
            tracing::debug!("removed {} expired cache files", report.removed);
        }),
    );

    let data_dir = paths::data_dir()?;
    let history = HistoryStore::open(&data_dir)?;

    Ok(Session::new(
        config,
        config_manager,
        cache,
        history,
        data_dir.join(CMD_HISTORY_FILE),
    ))
}
