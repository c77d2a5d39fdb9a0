use anyhow::{Context, Result, bail};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{Config as EditorConfig, Editor};
use std::io;
use std::path::PathBuf;

use super::command::{Command, DotCommandCompleter, Input, parse_input};
use super::ui;
use crate::api::{Dictionary, PonsClient};
use crate::cache::CacheStore;
use crate::config::{Config, ConfigManager};
use crate::history::HistoryStore;
use crate::logging::best_effort;
use crate::lookup::{self, Lookup};
use crate::render::{render_translation, terminal_width};
use crate::ui::Style;

const PROMPT: &str = ">>> ";

/// Everything a command handler may read or change.
///
/// One value lives for the whole interactive session and is passed to every
/// handler in turn; there is no process-wide mutable state.
pub struct Session {
    config: Config,
    config_manager: ConfigManager,
    cache: CacheStore,
    history: HistoryStore,
    client: PonsClient,
    history_file: PathBuf,
    current_dict: Option<String>,
}

impl Session {
    pub fn new(
        config: Config,
        config_manager: ConfigManager,
        cache: CacheStore,
        history: HistoryStore,
        history_file: PathBuf,
    ) -> Self {
        let client = PonsClient::new(config.api_key.clone());
        Self {
            config,
            config_manager,
            cache,
            history,
            client,
            history_file,
            current_dict: None,
        }
    }

    pub fn current_dict(&self) -> Option<&str> {
        self.current_dict.as_deref()
    }

    fn prompt(&self) -> String {
        self.current_dict.as_ref().map_or_else(
            || PROMPT.to_string(),
            |dict| Style::prompt(format!("{dict} {PROMPT}")),
        )
    }

    /// Reads and executes commands until `.quit` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        let editor_config = EditorConfig::builder()
            .max_history_size(self.config.cmd_history_limit())
            .context("Invalid cmd_history_limit")?
            .auto_add_history(false)
            .build();
        let mut editor: Editor<DotCommandCompleter, DefaultHistory> =
            Editor::with_config(editor_config).context("Failed to initialize line editor")?;
        editor.set_helper(Some(DotCommandCompleter));

        if self.history_file.exists() {
            best_effort("load command history", editor.load_history(&self.history_file));
        }

        ui::print_banner(&self.config);

        let outcome = loop {
            match editor.readline(&self.prompt()) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        best_effort(
                            "record command history",
                            editor.add_history_entry(line.as_str()).map(|_| ()),
                        );
                        best_effort(
                            "save command history",
                            editor.save_history(&self.history_file),
                        );
                    }

                    match parse_input(&line) {
                        Input::Empty => {}
                        Input::Command(Command::Quit) => break Ok(()),
                        Input::Invalid(message) => ui::print_error(&anyhow::anyhow!(message)),
                        Input::Command(cmd) => {
                            if let Err(e) = self.handle_command(cmd).await {
                                ui::print_error(&e);
                            }
                        }
                        Input::Word(word) => {
                            if let Err(e) = self.translate(&word).await {
                                ui::print_error(&e);
                            }
                        }
                    }
                }
                // Ctrl+C discards the current line
                Err(ReadlineError::Interrupted) => {}
                Err(ReadlineError::Eof) => {
                    println!();
                    break Ok(());
                }
                Err(e) => break Err(anyhow::anyhow!("Error reading input: {e}")),
            }
        };

        best_effort("save command history", editor.save_history(&self.history_file));
        outcome
    }

    async fn handle_command(&mut self, cmd: Command) -> Result<()> {
        match cmd {
            Command::Help => ui::print_help(),
            Command::History => {
                let records = self.history.recent()?;
                ui::print_history(&records)?;
            }
            Command::ListDictionaries => {
                let dictionaries = self.dictionaries().await?;
                ui::print_dictionaries(&dictionaries);
            }
            Command::SelectDictionary(key) => self.select_dictionary(&key).await?,
            Command::ShowSettings => ui::print_settings(&self.config),
            Command::Set { name, value } => self.set(&name, &value)?,
            Command::Quit => {}
        }
        Ok(())
    }

    async fn dictionaries(&self) -> Result<Vec<Dictionary>> {
        lookup::dictionaries(&self.client, &self.cache, self.config.cache_ttl()).await
    }

    /// Makes `key` the active dictionary if the API offers it.
    pub async fn select_dictionary(&mut self, key: &str) -> Result<()> {
        let dictionaries = self.dictionaries().await?;
        if !dictionaries.iter().any(|d| d.key == key) {
            bail!("unknown dictionary key: {key}");
        }
        self.current_dict = Some(key.to_string());
        Ok(())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<()> {
        self.config.set(name, value)?;
        if name == "api_key" {
            self.client.set_api_key(value.to_string());
        }
        self.config_manager.save(&self.config)?;
        ui::print_success(&format!("{name} set to {value}"));
        Ok(())
    }

    async fn translate(&self, word: &str) -> Result<()> {
        let Some(dict) = self.current_dict.as_deref() else {
            bail!("no dictionary selected. Use .dict <key> to select one");
        };

        match lookup::translate(&self.client, &self.cache, self.config.cache_ttl(), word, dict)
            .await?
        {
            Lookup::NotFound => println!("No translation found"),
            Lookup::Found(response) => {
                render_translation(&mut io::stdout().lock(), &response, dict, terminal_width())?;
                best_effort("add search history", self.history.add(word, dict));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_session(temp_dir: &TempDir) -> Session {
        let config_manager = ConfigManager::with_path(temp_dir.path().join("config.toml"));
        let config = config_manager.load_or_init().unwrap();
        let cache = CacheStore::open(temp_dir.path().join("cache")).unwrap();
        let history = HistoryStore::open(&temp_dir.path().join("data")).unwrap();

        Session::new(
            config,
            config_manager,
            cache,
            history,
            temp_dir.path().join("cmd_history.txt"),
        )
    }

    #[tokio::test]
    async fn test_translate_without_dictionary_fails() {
        let temp_dir = TempDir::new().unwrap();
        let session = create_test_session(&temp_dir);

        let err = session.translate("house").await.unwrap_err();

        assert!(err.to_string().contains("no dictionary selected"));
    }

    const HOUSE: &[u8] = br#"[{"lang":"en","hits":[{"source":"house","target":"Haus"}]}]"#;

    fn cache_house(session: &Session) {
        let path = session
            .cache
            .entry_path(&crate::cache::derive_key("house", "ende"));
        session.cache.write(&path, HOUSE).unwrap();
    }

    #[tokio::test]
    async fn test_translate_records_search_history() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);
        cache_house(&session);
        session.current_dict = Some("ende".to_string());

        session.translate("house").await.unwrap();

        let records = session.history.recent().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].term, "house");
        assert_eq!(records[0].dict, "ende");
    }

    #[tokio::test]
    async fn test_history_failure_does_not_fail_translation() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);
        cache_house(&session);
        session.current_dict = Some("ende".to_string());
        std::fs::remove_dir_all(temp_dir.path().join("data")).unwrap();

        session.translate("house").await.unwrap();

        assert!(session.history.recent().is_err());
    }

    #[test]
    fn test_set_persists_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);

        session.set("cache_ttl", "60").unwrap();

        let reloaded = ConfigManager::with_path(temp_dir.path().join("config.toml"))
            .load_or_init()
            .unwrap();
        assert_eq!(reloaded.cache_ttl, 60);
    }

    #[test]
    fn test_set_invalid_value_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);

        assert!(session.set("cmd_history_limit", "lots").is_err());

        let reloaded = ConfigManager::with_path(temp_dir.path().join("config.toml"))
            .load_or_init()
            .unwrap();
        assert_eq!(reloaded, Config::default());
    }

    #[tokio::test]
    async fn test_select_dictionary_from_cached_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);
        session
            .cache
            .write(
                &session.cache.dictionaries_path(),
                br#"[{"key":"ende","simple_label":"English - German","languages":["en","de"]}]"#,
            )
            .unwrap();

        session.select_dictionary("ende").await.unwrap();
        assert_eq!(session.current_dict(), Some("ende"));

        let err = session.select_dictionary("xxyy").await.unwrap_err();
        assert!(err.to_string().contains("unknown dictionary key"));
        assert_eq!(session.current_dict(), Some("ende"));
    }

    #[test]
    fn test_prompt_shows_dictionary() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = create_test_session(&temp_dir);

        assert_eq!(session.prompt(), ">>> ");

        session.current_dict = Some("ende".to_string());
        assert!(session.prompt().contains("ende >>> "));
    }
}
