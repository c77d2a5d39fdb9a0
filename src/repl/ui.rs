//! Interactive mode UI text.

use anyhow::Error;

use super::command::DOT_COMMANDS;
use crate::api::Dictionary;
use crate::config::{Config, SETTING_NAMES};
use crate::history::SearchRecord;
use crate::render::{Table, terminal_width};
use crate::ui::Style;

const WELCOME: &str = "
To use pons, you must first configure your PONS API key.

Please enter:
  .set api_key <your_api_key>

If you don't have an API key, visit:
  https://en.pons.com/open_dict/public_api

Note: You may need to create an account on the PONS website.
";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn print_banner(config: &Config) {
    if config.api_key.is_empty() {
        println!("{}", Style::hint(WELCOME));
    }
    println!("{}", Style::hint("Type .help for more information."));
}

pub fn print_help() {
    println!("{}", Style::header("Available commands:"));
    for (cmd, desc) in DOT_COMMANDS {
        println!("{cmd} - {desc}");
    }
}

pub fn print_settings(config: &Config) {
    println!("{}", Style::header("Usage: .set <variable> <value>"));
    for name in SETTING_NAMES {
        let value = config.get(name).unwrap_or_default();
        println!("{}: {value}", Style::label(name));
    }
}

pub fn print_dictionaries(dictionaries: &[Dictionary]) {
    println!("{}", Style::header("Usage: .dict <dictionary_key>"));
    for dict in dictionaries.iter().filter(|d| d.is_bilingual()) {
        println!("{}: {}", Style::label(&dict.key), dict.label);
    }
}

pub fn history_table(records: &[SearchRecord], width: usize) -> Table {
    let date_width = DATE_FORMAT.len() + 5;
    let rest = width.saturating_sub(date_width);
    let mut table = Table::new(vec![rest / 2, rest / 2, date_width])
        .with_header(["Searched Term", "Dictionary", "Date"]);

    for record in records {
        table.push_row([
            record.term.clone(),
            record.dict.clone(),
            record.date.format(DATE_FORMAT).to_string(),
        ]);
    }
    table
}

pub fn print_history(records: &[SearchRecord]) -> std::io::Result<()> {
    history_table(records, terminal_width()).render(&mut std::io::stdout().lock())
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
}

pub fn print_error(error: &Error) {
    eprintln!("{} {error:#}", Style::error("Error:"));
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_history_table_formats_dates() {
        let records = vec![SearchRecord {
            term: "house".to_string(),
            dict: "ende".to_string(),
            date: Local.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap(),
        }];

        let mut out = Vec::new();
        history_table(&records, 80).render(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Searched Term"));
        assert!(lines[1].starts_with("house"));
        assert!(lines[1].ends_with("2024-05-01 09:30:00"));
    }
}
