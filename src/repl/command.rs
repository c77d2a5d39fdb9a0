use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

// Available dot commands: (command, description)
pub const DOT_COMMANDS: &[(&str, &str)] = &[
    (".help", "Show this help message"),
    (".quit", "Exit the program"),
    (".dict", "List available dictionaries"),
    (".dict <key>", "Set the current dictionary"),
    (".history", "Show search history"),
    (".set", "Show current settings"),
    (".set <var> <value>", "Set a configuration variable"),
];

/// Completes dot commands at the start of the line.
#[derive(Clone, Default)]
pub struct DotCommandCompleter;

fn complete_command(input: &str) -> Vec<String> {
    if !input.starts_with('.') || input.contains(char::is_whitespace) {
        return vec![];
    }

    let mut names: Vec<String> = DOT_COMMANDS
        .iter()
        .filter_map(|(cmd, _)| cmd.split_whitespace().next())
        .filter(|name| name.starts_with(input))
        .map(str::to_string)
        .collect();
    names.dedup();
    names
}

impl Completer for DotCommandCompleter {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<String>)> {
        Ok((0, complete_command(&line[..pos])))
    }
}

impl Hinter for DotCommandCompleter {
    type Hint = String;
}

impl Highlighter for DotCommandCompleter {}

impl Validator for DotCommandCompleter {}

impl Helper for DotCommandCompleter {}

/// Dot command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    History,
    ListDictionaries,
    SelectDictionary(String),
    ShowSettings,
    Set { name: String, value: String },
}

/// Input types
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    /// A word to translate.
    Word(String),
    Command(Command),
    /// A recognised command with unusable arguments.
    Invalid(String),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let mut parts = input.split_whitespace();
    let Some(first) = parts.next() else {
        return Input::Empty;
    };
    let args: Vec<&str> = parts.collect();

    match first {
        ".quit" => Input::Command(Command::Quit),
        ".help" => Input::Command(Command::Help),
        ".history" => Input::Command(Command::History),
        ".dict" => args.first().map_or(
            Input::Command(Command::ListDictionaries),
            |key| Input::Command(Command::SelectDictionary((*key).to_string())),
        ),
        ".set" => match args.as_slice() {
            [] => Input::Command(Command::ShowSettings),
            [name, value] => Input::Command(Command::Set {
                name: (*name).to_string(),
                value: (*value).to_string(),
            }),
            _ => Input::Invalid("invalid number of arguments".to_string()),
        },
        word => Input::Word(word.to_string()),
    }
}
