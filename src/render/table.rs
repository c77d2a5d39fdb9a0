//! Borderless fixed-width column layout.

use std::io::{self, Write};

/// Width assumed when the terminal size cannot be detected.
pub const FALLBACK_WIDTH: usize = 80;

/// Current terminal width in columns, or [`FALLBACK_WIDTH`].
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .ok()
        .map(|(cols, _)| usize::from(cols))
        .filter(|&cols| cols > 0)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Rows of text laid out in columns of fixed width.
///
/// Cells longer than their column wrap onto following lines; shorter cells
/// are padded. There are no borders or separators.
#[derive(Debug, Clone)]
pub struct Table {
    widths: Vec<usize>,
    header: Option<Vec<String>>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(widths: Vec<usize>) -> Self {
        Self {
            widths: widths.into_iter().map(|w| w.max(1)).collect(),
            header: None,
            rows: Vec::new(),
        }
    }

    /// Two equal columns that together span `total_width`.
    pub fn two_column(total_width: usize) -> Self {
        let half = total_width / 2;
        Self::new(vec![half, half])
    }

    pub fn with_header<S: Into<String>>(mut self, header: impl IntoIterator<Item = S>) -> Self {
        self.header = Some(header.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        if let Some(header) = &self.header {
            self.render_row(out, header)?;
        }
        for row in &self.rows {
            self.render_row(out, row)?;
        }
        Ok(())
    }

    fn render_row(&self, out: &mut impl Write, row: &[String]) -> io::Result<()> {
        let cells: Vec<Vec<String>> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, &width)| wrap(row.get(i).map_or("", String::as_str), width))
            .collect();
        let height = cells.iter().map(Vec::len).max().unwrap_or(0);

        for line_no in 0..height {
            let mut line = String::new();
            for (cell, &width) in cells.iter().zip(&self.widths) {
                let text = cell.get(line_no).map_or("", String::as_str);
                line.push_str(text);
                let pad = width.saturating_sub(text.chars().count());
                line.extend(std::iter::repeat_n(' ', pad));
            }
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Splits `text` into lines of at most `width` characters, breaking at
/// whitespace where possible and inside words where not.
///
/// Text that already fits on one line is returned verbatim.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if !text.contains('\n') && text.chars().count() <= width {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + word.len() <= width {
            current.push(' ');
            current.extend(&word);
            current_len += 1 + word.len();
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }

        while word.len() > width {
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        current.extend(&word);
        current_len = word.len();
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}
