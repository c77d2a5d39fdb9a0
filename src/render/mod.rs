//! Terminal rendering of lookup results.
//!
//! A response is printed block by block: a language header, then either
//! numbered headwords with their sense groups or a single flat pair, each
//! translation pair laid out as a two-column table.

mod markup;
mod roman;
mod table;

use std::io::{self, Write};

pub use markup::strip_markup;
pub use roman::to_roman;
pub use table::{FALLBACK_WIDTH, Table, terminal_width};

use crate::api::{Hit, LanguageBlock, Rom, TranslationResponse};
use crate::ui::Style;

/// Label for the other side of a dictionary.
///
/// The block's language code is removed once from the dictionary key and
/// the remainder uppercased: `ende` with `en` gives `DE`.
pub fn target_language(dict_key: &str, lang: &str) -> String {
    dict_key.replacen(lang, "", 1).to_uppercase()
}

/// Writes a translation response as a sequence of two-column tables.
pub fn render_translation(
    out: &mut impl Write,
    response: &TranslationResponse,
    dict_key: &str,
    width: usize,
) -> io::Result<()> {
    for block in response {
        render_block(out, block, dict_key, width)?;
    }
    writeln!(out)
}

fn render_block(
    out: &mut impl Write,
    block: &LanguageBlock,
    dict_key: &str,
    width: usize,
) -> io::Result<()> {
    let header = format!(
        "{} > {}",
        block.lang.to_uppercase(),
        target_language(dict_key, &block.lang)
    );
    writeln!(out)?;
    writeln!(out, "{}", Style::language_header(header))?;

    for hit in &block.hits {
        render_hit(out, hit, width)?;
    }
    Ok(())
}

fn render_hit(out: &mut impl Write, hit: &Hit, width: usize) -> io::Result<()> {
    if hit.roms.is_empty() {
        let mut table = Table::two_column(width);
        table.push_row([strip_markup(&hit.source), strip_markup(&hit.target)]);
        return table.render(out);
    }

    for (i, rom) in hit.roms.iter().enumerate() {
        render_rom(out, i + 1, rom, width)?;
    }
    Ok(())
}

fn render_rom(out: &mut impl Write, number: usize, rom: &Rom, width: usize) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        Style::headword(format!("{}. {}", to_roman(number), rom.headword))
    )?;

    for arab in &rom.arabs {
        writeln!(out, "{}", Style::sense(strip_markup(&arab.header)))?;

        let mut table = Table::two_column(width);
        for pair in &arab.translations {
            table.push_row([strip_markup(&pair.source), strip_markup(&pair.target)]);
        }
        table.render(out)?;
    }
    Ok(())
}
