//! Fixed-column text rendering of decoded records.
//!
//! Column widths and truncation markers are part of the output contract:
//! users diff this output against a reference tool, so every width here
//! is deliberate.

mod header;
mod relocs;
mod sections;
mod symbols;

use relf_elf::ElfFile;

use crate::{DisplayConfig, Result};

/// Section names longer than this are clipped to [`SECTION_NAME_PREFIX`]
/// characters plus the `[...]` marker.
pub(crate) const SECTION_NAME_LIMIT: usize = 16;
pub(crate) const SECTION_NAME_PREFIX: usize = 12;

/// Symbol names get a slightly wider column before clipping.
pub(crate) const SYMBOL_NAME_LIMIT: usize = 21;
pub(crate) const SYMBOL_NAME_PREFIX: usize = 16;

/// Render the blocks selected by `config`, in fixed order: file header,
/// section table, symbol tables, relocation tables.
pub fn render(elf: &ElfFile, config: &DisplayConfig) -> Result<String> {
    let mut out = String::new();
    if config.file_header {
        out.push_str(&header::file_header(elf));
    }
    if config.section_headers {
        out.push_str(&sections::section_table(elf, config.wide)?);
    }
    if config.symbols {
        out.push_str(&symbols::symbol_tables(elf, config.wide)?);
    }
    if config.relocations {
        out.push_str(&relocs::relocation_tables(elf)?);
    }
    Ok(out)
}

/// Clip `name` to `prefix` characters plus a `[...]` marker once it
/// exceeds `limit` characters; `wide` disables clipping entirely.
pub(crate) fn clip_name(name: &str, limit: usize, prefix: usize, wide: bool) -> String {
    if wide || name.chars().count() <= limit {
        name.to_owned()
    } else {
        let mut clipped: String = name.chars().take(prefix).collect();
        clipped.push_str("[...]");
        clipped
    }
}
