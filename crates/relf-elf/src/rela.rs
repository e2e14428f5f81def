//! RELA relocation-table decoding.

use crate::constants::*;
use crate::file::ElfFile;
use crate::section::entry_count;
use crate::{ElfError, Result};

/// One relocation-with-addend entry, with the referenced symbol already
/// resolved through the owning table's two-hop `sh_link` chain.
#[derive(Clone, Debug)]
pub struct Rela {
    /// File offset being patched.
    pub r_offset: u64,
    /// Packed (symbol index, relocation type) word.
    pub r_info: u64,
    pub r_addend: i64,
    pub symbol_value: u64,
    pub symbol_name: String,
}

impl Rela {
    /// Symbol index: high 32 bits of the info word.
    #[must_use]
    pub const fn symbol_index(&self) -> u64 {
        self.r_info >> 32
    }

    /// Relocation type code: low 32 bits of the info word.
    #[must_use]
    pub const fn type_code(&self) -> u32 {
        self.r_info as u32
    }

    /// Relocation type name. Only the x86_64 code table is populated;
    /// other architectures' codes render as UNKNOWN.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self.type_code() {
            R_X86_64_NONE => "NONE",
            R_X86_64_64 => "R_X86_64_64",
            R_X86_64_PC32 => "R_X86_64_PC32",
            R_X86_64_PLT32 => "R_X86_64_PLT32",
            R_X86_64_COPY => "R_X86_64_COPY",
            R_X86_64_GLOB_DAT => "R_X86_64_GLOB_DAT",
            R_X86_64_JUMP_SLOT => "R_X86_64_JUMP_SLO",
            R_X86_64_RELATIVE => "R_X86_64_RELATIVE",
            R_X86_64_GOTPCREL => "R_X86_64_GOTPCREL",
            R_X86_64_GOTPCRELX => "R_X86_64_GOTPCRELX",
            _ => "UNKNOWN",
        }
    }
}

/// All entries of one RELA section, in file order.
#[derive(Clone, Debug)]
pub struct RelaTable {
    pub name: String,
    /// File offset of the section (shown in the banner).
    pub offset: u64,
    pub entries: Vec<Rela>,
}

impl ElfFile {
    /// Decode every relocation-with-addend section, grouped per section
    /// in file order.
    ///
    /// An empty result means the file has no RELA section at all, which
    /// callers report as a distinct terminal state rather than an empty
    /// listing.
    pub fn relocation_tables(&self) -> Result<Vec<RelaTable>> {
        let mut tables = Vec::new();
        for section in self.sections() {
            if section.sh_type != SHT_RELA {
                continue;
            }
            let name = self.section_name(section)?;
            // sh_link names the symbol table; that table's own sh_link
            // names the string table for symbol names.
            let symtab = self.section_at(u64::from(section.sh_link))?;
            let strtab = self.section_at(u64::from(symtab.sh_link))?;
            let symtab_name = self.section_name(symtab)?;
            let symbol_count = entry_count(symtab, &symtab_name, SYM_ENTRY_SIZE)?;

            let count = entry_count(section, &name, RELA_ENTRY_SIZE)?;
            let mut entries = Vec::with_capacity(count as usize);
            for index in 0..count {
                let offset = section
                    .entry_offset(index, RELA_ENTRY_SIZE)
                    .ok_or(ElfError::OutOfBounds {
                        offset: section.sh_offset,
                        len: RELA_ENTRY_SIZE.saturating_mul(index),
                        size: self.image().len() as u64,
                    })?;
                let r_offset = self.image().u64_at(offset)?;
                let r_info = self.image().u64_at(offset + 8)?;
                let r_addend = self.image().i64_at(offset + 16)?;

                let symbol_index = r_info >> 32;
                if symbol_index >= symbol_count {
                    return Err(ElfError::BadSymbolIndex {
                        index: symbol_index,
                        count: symbol_count,
                    });
                }
                let symbol = self.symbol_at(symtab, strtab.sh_offset, symbol_index)?;

                entries.push(Rela {
                    r_offset,
                    r_info,
                    r_addend,
                    symbol_value: symbol.value,
                    symbol_name: symbol.name,
                });
            }
            tables.push(RelaTable {
                name,
                offset: section.sh_offset,
                entries,
            });
        }
        Ok(tables)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rela(r_info: u64) -> Rela {
        Rela {
            r_offset: 0,
            r_info,
            r_addend: 0,
            symbol_value: 0,
            symbol_name: String::new(),
        }
    }

    #[test]
    fn splits_info_word() {
        let r = rela((7 << 32) | u64::from(R_X86_64_PLT32));
        assert_eq!(r.symbol_index(), 7);
        assert_eq!(r.type_code(), R_X86_64_PLT32);
        assert_eq!(r.type_name(), "R_X86_64_PLT32");
    }

    #[test]
    fn jump_slot_name_is_clipped() {
        assert_eq!(rela(u64::from(R_X86_64_JUMP_SLOT)).type_name(), "R_X86_64_JUMP_SLO");
    }

    #[test]
    fn foreign_type_codes_are_unknown() {
        assert_eq!(rela(0x1234).type_name(), "UNKNOWN");
        assert_eq!(rela(u64::from(u32::MAX)).type_name(), "UNKNOWN");
    }
}
