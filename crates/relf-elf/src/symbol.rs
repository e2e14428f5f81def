//! Symbol-table decoding.

use crate::constants::*;
use crate::file::ElfFile;
use crate::section::{entry_count, SectionHeader};
use crate::{strtab, ElfError, Result};

/// One decoded symbol with its name already resolved.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub name: String,
    pub value: u64,
    pub size: u64,
    /// Low 4 bits of `st_info`.
    pub sym_type: u8,
    /// High 4 bits of `st_info`.
    pub bind: u8,
    /// Low 2 bits of `st_other`.
    pub visibility: u8,
    pub shndx: u16,
}

impl Symbol {
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self.sym_type {
            STT_NOTYPE => "NOTYPE",
            STT_OBJECT => "OBJECT",
            STT_FUNC => "FUNC",
            STT_SECTION => "SECTION",
            STT_FILE => "FILE",
            STT_COMMON => "COMMON",
            STT_TLS => "TLS",
            _ => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn bind_name(&self) -> &'static str {
        match self.bind {
            STB_LOCAL => "LOCAL",
            STB_GLOBAL => "GLOBAL",
            STB_WEAK => "WEAK",
            _ => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn visibility_name(&self) -> &'static str {
        match self.visibility {
            STV_INTERNAL => "INTERNAL",
            STV_HIDDEN => "HIDDEN",
            STV_PROTECTED => "PROTECTED",
            _ => "DEFAULT",
        }
    }

    /// Section-index column: a special marker or the decimal index.
    ///
    /// Freshly owned per call.
    #[must_use]
    pub fn ndx_string(&self) -> String {
        match self.shndx {
            SHN_ABS => "ABS".to_owned(),
            SHN_COMMON => "COM".to_owned(),
            SHN_UNDEF => "UND".to_owned(),
            index => index.to_string(),
        }
    }
}

/// All symbols of one SYMTAB or DYNSYM section, in file order.
#[derive(Clone, Debug)]
pub struct SymbolTable {
    pub name: String,
    pub symbols: Vec<Symbol>,
}

impl ElfFile {
    /// Decode every symbol-table section (primary and dynamic), grouped
    /// per section in file order.
    pub fn symbol_tables(&self) -> Result<Vec<SymbolTable>> {
        let mut tables = Vec::new();
        for section in self.sections() {
            if !section.is_symbol_table() {
                continue;
            }
            let name = self.section_name(section)?;
            let strtab = self.section_at(u64::from(section.sh_link))?;
            let count = entry_count(section, &name, SYM_ENTRY_SIZE)?;
            let mut symbols = Vec::with_capacity(count as usize);
            for index in 0..count {
                symbols.push(self.symbol_at(section, strtab.sh_offset, index)?);
            }
            tables.push(SymbolTable { name, symbols });
        }
        Ok(tables)
    }

    /// Decode entry `index` of a symbol-table section.
    ///
    /// A symbol with `st_name` 0 and a non-ABS section index has no own
    /// name and borrows the name of the section it indexes; everything
    /// else reads the string table at `strtab_offset`.
    pub(crate) fn symbol_at(
        &self,
        symtab: &SectionHeader,
        strtab_offset: u64,
        index: u64,
    ) -> Result<Symbol> {
        let offset = symtab
            .entry_offset(index, SYM_ENTRY_SIZE)
            .ok_or(ElfError::OutOfBounds {
                offset: symtab.sh_offset,
                len: SYM_ENTRY_SIZE.saturating_mul(index),
                size: self.image().len() as u64,
            })?;
        let image = self.image();
        let st_name = image.u32_at(offset)?;
        let st_info = image.u8_at(offset + 4)?;
        let st_other = image.u8_at(offset + 5)?;
        let st_shndx = image.u16_at(offset + 6)?;
        let st_value = image.u64_at(offset + 8)?;
        let st_size = image.u64_at(offset + 16)?;

        let name = if st_name != 0 || st_shndx == SHN_ABS {
            strtab::string_at(image, strtab_offset, u64::from(st_name))?
        } else {
            let target = self.section_at(u64::from(st_shndx))?;
            self.section_name(target)?
        };

        Ok(Symbol {
            name,
            value: st_value,
            size: st_size,
            sym_type: st_info & 0x0f,
            bind: st_info >> 4,
            visibility: st_other & 0x03,
            shndx: st_shndx,
        })
    }
}
