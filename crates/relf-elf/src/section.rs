//! Section-header table.

use crate::constants::*;
use crate::header::FileHeader;
use crate::image::ByteImage;
use crate::{ElfError, Result};

/// One section-header record. Its position in the decoded array is its
/// identity: `sh_link`/`sh_info` cross-references index into that array.
#[derive(Clone, Debug)]
pub struct SectionHeader {
    pub sh_name: u32,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub sh_addr: u64,
    pub sh_offset: u64,
    pub sh_size: u64,
    pub sh_link: u32,
    pub sh_info: u32,
    pub sh_addralign: u64,
    pub sh_entsize: u64,
}

impl SectionHeader {
    fn parse_at(image: &ByteImage, offset: u64) -> Result<Self> {
        Ok(Self {
            sh_name: image.u32_at(offset)?,
            sh_type: image.u32_at(offset + 4)?,
            sh_flags: image.u64_at(offset + 8)?,
            sh_addr: image.u64_at(offset + 16)?,
            sh_offset: image.u64_at(offset + 24)?,
            sh_size: image.u64_at(offset + 32)?,
            sh_link: image.u32_at(offset + 40)?,
            sh_info: image.u32_at(offset + 44)?,
            sh_addralign: image.u64_at(offset + 48)?,
            sh_entsize: image.u64_at(offset + 56)?,
        })
    }

    /// Type name for display; unrecognized codes render as empty.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self.sh_type {
            SHT_NULL => "NULL",
            SHT_PROGBITS => "PROGBITS",
            SHT_SYMTAB => "SYMTAB",
            SHT_STRTAB => "STRTAB",
            SHT_RELA => "RELA",
            SHT_HASH => "HASH",
            SHT_DYNAMIC => "DYNAMIC",
            SHT_NOTE => "NOTE",
            SHT_NOBITS => "NOBITS",
            SHT_REL => "REL",
            SHT_DYNSYM => "DYNSYM",
            _ => "",
        }
    }

    /// Flag-letter string in fixed order; unknown bits are omitted.
    ///
    /// Returns a fresh string per call so two results never alias.
    #[must_use]
    pub fn flag_letters(&self) -> String {
        const LETTERS: [(u64, char); 12] = [
            (SHF_WRITE, 'W'),
            (SHF_ALLOC, 'A'),
            (SHF_EXECINSTR, 'X'),
            (SHF_MERGE, 'M'),
            (SHF_STRINGS, 'S'),
            (SHF_INFO_LINK, 'I'),
            (SHF_LINK_ORDER, 'L'),
            (SHF_OS_NONCONFORMING, 'O'),
            (SHF_GROUP, 'G'),
            (SHF_TLS, 'T'),
            (SHF_EXCLUDE, 'E'),
            (SHF_COMPRESSED, 'C'),
        ];
        LETTERS
            .iter()
            .filter(|(bit, _)| self.sh_flags & bit != 0)
            .map(|&(_, letter)| letter)
            .collect()
    }

    #[must_use]
    pub fn is_symbol_table(&self) -> bool {
        self.sh_type == SHT_SYMTAB || self.sh_type == SHT_DYNSYM
    }

    /// File offset of entry `index`, or `None` on arithmetic overflow.
    pub(crate) fn entry_offset(&self, index: u64, entry_size: u64) -> Option<u64> {
        index
            .checked_mul(entry_size)
            .and_then(|rel| self.sh_offset.checked_add(rel))
    }
}

/// Entry count for a table section: `sh_size / entry_size`, exact.
///
/// A remainder means the table is cut off mid-entry, which is a
/// malformed image rather than a short final row.
pub fn entry_count(section: &SectionHeader, name: &str, entry_size: u64) -> Result<u64> {
    if section.sh_size % entry_size != 0 {
        return Err(ElfError::MisalignedTable {
            section: name.to_owned(),
            size: section.sh_size,
            entry_size,
        });
    }
    Ok(section.sh_size / entry_size)
}

/// Decode `e_shnum` fixed-size records starting at `e_shoff`, in file
/// order.
pub fn parse_section_headers(
    image: &ByteImage,
    header: &FileHeader,
) -> Result<Vec<SectionHeader>> {
    let mut sections = Vec::with_capacity(header.e_shnum as usize);
    for i in 0..u64::from(header.e_shnum) {
        let offset = header
            .e_shoff
            .checked_add(i * SHDR_SIZE)
            .ok_or(ElfError::OutOfBounds {
                offset: header.e_shoff,
                len: i * SHDR_SIZE,
                size: image.len() as u64,
            })?;
        sections.push(SectionHeader::parse_at(image, offset)?);
    }
    Ok(sections)
}
