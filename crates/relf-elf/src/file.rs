//! Per-file decoded aggregate.

use crate::header::FileHeader;
use crate::image::ByteImage;
use crate::section::{parse_section_headers, SectionHeader};
use crate::{strtab, ElfError, Result};

/// One decoded input file: the byte image, its executable header, the
/// section-header array (file order, 0-based identity), and the resolved
/// base offset of the section-name string table.
///
/// Built once per file, never mutated, dropped before the next file.
#[derive(Clone, Debug)]
pub struct ElfFile {
    image: ByteImage,
    header: FileHeader,
    sections: Vec<SectionHeader>,
    shstrtab_offset: u64,
}

impl ElfFile {
    /// Decode the header and section table from raw bytes.
    ///
    /// Symbol and relocation tables are decoded on demand by
    /// [`Self::symbol_tables`] and [`Self::relocation_tables`].
    pub fn parse(data: Vec<u8>) -> Result<Self> {
        let image = ByteImage::new(data);
        let header = FileHeader::parse(&image)?;
        let sections = parse_section_headers(&image, &header)?;
        let shstrtab_offset = if sections.is_empty() {
            0
        } else {
            let index = u64::from(header.e_shstrndx);
            let shstrtab = sections
                .get(header.e_shstrndx as usize)
                .ok_or(ElfError::BadSectionIndex {
                    index,
                    count: sections.len(),
                })?;
            shstrtab.sh_offset
        };

        Ok(Self {
            image,
            header,
            sections,
            shstrtab_offset,
        })
    }

    #[must_use]
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    #[must_use]
    pub fn sections(&self) -> &[SectionHeader] {
        &self.sections
    }

    #[must_use]
    pub(crate) fn image(&self) -> &ByteImage {
        &self.image
    }

    /// Resolve a section's name through the section-name string table.
    pub fn section_name(&self, section: &SectionHeader) -> Result<String> {
        strtab::string_at(
            &self.image,
            self.shstrtab_offset,
            u64::from(section.sh_name),
        )
    }

    /// Section at `index`, validating the cross-reference.
    pub(crate) fn section_at(&self, index: u64) -> Result<&SectionHeader> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.sections.get(i))
            .ok_or(ElfError::BadSectionIndex {
                index,
                count: self.sections.len(),
            })
    }
}
