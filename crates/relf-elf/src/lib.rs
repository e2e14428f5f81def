//! Decoder for the ELF binary container: executable header, section-header
//! table, symbol tables, and RELA relocation tables.
//!
//! Only little-endian 64-bit layout is decoded. The class byte is reported
//! as-is but never branched on, and no magic validation is performed: a
//! non-ELF file decodes and displays as raw values so long as every read
//! stays inside the image.

mod constants;
mod file;
mod header;
mod image;
mod rela;
mod section;
mod strtab;
mod symbol;

pub use constants::*;
pub use file::ElfFile;
pub use header::FileHeader;
pub use image::ByteImage;
pub use rela::{Rela, RelaTable};
pub use section::SectionHeader;
pub use strtab::string_at;
pub use symbol::{Symbol, SymbolTable};

use thiserror::Error;

/// ELF decoding errors.
///
/// Every out-of-range offset or cross-reference index surfaces as one of
/// these instead of reading adjacent memory; callers skip the offending
/// file and continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ElfError {
    #[error("read of {len} bytes at offset {offset} outside image of {size} bytes")]
    OutOfBounds { offset: u64, len: u64, size: u64 },
    #[error("string at offset {offset} is not NUL-terminated")]
    UnterminatedString { offset: u64 },
    #[error("section index {index} out of range ({count} sections)")]
    BadSectionIndex { index: u64, count: usize },
    #[error("symbol index {index} out of range ({count} symbols)")]
    BadSymbolIndex { index: u64, count: u64 },
    #[error("section '{section}' size {size} is not a multiple of entry size {entry_size}")]
    MisalignedTable {
        section: String,
        size: u64,
        entry_size: u64,
    },
}

pub type Result<T> = std::result::Result<T, ElfError>;
