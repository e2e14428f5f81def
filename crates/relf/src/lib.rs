//! relf - display information about the contents of ELF format files.

mod error;
pub mod render;

pub use error::{Error, Result};
pub use relf_elf::{ElfError, ElfFile};

/// Which output blocks to print, and whether long names are truncated.
///
/// Built once from the command line and passed through the pipeline;
/// never mutated afterwards.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisplayConfig {
    pub file_header: bool,
    pub section_headers: bool,
    pub symbols: bool,
    pub relocations: bool,
    /// Print names at full length instead of clipping them.
    pub wide: bool,
}
