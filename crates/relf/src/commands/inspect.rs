//! Per-file inspection pipeline: read, decode, render, print.

use std::path::Path;

use relf::{render, DisplayConfig, ElfFile};
use tracing::error;

use crate::cli::{EXIT_FAILURE, EXIT_SUCCESS};

/// Handle one input file.
pub fn cmd_inspect(path: &Path, config: &DisplayConfig) -> i32 {
    let data = match std::fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            error!(error = %e, path = %path.display(), "failed to read file");
            return EXIT_FAILURE;
        }
    };

    let elf = match ElfFile::parse(data) {
        Ok(elf) => elf,
        Err(e) => {
            error!(error = %e, path = %path.display(), "malformed ELF image");
            return EXIT_FAILURE;
        }
    };

    match render::render(&elf, config) {
        Ok(text) => {
            print!("{text}");
            EXIT_SUCCESS
        }
        Err(e) => {
            error!(error = %e, path = %path.display(), "malformed ELF image");
            EXIT_FAILURE
        }
    }
}
