//! Command implementations.

mod inspect;

use clap::CommandFactory;
use relf::DisplayConfig;

use crate::cli::{Cli, EXIT_FAILURE, EXIT_SUCCESS};

/// Run the per-file inspection pipeline over every file argument.
///
/// A file that cannot be read or decoded is reported and skipped; the
/// run still visits the remaining files and exits nonzero at the end.
pub fn run(cli: &Cli) -> i32 {
    let config = DisplayConfig {
        file_header: cli.file_header,
        section_headers: cli.section_headers,
        symbols: cli.syms,
        relocations: cli.relocs,
        wide: cli.wide,
    };

    if cli.files.is_empty() {
        println!("relf Warning: Nothing to do.");
        let _ = Cli::command().print_help();
        return EXIT_SUCCESS;
    }

    let mut status = EXIT_SUCCESS;
    for path in &cli.files {
        if inspect::cmd_inspect(path, &config) != EXIT_SUCCESS {
            status = EXIT_FAILURE;
        }
    }
    status
}
