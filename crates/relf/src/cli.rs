//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// Exit code for success.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for failure.
pub const EXIT_FAILURE: i32 = 1;

// -h and -s are taken by the display selectors, so help and version get
// remapped to -H and -v.
#[derive(Parser)]
#[command(name = "relf")]
#[command(about = "Display information about the contents of ELF format files")]
#[command(version)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Show help information
    #[arg(short = 'H', long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Display the ELF file header
    #[arg(short = 'h', long = "file-header")]
    pub file_header: bool,

    /// Display the sections' header
    #[arg(short = 'S', long = "section-headers", visible_alias = "sections")]
    pub section_headers: bool,

    /// Display the symbol table
    #[arg(short = 's', long = "syms", visible_alias = "symbols")]
    pub syms: bool,

    /// Display the relocations (if present)
    #[arg(short = 'r', long = "relocs")]
    pub relocs: bool,

    /// Do not shorten long section or symbol names
    #[arg(short = 'W', long = "wide")]
    pub wide: bool,

    /// ELF files to inspect
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_display_selectors() {
        let cli = Cli::try_parse_from(["relf", "-h", "-S", "-s", "-r", "a.out"]).unwrap();
        assert!(cli.file_header);
        assert!(cli.section_headers);
        assert!(cli.syms);
        assert!(cli.relocs);
        assert!(!cli.wide);
        assert_eq!(cli.files, [PathBuf::from("a.out")]);
    }

    #[test]
    fn long_aliases_match_short_flags() {
        let cli = Cli::try_parse_from(["relf", "--sections", "--symbols", "a.out"]).unwrap();
        assert!(cli.section_headers);
        assert!(cli.syms);

        let cli = Cli::try_parse_from(["relf", "--section-headers", "--syms", "a.out"]).unwrap();
        assert!(cli.section_headers);
        assert!(cli.syms);
    }

    #[test]
    fn accepts_multiple_files() {
        let cli = Cli::try_parse_from(["relf", "-h", "a.out", "b.o", "c.so"]).unwrap();
        assert_eq!(cli.files.len(), 3);
    }

    #[test]
    fn wide_flag_parses() {
        let cli = Cli::try_parse_from(["relf", "-S", "-W", "a.out"]).unwrap();
        assert!(cli.wide);
    }
}
