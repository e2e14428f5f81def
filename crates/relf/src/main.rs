//! relf CLI - display information about the contents of ELF format files.

mod cli;
mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("relf=warn".parse().unwrap()))
        .with_target(false)
        .init();

    std::process::exit(commands::run(&cli));
}
