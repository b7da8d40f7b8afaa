//! postsweep CLI - retention cleanup for date-prefixed blog posts
//!
//! Usage: postsweep [OPTIONS]
//!
//! With no arguments, deletes posts in `src/content/blog` whose file-name
//! date is more than 180 days old.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    commands::prune::cmd_prune(&cli)
}

/// Diagnostics go to stderr so stdout stays clean for text/NDJSON output.
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
