use std::path::PathBuf;

use clap::Parser;

/// postsweep - delete date-prefixed blog posts older than the retention window
#[derive(Parser, Debug)]
#[command(name = "postsweep")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run 'postsweep' without arguments to prune src/content/blog with a 180 day window."
)]
pub struct Cli {
    /// Content directory to prune [default: src/content/blog under the site root]
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Delete posts older than this many days [default: 180]
    #[arg(long, value_name = "DAYS")]
    pub max_age_days: Option<u32>,

    /// Dry run - show what would be deleted
    #[arg(long)]
    pub dry_run: bool,

    /// Config file [default: postsweep.toml in the site root, then the user config]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Treat this RFC 3339 instant as "now"
    #[arg(long, hide = true, value_name = "RFC3339")]
    pub now: Option<String>,
}
