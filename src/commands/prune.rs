//! Prune command handler
//!
//! Deletes dated posts older than the retention threshold.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use postsweep::config::Config;
use postsweep::infrastructure::FixedClock;
use postsweep::presentation::{create_event_sink, create_prune_use_case};
use postsweep::RetentionThreshold;

use crate::cli::Cli;

use super::site_root::discover_site_root;

/// Execute the prune command
pub fn cmd_prune(cli: &Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("failed to determine the working directory")?;
    let site_root = discover_site_root(&cwd);
    debug!(site_root = %site_root.display(), "resolved site root");

    let explicit_config = cli.config.as_ref().map(|path| cwd.join(path));
    let env = |key: &str| std::env::var(key).ok();
    let (config, warnings) = Config::load_layered(&site_root, explicit_config.as_deref(), &env)?;
    for warning in &warnings {
        warn!("{}", warning);
    }

    // CLI flags win over env and config files
    let mut options = config.prune_options(&site_root);
    if let Some(dir) = &cli.dir {
        options.dir = cwd.join(dir);
    }
    if let Some(days) = cli.max_age_days {
        options.threshold = RetentionThreshold::from_days(days);
    }
    if cli.dry_run {
        options.dry_run = true;
    }

    let now = cli.now.as_deref().map(FixedClock::parse).transpose()?;
    let use_case = create_prune_use_case(now);
    let sink = create_event_sink(cli.json || config.output.json, cli.verbose > 0);

    let report = use_case.execute(&options, sink.as_ref())?;
    debug!(
        deleted = report.deleted.len(),
        retained = report.retained.len(),
        skipped = report.skipped.len(),
        "prune finished"
    );

    Ok(())
}
