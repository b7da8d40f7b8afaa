//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::prune::{PruneOptions, DEFAULT_CONTENT_DIR};
use crate::domain::value_objects::RetentionThreshold;
use crate::error::PruneResult;

use super::loader::{self, ConfigWarning, EnvLookup};

/// Retention settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionConfig {
    /// Content directory; relative paths from a config file are resolved
    /// against that file's directory
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default)]
    pub max_age_days: RetentionThreshold,

    #[serde(default)]
    pub dry_run: bool,
}

/// Output configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit NDJSON events instead of text lines
    #[serde(default)]
    pub json: bool,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub retention: RetentionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Name of the project config file in the site root
    pub const PROJECT_FILE: &'static str = "postsweep.toml";

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> PruneResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PruneResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from explicit, project, or user config (first found), then apply
    /// `POSTSWEEP_*` environment overrides
    pub fn load_layered(
        site_root: &Path,
        explicit: Option<&Path>,
        env: EnvLookup<'_>,
    ) -> PruneResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(site_root, explicit, env)
    }

    /// Apply environment variable overrides (POSTSWEEP_* prefix)
    pub fn with_env_overrides(self, env: EnvLookup<'_>) -> PruneResult<Self> {
        loader::with_env_overrides(self, env)
    }

    /// Content directory, falling back to `src/content/blog` under `site_root`
    pub fn content_dir(&self, site_root: &Path) -> PathBuf {
        match &self.retention.dir {
            Some(dir) => site_root.join(dir),
            None => site_root.join(DEFAULT_CONTENT_DIR),
        }
    }

    /// Build prune options rooted at `site_root`
    pub fn prune_options(&self, site_root: &Path) -> PruneOptions {
        PruneOptions::new(self.content_dir(site_root))
            .with_threshold(self.retention.max_age_days)
            .with_dry_run(self.retention.dry_run)
    }
}
