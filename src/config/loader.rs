//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::RetentionThreshold;
use crate::error::{PruneError, PruneResult};

use super::types::Config;

/// Content directory override
pub const ENV_DIR: &str = "POSTSWEEP_DIR";
/// Retention threshold override, in days
pub const ENV_MAX_AGE_DAYS: &str = "POSTSWEEP_MAX_AGE_DAYS";
/// Dry-run override (`1`/`true`/`yes`)
pub const ENV_DRY_RUN: &str = "POSTSWEEP_DRY_RUN";
/// Replaces the platform user config path (used by tests)
pub const ENV_USER_CONFIG_PATH: &str = "POSTSWEEP_USER_CONFIG_PATH";

/// Reads an environment variable; injected so tests never touch the process env
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> PruneResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| PruneError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| PruneError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(dir) = config.retention.dir.take() {
        config.retention.dir = Some(resolve_against_file(path, dir));
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from an explicit path, the project config, or the user config,
/// whichever comes first, then apply environment overrides.
///
/// An explicit path must exist; implicit config files are optional.
pub fn load_layered(
    site_root: &Path,
    explicit: Option<&Path>,
    env: EnvLookup<'_>,
) -> PruneResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let project_config = site_root.join(Config::PROJECT_FILE);
            let user_config = user_config_path(env);

            if project_config.is_file() {
                load_with_warnings(&project_config)?
            } else if let Some(user_config) = user_config.filter(|p| p.is_file()) {
                load_with_warnings(&user_config)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config, env)?, warnings))
}

/// Apply environment variable overrides (POSTSWEEP_* prefix)
pub fn with_env_overrides(mut config: Config, env: EnvLookup<'_>) -> PruneResult<Config> {
    if let Some(dir) = env(ENV_DIR).filter(|v| !v.is_empty()) {
        config.retention.dir = Some(PathBuf::from(dir));
    }

    if let Some(days) = env(ENV_MAX_AGE_DAYS) {
        let parsed = days
            .trim()
            .parse::<u32>()
            .map_err(|_| PruneError::InvalidEnv {
                var: ENV_MAX_AGE_DAYS.to_string(),
                value: days.clone(),
            })?;
        config.retention.max_age_days = RetentionThreshold::from_days(parsed);
    }

    if let Some(val) = env(ENV_DRY_RUN) {
        config.retention.dry_run = match val.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "" | "0" | "false" | "no" => false,
            _ => {
                return Err(PruneError::InvalidEnv {
                    var: ENV_DRY_RUN.to_string(),
                    value: val,
                })
            }
        };
    }

    Ok(config)
}

/// `<config dir>/postsweep/config.toml`, or the `POSTSWEEP_USER_CONFIG_PATH` override
pub fn user_config_path(env: EnvLookup<'_>) -> Option<PathBuf> {
    if let Some(path) = env(ENV_USER_CONFIG_PATH).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("postsweep").join("config.toml"))
}

fn resolve_against_file(config_path: &Path, dir: PathBuf) -> PathBuf {
    if dir.is_absolute() {
        return dir;
    }
    match config_path.parent() {
        Some(parent) => parent.join(dir),
        None => dir,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["retention", "dir", "max_age_days", "dry_run", "output", "json"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
