//! Configuration module for postsweep
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (POSTSWEEP_*)
//! 3. Project config (postsweep.toml in the site root, or `--config`)
//! 4. User config (<config dir>/postsweep/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    user_config_path, ConfigWarning, EnvLookup, ENV_DIR, ENV_DRY_RUN, ENV_MAX_AGE_DAYS,
    ENV_USER_CONFIG_PATH,
};
pub use types::{Config, OutputConfig, RetentionConfig};
