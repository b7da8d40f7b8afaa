//! Test environment builder for isolated postsweep testing.
//!
//! Provides `TestEnv` - a temporary site root (with the blog content
//! directory) and a temporary home for the user config, plus helpers to run
//! the postsweep binary against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

use super::fixtures::{NOW, STOCK_REPORT};

/// Variables that would leak the developer's setup into a test run
const SCRUBBED_VARS: &[&str] = &[
    "POSTSWEEP_DIR",
    "POSTSWEEP_MAX_AGE_DAYS",
    "POSTSWEEP_DRY_RUN",
    "RUST_LOG",
];

/// Result of running a postsweep CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse stdout as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON: {line:?}: {e}"))
            })
            .collect()
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Temporary directory acting as the site root
    pub site_root: TempDir,
    /// Temporary directory holding the user config
    pub home_dir: TempDir,
}

impl TestEnv {
    /// Site root with an `astro.config.mjs` and an empty `src/content/blog`
    pub fn new() -> Self {
        let env = Self::bare();
        env.write_site_file("astro.config.mjs", "export default {};\n");
        std::fs::create_dir_all(env.blog_dir()).expect("Failed to create blog dir");
        env
    }

    /// Site root without any content directory
    pub fn bare() -> Self {
        Self {
            site_root: TempDir::new().expect("Failed to create site temp dir"),
            home_dir: TempDir::new().expect("Failed to create home temp dir"),
        }
    }

    /// Get path relative to the site root
    pub fn site_path(&self, relative: &str) -> PathBuf {
        self.site_root.path().join(relative)
    }

    /// Default content directory
    pub fn blog_dir(&self) -> PathBuf {
        self.site_path("src/content/blog")
    }

    /// Path of a post in the default content directory
    pub fn post_path(&self, name: &str) -> PathBuf {
        self.blog_dir().join(name)
    }

    /// Write a post into the default content directory
    pub fn write_post(&self, name: &str) -> PathBuf {
        let path = self.post_path(name);
        std::fs::write(&path, STOCK_REPORT).expect("Failed to write post");
        path
    }

    /// Write a file relative to the site root
    pub fn write_site_file(&self, relative: &str, content: &str) {
        let full_path = self.site_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }

    /// Write the user config (`POSTSWEEP_USER_CONFIG_PATH`)
    pub fn write_user_config(&self, content: &str) {
        std::fs::write(self.user_config_path(), content).expect("Failed to write user config");
    }

    fn user_config_path(&self) -> PathBuf {
        self.home_dir.path().join("config.toml")
    }

    /// Run postsweep from the site root at the fixed `NOW`
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from_with_env(self.site_root.path(), args, &[])
    }

    /// Run postsweep from the site root with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.site_root.path(), args, env_vars)
    }

    /// Run postsweep from a specific directory
    pub fn run_from(&self, cwd: &Path, args: &[&str]) -> TestResult {
        self.run_from_with_env(cwd, args, &[])
    }

    fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_postsweep"));
        cmd.current_dir(cwd);
        if !args.contains(&"--now") {
            cmd.args(["--now", NOW]);
        }
        cmd.args(args)
            .env("POSTSWEEP_USER_CONFIG_PATH", self.user_config_path());

        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute postsweep");
        output_to_result(output)
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
