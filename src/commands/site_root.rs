use std::path::{Path, PathBuf};

/// Site config files that mark the root of a static blog
const SITE_MARKERS: &[&str] = &[
    "postsweep.toml",
    "astro.config.mjs",
    "astro.config.ts",
    "astro.config.js",
    "package.json",
];

/// Discover the site root directory from an invocation directory.
///
/// Heuristics (walking upward from `start`, nearest directory wins):
/// - `postsweep.toml` or a site generator config / `package.json`
/// - `.git/` or `.git` file (repo root / worktree)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_site_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if SITE_MARKERS.iter().any(|marker| dir.join(marker).is_file()) {
            return dir.to_path_buf();
        }
        if dir.join(".git").exists() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
