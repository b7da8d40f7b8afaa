pub use crate::common::*;

/// Site with one recent post, one expired post, and a readme
pub fn sample_site() -> TestEnv {
    let env = TestEnv::new();
    env.write_post(RECENT_POST);
    env.write_post(OLD_POST);
    env.write_post(README);
    env
}

/// Names left in the default content directory, sorted
pub fn remaining_posts(env: &TestEnv) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(env.blog_dir())
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn assert_success(result: &TestResult) {
    assert!(
        result.success,
        "postsweep should succeed (exit {}):\n{}",
        result.exit_code,
        result.combined_output()
    );
}
