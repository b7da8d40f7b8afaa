use crate::helpers::*;

#[test]
fn project_config_sets_threshold() {
    let env = sample_site();
    env.write_site_file("postsweep.toml", "[retention]\nmax_age_days = 100\n");

    let result = env.run(&[]);

    assert_success(&result);
    assert_eq!(remaining_posts(&env), vec![README.to_string()]);
}

#[test]
fn project_config_dir_is_relative_to_config() {
    let env = TestEnv::new();
    env.write_site_file("postsweep.toml", "[retention]\ndir = \"content/posts\"\n");
    env.write_site_file("content/posts/2020-01-01-ancient.md", "old");
    let nested = env.site_path("src");

    let result = env.run_from(&nested, &[]);

    assert_success(&result);
    assert!(!env.site_path("content/posts/2020-01-01-ancient.md").exists());
}

#[test]
fn user_config_used_without_project_config() {
    let env = sample_site();
    env.write_user_config("[retention]\ndry_run = true\n");

    let result = env.run(&[]);

    assert_success(&result);
    assert_eq!(remaining_posts(&env).len(), 3);
    assert!(result.stdout.contains("Would delete old post"));
}

#[test]
fn env_overrides_config_file() {
    let env = sample_site();
    env.write_site_file("postsweep.toml", "[retention]\nmax_age_days = 100\n");

    let result = env.run_with_env(&[], &[("POSTSWEEP_MAX_AGE_DAYS", "365")]);

    assert_success(&result);
    assert_eq!(remaining_posts(&env).len(), 3);
}

#[test]
fn flag_overrides_env() {
    let env = sample_site();

    let result = env.run_with_env(
        &["--max-age-days", "100"],
        &[("POSTSWEEP_MAX_AGE_DAYS", "365")],
    );

    assert_success(&result);
    assert_eq!(remaining_posts(&env), vec![README.to_string()]);
}

#[test]
fn invalid_env_value_fails() {
    let env = sample_site();

    let result = env.run_with_env(&[], &[("POSTSWEEP_MAX_AGE_DAYS", "half a year")]);

    assert!(!result.success);
    assert!(result.stderr.contains("POSTSWEEP_MAX_AGE_DAYS"));
    assert_eq!(remaining_posts(&env).len(), 3);
}

#[test]
fn malformed_config_fails() {
    let env = sample_site();
    env.write_site_file("postsweep.toml", "[retention\n");

    let result = env.run(&[]);

    assert!(!result.success);
    assert!(result.stderr.contains("invalid config"));
    assert_eq!(remaining_posts(&env).len(), 3);
}

#[test]
fn unknown_config_key_warns() {
    let env = sample_site();
    env.write_site_file("postsweep.toml", "[retention]\nmax_age = 10\n");

    let result = env.run(&[]);

    assert_success(&result);
    assert!(
        result.stderr.contains("unknown config key 'max_age'"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn explicit_config_must_exist() {
    let env = sample_site();

    let result = env.run(&["--config", "missing.toml"]);

    assert!(!result.success);
    assert_eq!(remaining_posts(&env).len(), 3);
}
