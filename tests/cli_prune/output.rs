use crate::helpers::*;

#[test]
fn json_output_is_ndjson() {
    let env = sample_site();

    let result = env.run(&["--json"]);

    assert_success(&result);
    let events = result.json_events();
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| e["event"].as_str().unwrap())
        .collect();
    assert_eq!(
        kinds,
        vec![
            "start",
            "file_deleted",
            "file_retained",
            "file_skipped",
            "complete"
        ]
    );
    assert_eq!(events[0]["max_age_days"], 180);
    assert_eq!(events[1]["name"], OLD_POST);
    assert_eq!(events[1]["age_days"], 213);
    assert_eq!(events[3]["reason"], "not_dated");
    assert_eq!(events[4]["deleted"], 1);
    assert!(events.iter().all(|e| e["command"] == "prune"));
}

#[test]
fn json_output_for_missing_directory() {
    let env = TestEnv::bare();
    env.write_site_file("astro.config.mjs", "export default {};\n");

    let result = env.run(&["--json"]);

    assert_success(&result);
    let events = result.json_events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1]["event"], "directory_missing");
}

#[test]
fn json_from_config_file() {
    let env = sample_site();
    env.write_site_file("postsweep.toml", "[output]\njson = true\n");

    let result = env.run(&[]);

    assert_success(&result);
    assert!(!result.json_events().is_empty());
}

#[test]
fn verbose_lists_kept_and_skipped() {
    let env = sample_site();

    let result = env.run(&["-v"]);

    assert_success(&result);
    assert!(result
        .stdout
        .contains("Keeping post: 2024-01-01-stock-report.md (152 days old)"));
    assert!(result.stdout.contains("Skipping readme.md (not dated)"));
}

#[test]
fn invalid_date_is_warned_and_kept() {
    let env = TestEnv::new();
    env.write_post("2024-13-40-report.md");

    let result = env.run(&[]);

    assert_success(&result);
    assert!(env.post_path("2024-13-40-report.md").exists());
    assert!(
        result.stderr.contains("is not a calendar date"),
        "stderr:\n{}",
        result.stderr
    );
}

#[test]
fn diagnostics_stay_off_stdout() {
    let env = sample_site();

    let result = env.run(&["--json", "-vv"]);

    assert_success(&result);
    // every stdout line must still parse as JSON
    let _ = result.json_events();
}
