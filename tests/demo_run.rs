//! Integration tests for the `demo run` command.
use chaseplan::cli::demo::handle_demo_run_command;
use chaseplan::settings::Settings;
use tempfile::tempdir;

/// An integration test for the `demo run` command.
#[test]
fn test_handle_demo_run_command() {
    let settings = Settings {
        log_level: Some("off".to_string()),
        overwrite: false,
    };

    let tempdir = tempdir().unwrap();
    let output_dir = tempdir.path().join("results");
    handle_demo_run_command("simple", Some(&output_dir), Some(settings)).unwrap();
    assert!(output_dir.join("plan.csv").is_file());
}

/// Running a non-existent demo fails without touching the filesystem.
#[test]
fn test_handle_demo_run_command_unknown() {
    let settings = Settings {
        log_level: Some("off".to_string()),
        overwrite: false,
    };

    let tempdir = tempdir().unwrap();
    let output_dir = tempdir.path().join("results");
    assert!(handle_demo_run_command("nope", Some(&output_dir), Some(settings)).is_err());
    assert!(!output_dir.exists());
}
