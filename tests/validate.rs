//! Integration tests for the `validate` command.
use chaseplan::cli::handle_validate_command;
use chaseplan::log::is_logger_initialised;
use chaseplan::settings::Settings;
use std::path::PathBuf;

/// Get the path to the demo model.
fn get_model_dir() -> PathBuf {
    PathBuf::from("demos/simple")
}

/// An integration test for the `validate` command.
///
/// We also check that the logger is initialised after it is run.
#[test]
fn test_handle_validate_command() {
    let settings = Settings {
        log_level: Some("off".to_string()),
        overwrite: false,
    };

    assert!(!is_logger_initialised());

    handle_validate_command(&get_model_dir(), Some(settings)).unwrap();

    assert!(is_logger_initialised());
}
