//! Integration tests for the `run` command.
use chaseplan::cli::{RunOpts, handle_run_command};
use chaseplan::output::{PlanRow, SUBTOTAL_COSTS_ROW_LABEL, TOTAL_COST_ROW_LABEL, TOTAL_ROW_LABEL};
use chaseplan::settings::Settings;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// Get the path to the demo model.
fn get_model_dir() -> PathBuf {
    PathBuf::from("demos/simple")
}

/// Settings which suppress logging output
fn quiet_settings() -> Settings {
    Settings {
        log_level: Some("off".to_string()),
        overwrite: false,
    }
}

/// Read the plan rows back from the output folder
fn read_plan(output_dir: &Path) -> Vec<PlanRow> {
    let mut reader = csv::Reader::from_path(output_dir.join("plan.csv")).unwrap();
    reader.deserialize().map(|row| row.unwrap()).collect()
}

/// An integration test for the `run` command.
#[test]
fn test_handle_run_command() {
    // Save results to non-existent directory to check that directory creation works
    let tempdir = tempdir().unwrap();
    let output_dir = tempdir.path().join("results");
    let opts = RunOpts {
        output_dir: Some(output_dir.clone()),
        overwrite: false,
    };
    handle_run_command(&get_model_dir(), &opts, Some(quiet_settings())).unwrap();

    // Three period rows plus the three summary rows, in order
    let rows = read_plan(&output_dir);
    let labels: Vec<_> = rows.iter().map(|row| row.period.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "period1",
            "period2",
            "period3",
            TOTAL_ROW_LABEL,
            SUBTOTAL_COSTS_ROW_LABEL,
            TOTAL_COST_ROW_LABEL
        ]
    );

    // Demand of 1000 against 800 regular capacity spills 200 into overtime
    assert_eq!(rows[0].regular_production, Some(800.0));
    assert_eq!(rows[0].overtime_production, Some(200.0));
    assert_eq!(rows[0].unit_increase, Some(800.0));

    // The demand drop in period3 registers as a decrease of 200
    assert_eq!(rows[2].regular_production, Some(600.0));
    assert_eq!(rows[2].unit_decrease, Some(200.0));

    // Grand total: 2200*8 + 400*12 + 800*5 + 200*6
    assert_eq!(rows[5].demand, Some(27600.0));

    // Second time will fail because the logging is already initialised
    let opts = RunOpts {
        output_dir: Some(tempdir.path().join("results2")),
        overwrite: false,
    };
    assert_eq!(
        handle_run_command(&get_model_dir(), &opts, Some(quiet_settings()))
            .unwrap_err()
            .chain()
            .next()
            .unwrap()
            .to_string(),
        "Failed to initialise logging."
    );
}
