//! Code for reading the period list from a CSV file.
use crate::input::*;
use crate::plan::{Period, PeriodID};
use crate::units::Units;
use anyhow::{Context, Result, ensure};
use itertools::Itertools;
use serde::Deserialize;
use std::path::Path;

const PERIODS_FILE_NAME: &str = "periods.csv";

/// A period record retrieved from a CSV file
#[derive(PartialEq, Debug, Deserialize)]
struct PeriodRaw {
    period: String,
    demand: f64,
    regular_capacity: f64,
    overtime_capacity: f64,
    subcontract_capacity: f64,
}

/// Read the ordered period list from raw period records.
///
/// Period labels must be unique. Every numeric field must be finite: "NaN" and "inf" parse as
/// valid floats, so they are rejected here rather than being allowed to poison the plan's
/// totals. Negative values are NOT rejected; they propagate arithmetically through the
/// allocation.
fn read_periods_from_iter<I>(iter: I) -> Result<Vec<Period>>
where
    I: Iterator<Item = PeriodRaw>,
{
    let mut periods = Vec::new();
    for raw in iter {
        for (field, value) in [
            ("demand", raw.demand),
            ("regular_capacity", raw.regular_capacity),
            ("overtime_capacity", raw.overtime_capacity),
            ("subcontract_capacity", raw.subcontract_capacity),
        ] {
            ensure!(
                value.is_finite(),
                "Value for {} in period {} is not a finite number",
                field,
                raw.period
            );
        }

        periods.push(Period {
            id: PeriodID::from(raw.period),
            demand: Units(raw.demand),
            regular_capacity: Units(raw.regular_capacity),
            overtime_capacity: Units(raw.overtime_capacity),
            subcontract_capacity: Units(raw.subcontract_capacity),
        });
    }

    let duplicates: Vec<_> = periods.iter().map(|period| &period.id).duplicates().collect();
    ensure!(
        duplicates.is_empty(),
        "Duplicate period labels: {}",
        duplicates.iter().join(", ")
    );

    Ok(periods)
}

/// Read the period list from the periods.csv file.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model input files
///
/// # Returns
///
/// The periods in file order. An empty file is permitted: the resulting plan then contains only
/// the summary rows.
pub fn read_periods(model_dir: &Path) -> Result<Vec<Period>> {
    let file_path = model_dir.join(PERIODS_FILE_NAME);
    let periods_csv = read_csv(&file_path)?;
    read_periods_from_iter(periods_csv.into_iter()).with_context(|| input_err_msg(&file_path))
}
