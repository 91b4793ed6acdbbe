//! Code for reading the cost table from a CSV file.
use crate::costs::{CostCategory, CostTable};
use crate::input::*;
use crate::units::MoneyPerUnit;
use anyhow::{Context, Result, ensure};
use serde::Deserialize;
use std::path::Path;

const COSTS_FILE_NAME: &str = "costs.csv";

/// A cost table record retrieved from a CSV file
#[derive(PartialEq, Debug, Deserialize)]
struct CostRaw {
    cost_type: CostCategory,
    value: f64,
}

/// Build the cost table from raw cost records.
///
/// Each category may appear at most once. Categories not listed default to a unit price of
/// zero when the table is queried.
fn read_costs_from_iter<I>(iter: I) -> Result<CostTable>
where
    I: Iterator<Item = CostRaw>,
{
    let mut costs = CostTable::default();
    for raw in iter {
        ensure!(
            raw.value.is_finite(),
            "Value for cost category {:?} is not a finite number",
            raw.cost_type
        );
        ensure!(
            costs.insert(raw.cost_type, MoneyPerUnit(raw.value)).is_none(),
            "Duplicate entry for cost category {:?}",
            raw.cost_type
        );
    }

    Ok(costs)
}

/// Read the cost table from the costs.csv file.
///
/// # Arguments
///
/// * `model_dir` - Folder containing model input files
pub fn read_costs(model_dir: &Path) -> Result<CostTable> {
    let file_path = model_dir.join(COSTS_FILE_NAME);
    let costs_csv = read_csv(&file_path)?;
    read_costs_from_iter(costs_csv.into_iter()).with_context(|| input_err_msg(&file_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_read_costs_from_iter() {
        let costs = read_costs_from_iter(
            [
                CostRaw {
                    cost_type: CostCategory::RegularTime,
                    value: 8.0,
                },
                CostRaw {
                    cost_type: CostCategory::Overtime,
                    value: 12.0,
                },
            ]
            .into_iter(),
        )
        .unwrap();

        assert_eq!(costs.unit_cost(CostCategory::RegularTime), MoneyPerUnit(8.0));
        assert_eq!(costs.unit_cost(CostCategory::Overtime), MoneyPerUnit(12.0));

        // Categories with no entry default to zero
        assert_eq!(costs.unit_cost(CostCategory::Decrease), MoneyPerUnit(0.0));
    }

    #[test]
    fn test_read_costs_from_iter_duplicate_category() {
        let result = read_costs_from_iter(
            [
                CostRaw {
                    cost_type: CostCategory::Overtime,
                    value: 12.0,
                },
                CostRaw {
                    cost_type: CostCategory::Overtime,
                    value: 13.0,
                },
            ]
            .into_iter(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_read_costs_from_iter_non_finite() {
        let result = read_costs_from_iter(
            [CostRaw {
                cost_type: CostCategory::RegularTime,
                value: f64::NAN,
            }]
            .into_iter(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_read_costs() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(COSTS_FILE_NAME);
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(
                file,
                "cost_type,value
regularTime,8
overtime,12
subcontracting,17
backorderCost,4
increaseCost,5
decreaseCost,6"
            )
            .unwrap();
        }

        let costs = read_costs(dir.path()).unwrap();
        assert_eq!(costs.unit_cost(CostCategory::Subcontracting), MoneyPerUnit(17.0));
        assert_eq!(costs.unit_cost(CostCategory::Increase), MoneyPerUnit(5.0));

        // The backorder category parses, even though the aggregation never consumes it
        assert_eq!(costs.unit_cost(CostCategory::Backorder), MoneyPerUnit(4.0));
    }

    #[test]
    fn test_read_costs_unknown_category() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join(COSTS_FILE_NAME);
        {
            let mut file = File::create(&file_path).unwrap();
            writeln!(file, "cost_type,value\nholdingCost,3").unwrap();
        }

        assert!(read_costs(dir.path()).is_err());
    }
}
