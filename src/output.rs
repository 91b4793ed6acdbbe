//! The module responsible for writing the computed plan to disk.
use crate::costs::CostCategory;
use crate::plan::{PeriodResult, Plan, PlanTotals};
use crate::units::Money;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The root folder in which model-specific output folders will be created
const OUTPUT_DIRECTORY_ROOT: &str = "chaseplan_results";

/// The output file name for the computed plan
const PLAN_FILE_NAME: &str = "plan.csv";

/// Label of the column-wise totals row
pub const TOTAL_ROW_LABEL: &str = "Total";

/// Label of the per-category cost subtotals row
pub const SUBTOTAL_COSTS_ROW_LABEL: &str = "Subtotal Costs";

/// Label of the grand total cost row
pub const TOTAL_COST_ROW_LABEL: &str = "Total Cost";

/// Get the default output folder for the model in the specified directory
pub fn get_output_dir(model_dir: &Path) -> Result<PathBuf> {
    // Get the model name from the dir path. This ends up being convoluted because we need to
    // check for all possible errors. Ugh.
    let model_dir = model_dir
        .canonicalize() // canonicalise in case the user has specified "."
        .context("Could not resolve path to model")?;

    let model_name = model_dir
        .file_name()
        .context("Model cannot be in root folder")?
        .to_str()
        .context("Invalid chars in model dir name")?;

    // Construct path
    Ok([OUTPUT_DIRECTORY_ROOT, model_name].iter().collect())
}

/// Create a new output directory for the model.
///
/// # Returns
///
/// Whether an existing directory was removed to make way for the new one.
pub fn create_output_directory(output_dir: &Path, overwrite: bool) -> Result<bool> {
    let existed = output_dir.is_dir();
    if existed {
        ensure!(
            overwrite,
            "Output directory {} already exists (pass --overwrite to replace it)",
            output_dir.display()
        );
        fs::remove_dir_all(output_dir)?;
    }

    fs::create_dir_all(output_dir)?;

    Ok(existed)
}

/// Represents one row of the plan CSV file.
///
/// Period rows and the totals row fill every column. The cost rows reuse the production-quantity
/// columns to carry cost amounts, keeping the category-to-amount association visible in a single
/// table: each subtotal sits in the column whose quantity it prices, and the grand total sits in
/// the demand column. Columns that don't apply to a row are left empty.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PlanRow {
    /// The period label, or one of the three summary row labels
    pub period: String,
    /// Demand (period rows and totals), or the grand total cost (Total Cost row)
    pub demand: Option<f64>,
    /// Regular-time capacity
    pub regular_capacity: Option<f64>,
    /// Overtime capacity
    pub overtime_capacity: Option<f64>,
    /// Subcontract capacity
    pub subcontract_capacity: Option<f64>,
    /// Regular-time production, or its cost subtotal (Subtotal Costs row)
    pub regular_production: Option<f64>,
    /// Overtime production, or its cost subtotal (Subtotal Costs row)
    pub overtime_production: Option<f64>,
    /// Subcontracted production, or its cost subtotal (Subtotal Costs row)
    pub subcontracting: Option<f64>,
    /// Unit increase, or the increase cost subtotal (Subtotal Costs row)
    pub unit_increase: Option<f64>,
    /// Unit decrease, or the decrease cost subtotal (Subtotal Costs row)
    pub unit_decrease: Option<f64>,
}

impl PlanRow {
    /// A row with every numeric column empty
    fn empty(period: &str) -> Self {
        Self {
            period: period.to_string(),
            demand: None,
            regular_capacity: None,
            overtime_capacity: None,
            subcontract_capacity: None,
            regular_production: None,
            overtime_production: None,
            subcontracting: None,
            unit_increase: None,
            unit_decrease: None,
        }
    }

    /// The row for a single period's result
    fn from_period_result(result: &PeriodResult) -> Self {
        Self {
            period: result.period.id.to_string(),
            demand: Some(result.period.demand.value()),
            regular_capacity: Some(result.period.regular_capacity.value()),
            overtime_capacity: Some(result.period.overtime_capacity.value()),
            subcontract_capacity: Some(result.period.subcontract_capacity.value()),
            regular_production: Some(result.regular_production.value()),
            overtime_production: Some(result.overtime_production.value()),
            subcontracting: Some(result.subcontracting.value()),
            unit_increase: Some(result.unit_increase.value()),
            unit_decrease: Some(result.unit_decrease.value()),
        }
    }

    /// The column-wise totals row
    fn total(totals: &PlanTotals) -> Self {
        Self {
            period: TOTAL_ROW_LABEL.to_string(),
            demand: Some(totals.demand.value()),
            regular_capacity: Some(totals.regular_capacity.value()),
            overtime_capacity: Some(totals.overtime_capacity.value()),
            subcontract_capacity: Some(totals.subcontract_capacity.value()),
            regular_production: Some(totals.regular_production.value()),
            overtime_production: Some(totals.overtime_production.value()),
            subcontracting: Some(totals.subcontracting.value()),
            unit_increase: Some(totals.unit_increase.value()),
            unit_decrease: Some(totals.unit_decrease.value()),
        }
    }

    /// The cost subtotals row, with each amount in the column whose quantity it prices
    fn subtotal_costs(plan: &Plan) -> Self {
        let amount = |category| {
            plan.subtotal_costs
                .get(&category)
                .copied()
                .unwrap_or(Money(0.0))
                .value()
        };

        Self {
            regular_production: Some(amount(CostCategory::RegularTime)),
            overtime_production: Some(amount(CostCategory::Overtime)),
            subcontracting: Some(amount(CostCategory::Subcontracting)),
            unit_increase: Some(amount(CostCategory::Increase)),
            unit_decrease: Some(amount(CostCategory::Decrease)),
            ..Self::empty(SUBTOTAL_COSTS_ROW_LABEL)
        }
    }

    /// The grand total cost row, with the amount in the demand column
    fn total_cost(total_cost: Money) -> Self {
        Self {
            demand: Some(total_cost.value()),
            ..Self::empty(TOTAL_COST_ROW_LABEL)
        }
    }
}

/// Shape a plan into its display rows.
///
/// The result always has `plan.periods.len() + 3` rows: one per period in input order, then the
/// totals row, the cost subtotals row and the grand total cost row, in that order.
pub fn build_rows(plan: &Plan) -> Vec<PlanRow> {
    let mut rows: Vec<_> = plan.periods.iter().map(PlanRow::from_period_result).collect();
    rows.push(PlanRow::total(&plan.totals));
    rows.push(PlanRow::subtotal_costs(plan));
    rows.push(PlanRow::total_cost(plan.total_cost));

    rows
}

/// Write the computed plan to a CSV file in the specified output folder.
pub fn write_plan(output_path: &Path, plan: &Plan) -> Result<()> {
    let file_path = output_path.join(PLAN_FILE_NAME);
    let mut writer = csv::Writer::from_path(&file_path)
        .with_context(|| format!("Could not create {}", file_path.display()))?;

    for row in build_rows(plan) {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
