//! Fixtures for tests

use crate::costs::{CostCategory, CostTable};
use crate::plan::Period;
use crate::units::{MoneyPerUnit, Units};
use rstest::fixture;

/// A cost table with every category priced
#[fixture]
pub fn costs() -> CostTable {
    [
        (CostCategory::RegularTime, MoneyPerUnit(8.0)),
        (CostCategory::Overtime, MoneyPerUnit(12.0)),
        (CostCategory::Subcontracting, MoneyPerUnit(17.0)),
        (CostCategory::Increase, MoneyPerUnit(5.0)),
        (CostCategory::Decrease, MoneyPerUnit(6.0)),
    ]
    .into_iter()
    .collect()
}

/// Two periods with identical demand, each needing overtime on top of regular capacity
#[fixture]
pub fn periods() -> Vec<Period> {
    ["period1", "period2"]
        .into_iter()
        .map(|id| Period {
            id: id.into(),
            demand: Units(1000.0),
            regular_capacity: Units(800.0),
            overtime_capacity: Units(300.0),
            subcontract_capacity: Units(0.0),
        })
        .collect()
}
