//! The cost table, mapping each cost category to a unit price.
use crate::units::MoneyPerUnit;
use indexmap::IndexMap;
use serde_string_enum::{DeserializeLabeledStringEnum, SerializeLabeledStringEnum};
use strum::EnumIter;

/// A category of cost recognised by the planner.
///
/// The string labels match the cost table's input vocabulary. Note that
/// [`CostCategory::Backorder`] is accepted on input but unmet demand is never costed, so the
/// category contributes nothing to the plan's cost breakdown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    SerializeLabeledStringEnum,
    DeserializeLabeledStringEnum,
)]
pub enum CostCategory {
    /// Cost per unit produced in regular time
    #[string = "regularTime"]
    RegularTime,
    /// Cost per unit produced in overtime
    #[string = "overtime"]
    Overtime,
    /// Cost per unit produced by a subcontractor
    #[string = "subcontracting"]
    Subcontracting,
    /// Cost per unit of upward change in regular production between periods
    #[string = "increaseCost"]
    Increase,
    /// Cost per unit of downward change in regular production between periods
    #[string = "decreaseCost"]
    Decrease,
    /// Cost per unit of unmet demand (accepted for compatibility, never consumed)
    #[string = "backorderCost"]
    Backorder,
}

/// Unit prices for each cost category.
///
/// A category with no entry has a unit price of zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTable(IndexMap<CostCategory, MoneyPerUnit>);

impl CostTable {
    /// Get the unit price for the given category, defaulting to zero if absent.
    pub fn unit_cost(&self, category: CostCategory) -> MoneyPerUnit {
        self.0
            .get(&category)
            .copied()
            .unwrap_or(MoneyPerUnit(0.0))
    }

    /// Set the unit price for the given category.
    ///
    /// Returns the previous price if the category already had an entry.
    pub fn insert(
        &mut self,
        category: CostCategory,
        price: MoneyPerUnit,
    ) -> Option<MoneyPerUnit> {
        self.0.insert(category, price)
    }
}

impl FromIterator<(CostCategory, MoneyPerUnit)> for CostTable {
    fn from_iter<I: IntoIterator<Item = (CostCategory, MoneyPerUnit)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_cost_missing_category_is_zero() {
        let costs = CostTable::default();
        assert_eq!(costs.unit_cost(CostCategory::RegularTime), MoneyPerUnit(0.0));
    }

    #[test]
    fn test_unit_cost() {
        let costs: CostTable = [(CostCategory::Overtime, MoneyPerUnit(12.0))]
            .into_iter()
            .collect();
        assert_eq!(costs.unit_cost(CostCategory::Overtime), MoneyPerUnit(12.0));
        assert_eq!(costs.unit_cost(CostCategory::Subcontracting), MoneyPerUnit(0.0));
    }

    #[test]
    fn test_insert_reports_duplicates() {
        let mut costs = CostTable::default();
        assert!(costs
            .insert(CostCategory::Increase, MoneyPerUnit(5.0))
            .is_none());
        assert_eq!(
            costs.insert(CostCategory::Increase, MoneyPerUnit(6.0)),
            Some(MoneyPerUnit(5.0))
        );
    }
}
