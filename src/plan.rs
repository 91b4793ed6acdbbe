//! The core chase-demand planning pass.
//!
//! Demand for each period is split across the three production channels in a fixed priority
//! order: regular time first, then overtime, then subcontracting. This is a capacity-chasing
//! policy, not a cost-minimising one; channel priority never depends on the relative unit costs.
use crate::costs::{CostCategory, CostTable};
use crate::units::{Money, Units};
use ::log::warn;
use indexmap::IndexMap;
use std::fmt;
use std::rc::Rc;
use strum::IntoEnumIterator;

/// A unique label identifying a period within a plan (e.g. "period1")
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PeriodID(pub Rc<str>);

impl fmt::Display for PeriodID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PeriodID {
    fn from(s: &str) -> Self {
        PeriodID(Rc::from(s))
    }
}

impl From<String> for PeriodID {
    fn from(s: String) -> Self {
        PeriodID(Rc::from(s))
    }
}

/// A single planning interval with its demand and channel capacity ceilings.
///
/// Capacities are expected to be non-negative, but this is not enforced: negative values
/// propagate arithmetically through the allocation, as does negative demand.
#[derive(Debug, Clone, PartialEq)]
pub struct Period {
    /// The period's unique label
    pub id: PeriodID,
    /// Required production volume for this period
    pub demand: Units,
    /// Ceiling for regular-time production
    pub regular_capacity: Units,
    /// Ceiling for overtime production
    pub overtime_capacity: Units,
    /// Ceiling for subcontracted production
    pub subcontract_capacity: Units,
}

/// Production assigned to each channel for one period
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelProduction {
    /// Units produced in regular time
    pub regular: Units,
    /// Units produced in overtime
    pub overtime: Units,
    /// Units produced by a subcontractor
    pub subcontract: Units,
}

/// Split a period's demand across the three channels in priority order.
///
/// Each channel takes as much of the remaining demand as its capacity allows. Demand left over
/// once all three capacities are exhausted is dropped; it appears nowhere in the result.
pub fn allocate(
    demand: Units,
    regular_capacity: Units,
    overtime_capacity: Units,
    subcontract_capacity: Units,
) -> ChannelProduction {
    let regular = demand.min(regular_capacity);
    let overtime = (demand - regular).min(overtime_capacity);
    let subcontract = (demand - regular - overtime).min(subcontract_capacity);

    ChannelProduction {
        regular,
        overtime,
        subcontract,
    }
}

/// The computed outcome for a single period
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodResult {
    /// The input period this result was computed from
    pub period: Period,
    /// Units produced in regular time
    pub regular_production: Units,
    /// Units produced in overtime
    pub overtime_production: Units,
    /// Units produced by a subcontractor
    pub subcontracting: Units,
    /// Upward change in regular production relative to the previous period
    pub unit_increase: Units,
    /// Downward change in regular production relative to the previous period
    pub unit_decrease: Units,
}

/// Column-wise totals over every period result in a plan
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlanTotals {
    /// Total demand
    pub demand: Units,
    /// Total regular-time capacity
    pub regular_capacity: Units,
    /// Total overtime capacity
    pub overtime_capacity: Units,
    /// Total subcontract capacity
    pub subcontract_capacity: Units,
    /// Total regular-time production
    pub regular_production: Units,
    /// Total overtime production
    pub overtime_production: Units,
    /// Total subcontracted production
    pub subcontracting: Units,
    /// Total upward change in regular production
    pub unit_increase: Units,
    /// Total downward change in regular production
    pub unit_decrease: Units,
}

impl PlanTotals {
    /// Add one period's result to the running totals
    fn accumulate(&mut self, result: &PeriodResult) {
        self.demand += result.period.demand;
        self.regular_capacity += result.period.regular_capacity;
        self.overtime_capacity += result.period.overtime_capacity;
        self.subcontract_capacity += result.period.subcontract_capacity;
        self.regular_production += result.regular_production;
        self.overtime_production += result.overtime_production;
        self.subcontracting += result.subcontracting;
        self.unit_increase += result.unit_increase;
        self.unit_decrease += result.unit_decrease;
    }

    /// The total quantity priced by the given cost category.
    ///
    /// Returns `None` for [`CostCategory::Backorder`]: unmet demand is tracked nowhere in the
    /// totals and is never costed.
    pub fn quantity(&self, category: CostCategory) -> Option<Units> {
        match category {
            CostCategory::RegularTime => Some(self.regular_production),
            CostCategory::Overtime => Some(self.overtime_production),
            CostCategory::Subcontracting => Some(self.subcontracting),
            CostCategory::Increase => Some(self.unit_increase),
            CostCategory::Decrease => Some(self.unit_decrease),
            CostCategory::Backorder => None,
        }
    }
}

/// A complete chase-demand plan: per-period results plus the three summary aggregates
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    /// Per-period results, in input order
    pub periods: Vec<PeriodResult>,
    /// Column-wise totals over all periods
    pub totals: PlanTotals,
    /// Per-category cost subtotals, in fixed category order
    pub subtotal_costs: IndexMap<CostCategory, Money>,
    /// The sum of all cost subtotals
    pub total_cost: Money,
}

/// Compute a chase-demand plan for the given periods and cost table.
///
/// This is a pure function of its inputs: recomputing with identical inputs yields an identical
/// plan, and no state is retained between calls. The only state *within* a call is the previous
/// period's regular production, which starts at zero before the first period and drives the
/// unit increase/decrease figures.
///
/// A period whose demand exceeds the sum of its three capacities is not a fault; the shortfall
/// is logged and dropped (see [`CostCategory::Backorder`]).
pub fn compute_plan(periods: &[Period], costs: &CostTable) -> Plan {
    let mut results = Vec::with_capacity(periods.len());
    let mut totals = PlanTotals::default();
    let mut previous_regular = Units(0.0);

    for period in periods {
        let production = allocate(
            period.demand,
            period.regular_capacity,
            period.overtime_capacity,
            period.subcontract_capacity,
        );

        // Both deltas are taken from the old value before it is replaced
        let unit_increase = (production.regular - previous_regular).max(Units(0.0));
        let unit_decrease = (previous_regular - production.regular).max(Units(0.0));
        previous_regular = production.regular;

        let produced = production.regular + production.overtime + production.subcontract;
        if produced < period.demand {
            warn!(
                "Period {}: demand {} exceeds total capacity; shortfall of {} will not be met",
                period.id,
                period.demand,
                period.demand - produced
            );
        }

        let result = PeriodResult {
            period: period.clone(),
            regular_production: production.regular,
            overtime_production: production.overtime,
            subcontracting: production.subcontract,
            unit_increase,
            unit_decrease,
        };
        totals.accumulate(&result);
        results.push(result);
    }

    let subtotal_costs = calculate_subtotal_costs(&totals, costs);
    let total_cost = subtotal_costs
        .values()
        .fold(Money(0.0), |acc, &amount| acc + amount);

    Plan {
        periods: results,
        totals,
        subtotal_costs,
        total_cost,
    }
}

/// Calculate the per-category cost subtotals: each category's quantity total times its unit
/// price. Categories pricing no quantity (backorder) are skipped.
fn calculate_subtotal_costs(
    totals: &PlanTotals,
    costs: &CostTable,
) -> IndexMap<CostCategory, Money> {
    CostCategory::iter()
        .filter_map(|category| {
            let quantity = totals.quantity(category)?;
            Some((category, costs.unit_cost(category) * quantity))
        })
        .collect()
}
