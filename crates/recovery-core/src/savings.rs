//! Money not spent: all-time and windowed savings, plus the "reality check"
//! model of what continued use would have cost.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::model::{DailyCost, Money};

/// Savings over `elapsed_days` at `rate`. No rounding is applied.
pub fn total_saved(elapsed_days: u32, rate: DailyCost) -> Money {
    f64::from(elapsed_days) * rate.amount()
}

/// Savings accrued inside `[window_start, window_end)`.
pub fn window_saved(
    start: NaiveDate,
    rate: DailyCost,
    window_start: NaiveDate,
    window_end: NaiveDate,
    clock: &Clock,
) -> Money {
    f64::from(clock.days_in_window(start, window_start, window_end)) * rate.amount()
}

/// Hypothetical cost of continuing to use over the same period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterfactualCost {
    pub principal: Money,
    pub interest: Money,
    pub health_cost: Money,
    pub total: Money,
}

/// Constants behind [`CounterfactualCost`].
///
/// The interest term is a flat surcharge on the principal standing in for
/// 20% APR compounding over the period. It is intentionally not a daily
/// compounding calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Fraction of the principal added as interest.
    pub interest_surcharge: f64,
    /// Flat health-cost estimate per elapsed day.
    pub health_cost_per_day: Money,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            interest_surcharge: 0.34,
            health_cost_per_day: 4.0,
        }
    }
}

impl CostModel {
    pub fn counterfactual_cost(&self, elapsed_days: u32, rate: DailyCost) -> CounterfactualCost {
        let principal = total_saved(elapsed_days, rate);
        let interest = (principal * self.interest_surcharge).round();
        let health_cost = (f64::from(elapsed_days) * self.health_cost_per_day).round();
        CounterfactualCost {
            principal,
            interest,
            health_cost,
            total: principal + interest + health_cost,
        }
    }
}

/// [`CostModel::counterfactual_cost`] with the default constants.
pub fn counterfactual_cost(elapsed_days: u32, rate: DailyCost) -> CounterfactualCost {
    CostModel::default().counterfactual_cost(elapsed_days, rate)
}

/// Headline "net gain" figure: actual savings plus the whole counterfactual
/// total. This is a sum, not a difference.
pub fn net_gain(total_saved: Money, counterfactual_total: Money) -> Money {
    total_saved + counterfactual_total
}

/// Savings card contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub daily_cost: Money,
    pub total_saved: Money,
    pub this_month: Money,
    pub this_year: Money,
    pub counterfactual: CounterfactualCost,
    pub net_gain: Money,
}

impl SavingsSummary {
    pub fn compute(start: NaiveDate, rate: DailyCost, clock: &Clock, model: &CostModel) -> Self {
        let elapsed = clock.elapsed_days(start);
        let total = total_saved(elapsed, rate);
        let month = clock.month_window();
        let year = clock.year_window();
        let counterfactual = model.counterfactual_cost(elapsed, rate);

        Self {
            daily_cost: rate.amount(),
            total_saved: total,
            this_month: window_saved(start, rate, month.start, month.end, clock),
            this_year: window_saved(start, rate, year.start, year.end, clock),
            net_gain: net_gain(total, counterfactual.total),
            counterfactual,
        }
    }
}
