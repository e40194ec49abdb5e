//! Savings goals and the "what could I buy" countdowns.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;
use crate::model::{DailyCost, Money};

/// Where a goal definition comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalSource {
    Builtin,
    Custom,
}

/// A named amount the user is saving toward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub amount: Money,
    pub source: GoalSource,
}

impl SavingsGoal {
    /// Create a user-defined goal with a fresh id.
    pub fn custom(
        name: impl Into<String>,
        icon: impl Into<String>,
        amount: Money,
    ) -> Result<Self, ValidationError> {
        if !(amount.is_finite() && amount > 0.0) {
            return Err(ValidationError::NonPositiveGoalAmount(amount));
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            icon: icon.into(),
            amount,
            source: GoalSource::Custom,
        })
    }
}

/// Something the user could buy with their savings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasableItem {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub min_cost: Money,
    pub max_cost: Money,
}

/// Progress toward a target amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    /// Whole percent saved, clamped to `0..=100`.
    pub percent: u8,
    /// Days of continued savings needed to reach the target.
    pub days_away: u32,
}

/// Progress toward `amount` given what has been saved so far.
pub fn goal_progress(amount: Money, total_saved: Money, rate: DailyCost) -> GoalProgress {
    let percent = if amount > 0.0 {
        (100.0 * total_saved / amount).round().clamp(0.0, 100.0) as u8
    } else {
        100
    };
    let remaining = amount - total_saved;
    let days_away = if remaining > 0.0 {
        (remaining / rate.amount()).ceil().min(f64::from(u32::MAX)) as u32
    } else {
        0
    };
    GoalProgress { percent, days_away }
}

/// One row of the merged goal countdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalCountdown {
    pub goal: SavingsGoal,
    #[serde(flatten)]
    pub progress: GoalProgress,
    pub unlocked: bool,
}

impl GoalCountdown {
    fn new(goal: &SavingsGoal, total_saved: Money, rate: DailyCost) -> Self {
        let progress = goal_progress(goal.amount, total_saved, rate);
        Self {
            goal: goal.clone(),
            unlocked: progress.days_away == 0,
            progress,
        }
    }
}

/// Built-in and custom goals together, soonest first.
///
/// The sort is stable: goals with equal `days_away` keep their input order,
/// built-ins ahead of custom goals.
pub fn merged_countdown(
    builtin: &[SavingsGoal],
    custom: &[SavingsGoal],
    total_saved: Money,
    rate: DailyCost,
) -> Vec<GoalCountdown> {
    let mut rows: Vec<GoalCountdown> = builtin
        .iter()
        .chain(custom)
        .map(|goal| GoalCountdown::new(goal, total_saved, rate))
        .collect();
    rows.sort_by_key(|row| row.progress.days_away);
    rows
}

/// The first `n` goals still locked, in countdown order.
pub fn coming_soon(countdown: &[GoalCountdown], n: usize) -> Vec<&GoalCountdown> {
    countdown.iter().filter(|row| !row.unlocked).take(n).collect()
}

/// Headline progress for the user's selected goal, looked up among both
/// goal sets. `None` when no goal is selected or the id is stale.
pub fn active_goal_progress(
    builtin: &[SavingsGoal],
    custom: &[SavingsGoal],
    active_goal_id: Option<&str>,
    total_saved: Money,
    rate: DailyCost,
) -> Option<GoalCountdown> {
    let id = active_goal_id?;
    builtin
        .iter()
        .chain(custom)
        .find(|goal| goal.id == id)
        .map(|goal| GoalCountdown::new(goal, total_saved, rate))
}

/// One card in the purchasable-items carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseCountdown {
    pub item: PurchasableItem,
    #[serde(flatten)]
    pub progress: GoalProgress,
    pub can_afford: bool,
}

/// Items worth showing: those where savings have reached `visibility` of the
/// minimum cost. Catalog order is kept.
pub fn purchasable_carousel(
    items: &[PurchasableItem],
    total_saved: Money,
    rate: DailyCost,
    visibility: f64,
) -> Vec<PurchaseCountdown> {
    items
        .iter()
        .filter(|item| total_saved >= visibility * item.min_cost)
        .map(|item| PurchaseCountdown {
            item: item.clone(),
            progress: goal_progress(item.min_cost, total_saved, rate),
            can_afford: total_saved >= item.min_cost,
        })
        .collect()
}
