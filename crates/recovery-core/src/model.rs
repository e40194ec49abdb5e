//! Stored facts the engine computes from.
//!
//! These are immutable snapshots handed over by the persistence layer. Field
//! names serialize in camelCase to match the stored documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Monetary amount in the user's currency. Formatting is a presentation concern.
pub type Money = f64;

/// The user's sobriety date and estimated daily spend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SobrietyProfile {
    /// Local calendar date the streak began, if the user has set one.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Average money per day no longer spent on the substance.
    #[serde(default)]
    pub daily_cost: Money,
}

impl SobrietyProfile {
    pub fn new(start_date: Option<NaiveDate>, daily_cost: Money) -> Self {
        Self {
            start_date,
            daily_cost,
        }
    }

    /// The daily cost as a validated rate, or `None` when savings features
    /// should be hidden (no cost entered, or zero).
    pub fn daily_rate(&self) -> Option<DailyCost> {
        DailyCost::new(self.daily_cost).ok()
    }
}

/// A strictly positive daily cost.
///
/// Savings and goal computations divide by the daily cost, so they only accept
/// this type. Build it with [`DailyCost::new`] or [`SobrietyProfile::daily_rate`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct DailyCost(Money);

impl DailyCost {
    pub fn new(amount: Money) -> Result<Self, ValidationError> {
        if amount.is_finite() && amount > 0.0 {
            Ok(Self(amount))
        } else {
            Err(ValidationError::NonPositiveDailyCost(amount))
        }
    }

    pub fn amount(self) -> Money {
        self.0
    }
}

impl TryFrom<Money> for DailyCost {
    type Error = ValidationError;

    fn try_from(amount: Money) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}
