//! Milestone table: named day thresholds and their achievement state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::default_milestones;
use crate::clock::{add_days, Clock};

/// A named recovery milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub icon: String,
    /// Elapsed days required to reach the milestone (always > 0).
    pub threshold_days: u32,
}

impl Milestone {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        threshold_days: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            icon: icon.into(),
            threshold_days,
        }
    }
}

/// A milestone evaluated against a sobriety date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedMilestone {
    #[serde(flatten)]
    pub milestone: Milestone,
    pub achieved: bool,
    /// Days left until the threshold; 0 once achieved.
    pub days_until: u32,
    /// Calendar date the milestone is (or was) reached.
    pub target_date: NaiveDate,
}

/// Ordered milestone catalog.
#[derive(Debug, Clone)]
pub struct MilestoneTable {
    catalog: Vec<Milestone>,
}

impl Default for MilestoneTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MilestoneTable {
    /// Table over the built-in catalog.
    pub fn new() -> Self {
        Self::with_catalog(default_milestones())
    }

    /// Table over a custom catalog.
    ///
    /// Entries are put in ascending threshold order (stable for equal
    /// thresholds) and zero thresholds are dropped, so achievement is always
    /// monotonic along the table.
    pub fn with_catalog(mut catalog: Vec<Milestone>) -> Self {
        catalog.retain(|m| m.threshold_days > 0);
        catalog.sort_by_key(|m| m.threshold_days);
        Self { catalog }
    }

    pub fn catalog(&self) -> &[Milestone] {
        &self.catalog
    }

    /// Evaluate every milestone for a streak that began on `start`.
    pub fn milestones(&self, start: NaiveDate, clock: &Clock) -> Vec<DerivedMilestone> {
        let elapsed = clock.elapsed_days(start);
        self.catalog
            .iter()
            .map(|m| DerivedMilestone {
                milestone: m.clone(),
                achieved: elapsed >= m.threshold_days,
                days_until: m.threshold_days.saturating_sub(elapsed),
                target_date: add_days(start, m.threshold_days),
            })
            .collect()
    }
}

/// The first unachieved milestone in catalog order, or `None` when every
/// milestone has been reached.
pub fn next_milestone(derived: &[DerivedMilestone]) -> Option<&DerivedMilestone> {
    derived.iter().find(|m| !m.achieved)
}

/// The first `n` unachieved milestones, in catalog order.
pub fn upcoming(derived: &[DerivedMilestone], n: usize) -> Vec<&DerivedMilestone> {
    derived.iter().filter(|m| !m.achieved).take(n).collect()
}

/// Number of milestones reached.
pub fn achieved_count(derived: &[DerivedMilestone]) -> usize {
    derived.iter().filter(|m| m.achieved).count()
}
