//! Dashboard view-model: every derived number for one render pass.
//!
//! The persistence layer hands over a [`RecoverySnapshot`]; the presentation
//! layer supplies a [`Clock`] and receives a [`Dashboard`]. Sections whose
//! inputs are missing come back as `None` so the UI can show placeholders.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{builtin_goals, purchasable_items};
use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::goals::{
    active_goal_progress, coming_soon, merged_countdown, purchasable_carousel, GoalCountdown,
    PurchaseCountdown, SavingsGoal,
};
use crate::milestones::{achieved_count, next_milestone, upcoming, DerivedMilestone, MilestoneTable};
use crate::model::SobrietyProfile;
use crate::savings::{total_saved, SavingsSummary};
use crate::wellness::{week_over_week, CheckIn, StoredCheckIn, WeeklyTrend, WellnessSummary};

/// Everything the engine reads for one user, as stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecoverySnapshot {
    #[serde(default)]
    pub profile: SobrietyProfile,
    #[serde(default)]
    pub custom_goals: Vec<SavingsGoal>,
    #[serde(default)]
    pub active_goal_id: Option<String>,
    #[serde(default)]
    pub check_ins: Vec<StoredCheckIn>,
}

impl RecoverySnapshot {
    /// Parse a snapshot document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check-ins with legacy field names resolved.
    pub fn normalized_check_ins(&self) -> Vec<CheckIn> {
        self.check_ins.iter().cloned().map(StoredCheckIn::normalize).collect()
    }
}

/// Streak and milestone card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SobrietySection {
    pub start_date: NaiveDate,
    pub elapsed_days: u32,
    pub achieved_count: usize,
    pub next_milestone: Option<DerivedMilestone>,
    pub upcoming: Vec<DerivedMilestone>,
    pub milestones: Vec<DerivedMilestone>,
}

impl SobrietySection {
    pub fn compute(start: NaiveDate, table: &MilestoneTable, upcoming_len: usize, clock: &Clock) -> Self {
        let milestones = table.milestones(start, clock);
        Self {
            start_date: start,
            elapsed_days: clock.elapsed_days(start),
            achieved_count: achieved_count(&milestones),
            next_milestone: next_milestone(&milestones).cloned(),
            upcoming: upcoming(&milestones, upcoming_len).into_iter().cloned().collect(),
            milestones,
        }
    }
}

/// Money card: savings totals, goals and the carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSection {
    pub summary: SavingsSummary,
    pub active_goal: Option<GoalCountdown>,
    pub coming_soon: Vec<GoalCountdown>,
    pub countdown: Vec<GoalCountdown>,
    pub carousel: Vec<PurchaseCountdown>,
}

/// The full dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub today: NaiveDate,
    /// `None` until a sobriety date is set.
    pub sobriety: Option<SobrietySection>,
    /// `None` without a sobriety date or with a zero daily cost.
    pub savings: Option<SavingsSection>,
    pub wellness: WellnessSummary,
    /// `None` when no metric can be compared week over week.
    pub trend: Option<WeeklyTrend>,
}

impl Dashboard {
    /// Derive the dashboard from a snapshot.
    pub fn build(snapshot: &RecoverySnapshot, config: &EngineConfig, clock: &Clock) -> Self {
        let profile = &snapshot.profile;
        let check_ins = snapshot.normalized_check_ins();

        let sobriety = profile.start_date.map(|start| {
            SobrietySection::compute(
                start,
                &MilestoneTable::new(),
                config.dashboard.upcoming_milestones,
                clock,
            )
        });

        let savings = match (profile.start_date, profile.daily_rate()) {
            (Some(start), Some(rate)) => {
                let saved = total_saved(clock.elapsed_days(start), rate);
                let builtin = builtin_goals();
                let countdown = merged_countdown(&builtin, &snapshot.custom_goals, saved, rate);
                Some(SavingsSection {
                    summary: SavingsSummary::compute(start, rate, clock, &config.savings.cost_model()),
                    active_goal: active_goal_progress(
                        &builtin,
                        &snapshot.custom_goals,
                        snapshot.active_goal_id.as_deref(),
                        saved,
                        rate,
                    ),
                    coming_soon: coming_soon(&countdown, config.dashboard.coming_soon)
                        .into_iter()
                        .cloned()
                        .collect(),
                    carousel: purchasable_carousel(
                        &purchasable_items(),
                        saved,
                        rate,
                        config.savings.carousel_visibility,
                    ),
                    countdown,
                })
            }
            _ => None,
        };

        let wellness =
            WellnessSummary::compute(&check_ins, config.wellness.missed_lookback_days, clock);
        let trend = Some(week_over_week(&check_ins, clock)).filter(|t| t.verdict.is_some());

        tracing::debug!(
            today = %clock.today(),
            has_sobriety = sobriety.is_some(),
            has_savings = savings.is_some(),
            check_ins = check_ins.len(),
            "built dashboard"
        );

        Self {
            today: clock.today(),
            sobriety,
            savings,
            wellness,
            trend,
        }
    }
}
