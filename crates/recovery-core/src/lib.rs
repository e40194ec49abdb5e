//! # Recovery Core Library
//!
//! This library turns a handful of stored facts about a person's recovery (a
//! sobriety date, the money they used to spend each day, savings goals and
//! daily wellness check-ins) into the numbers shown on their dashboard.
//!
//! Every computation is a pure function of its inputs and an explicit
//! [`Clock`]. Nothing here reads the system time, touches storage or keeps
//! state between calls, so identical inputs always produce identical output.
//!
//! ## Architecture
//!
//! - **Clock**: calendar-day arithmetic on local dates
//! - **Milestones**: named day thresholds with achievement and countdown state
//! - **Savings**: money saved over arbitrary windows and the reality-check model
//! - **Goals**: goal progress, merged countdowns and the purchasable carousel
//! - **Wellness**: check-in averages, missed days and week-over-week trends
//! - **Dashboard**: composes all of the above into one view-model
//!
//! ## Key Components
//!
//! - [`Clock`]: the caller's "today"
//! - [`MilestoneTable`]: milestone catalog evaluation
//! - [`SavingsSummary`]: savings card contents
//! - [`WeeklyTrend`]: week-over-week comparison
//! - [`Dashboard`]: the full view-model
//! - [`EngineConfig`]: tunable constants

pub mod catalog;
pub mod clock;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod goals;
pub mod milestones;
pub mod model;
pub mod savings;
pub mod wellness;

pub use clock::{parse_calendar_date, Clock, DateWindow};
pub use config::EngineConfig;
pub use dashboard::{Dashboard, RecoverySnapshot, SavingsSection, SobrietySection};
pub use error::{ConfigError, CoreError, ValidationError};
pub use goals::{GoalCountdown, GoalProgress, GoalSource, PurchasableItem, PurchaseCountdown, SavingsGoal};
pub use milestones::{DerivedMilestone, Milestone, MilestoneTable};
pub use model::{DailyCost, Money, SobrietyProfile};
pub use savings::{CostModel, CounterfactualCost, SavingsSummary};
pub use wellness::{BetterDirection, CheckIn, Metric, TrendVerdict, WeeklyTrend, WellnessSummary};
