use recovery_core::catalog::{builtin_goals, purchasable_items};
use recovery_core::goals::{active_goal_progress, merged_countdown, purchasable_carousel};
use recovery_core::savings::total_saved;
use serde::Serialize;

use super::{missing_daily_cost, missing_start_date, print_json, SnapshotArgs};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalsOutput {
    total_saved: f64,
    active_goal: Option<recovery_core::GoalCountdown>,
    countdown: Vec<recovery_core::GoalCountdown>,
    carousel: Vec<recovery_core::PurchaseCountdown>,
}

pub fn run(input: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = input.load()?;
    let snapshot = &loaded.snapshot;
    let start = snapshot.profile.start_date.ok_or_else(missing_start_date)?;
    let rate = snapshot.profile.daily_rate().ok_or_else(missing_daily_cost)?;

    let saved = total_saved(loaded.clock.elapsed_days(start), rate);
    let builtin = builtin_goals();
    let output = GoalsOutput {
        total_saved: saved,
        active_goal: active_goal_progress(
            &builtin,
            &snapshot.custom_goals,
            snapshot.active_goal_id.as_deref(),
            saved,
            rate,
        ),
        countdown: merged_countdown(&builtin, &snapshot.custom_goals, saved, rate),
        carousel: purchasable_carousel(
            &purchasable_items(),
            saved,
            rate,
            loaded.config.savings.carousel_visibility,
        ),
    };
    print_json(&output)
}
