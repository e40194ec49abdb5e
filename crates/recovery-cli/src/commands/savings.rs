use recovery_core::SavingsSummary;

use super::{missing_daily_cost, missing_start_date, print_json, SnapshotArgs};

pub fn run(input: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = input.load()?;
    let profile = &loaded.snapshot.profile;
    let start = profile.start_date.ok_or_else(missing_start_date)?;
    let rate = profile.daily_rate().ok_or_else(missing_daily_cost)?;

    let summary = SavingsSummary::compute(
        start,
        rate,
        &loaded.clock,
        &loaded.config.savings.cost_model(),
    );
    print_json(&summary)
}
