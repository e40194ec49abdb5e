use recovery_core::WellnessSummary;

use super::{print_json, SnapshotArgs};

pub fn run(input: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = input.load()?;
    let check_ins = loaded.snapshot.normalized_check_ins();
    let summary = WellnessSummary::compute(
        &check_ins,
        loaded.config.wellness.missed_lookback_days,
        &loaded.clock,
    );
    print_json(&summary)
}
