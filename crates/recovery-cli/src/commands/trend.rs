use recovery_core::wellness::week_over_week;

use super::{print_json, SnapshotArgs};

pub fn run(input: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = input.load()?;
    let check_ins = loaded.snapshot.normalized_check_ins();
    let trend = week_over_week(&check_ins, &loaded.clock);
    if trend.verdict.is_none() {
        tracing::info!("not enough check-ins to compare this week with last week");
    }
    print_json(&trend)
}
