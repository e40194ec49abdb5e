use recovery_core::milestones::upcoming as first_unachieved;
use recovery_core::MilestoneTable;

use super::{missing_start_date, print_json, SnapshotArgs};

pub fn run(input: SnapshotArgs, upcoming: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = input.load()?;
    let start = loaded.snapshot.profile.start_date.ok_or_else(missing_start_date)?;
    let derived = MilestoneTable::new().milestones(start, &loaded.clock);

    match upcoming {
        Some(n) => print_json(&first_unachieved(&derived, n)),
        None => print_json(&derived),
    }
}
