use recovery_core::Dashboard;

use super::{print_json, SnapshotArgs};

pub fn run(input: SnapshotArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = input.load()?;
    let dashboard = Dashboard::build(&loaded.snapshot, &loaded.config, &loaded.clock);
    print_json(&dashboard)
}
