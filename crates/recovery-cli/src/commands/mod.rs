pub mod config;
pub mod dashboard;
pub mod goals;
pub mod milestones;
pub mod savings;
pub mod trend;
pub mod wellness;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::Args;
use recovery_core::{parse_calendar_date, Clock, EngineConfig, RecoverySnapshot};

/// Inputs shared by every computation command.
#[derive(Args)]
pub struct SnapshotArgs {
    /// Path to a JSON snapshot of the user's stored records
    #[arg(long)]
    pub snapshot: PathBuf,
    /// Local date to compute for (YYYY-MM-DD); defaults to today
    #[arg(long, value_parser = parse_today)]
    pub today: Option<NaiveDate>,
    /// Engine config file; defaults to ~/.config/recovery/config.toml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn parse_today(value: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(value).map_err(|e| e.to_string())
}

/// Everything a command needs to run the engine once.
pub struct Loaded {
    pub snapshot: RecoverySnapshot,
    pub clock: Clock,
    pub config: EngineConfig,
}

impl SnapshotArgs {
    pub fn load(&self) -> Result<Loaded, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(&self.snapshot)
            .map_err(|e| format!("cannot read snapshot {}: {e}", self.snapshot.display()))?;
        let snapshot = RecoverySnapshot::from_json(&content)?;
        let clock = match self.today {
            Some(today) => Clock::on(today),
            None => Clock::from_instant(&Local::now()),
        };
        let config = match &self.config {
            Some(path) => EngineConfig::load_from(path)?,
            None => EngineConfig::load_or_default(),
        };
        tracing::debug!(
            snapshot = %self.snapshot.display(),
            today = %clock.today(),
            check_ins = snapshot.check_ins.len(),
            "loaded snapshot"
        );
        Ok(Loaded {
            snapshot,
            clock,
            config,
        })
    }
}

/// Print a view-model as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Error for commands that need a sobriety date.
pub fn missing_start_date() -> Box<dyn std::error::Error> {
    "snapshot has no sobriety start date".into()
}

/// Error for commands that need a positive daily cost.
pub fn missing_daily_cost() -> Box<dyn std::error::Error> {
    "savings are unavailable: daily cost must be greater than zero".into()
}
