//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a snapshot written to a temp dir.

use std::path::{Path, PathBuf};
use std::process::Command;

use indoc::indoc;
use tempfile::TempDir;

const SNAPSHOT: &str = indoc! {r#"
    {
        "profile": { "startDate": "2024-01-01", "dailyCost": 20 },
        "customGoals": [
            { "id": "guitar", "name": "Guitar", "icon": "🎸", "amount": 300, "source": "custom" }
        ],
        "activeGoalId": "guitar",
        "checkIns": [
            { "date": "2024-01-02", "morningData": { "mood": 5, "craving": 6 } },
            { "date": "2024-01-10", "morningData": { "mood": 7, "craving": 3, "anxietyLevel": 4 } }
        ]
    }
"#};

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(snapshot: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("snapshot.json"), snapshot).unwrap();
        Self { dir }
    }

    fn snapshot(&self) -> PathBuf {
        self.dir.path().join("snapshot.json")
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    /// Run a CLI command and return (exit code, stdout, stderr).
    fn run(&self, args: &[&str]) -> (i32, String, String) {
        run_cli(self.dir.path(), args)
    }

    /// Run a snapshot command pinned to 2024-01-11 with a private config file.
    fn run_on_snapshot(&self, command: &str) -> serde_json::Value {
        let snapshot = self.snapshot();
        let config = self.config();
        let (code, stdout, stderr) = self.run(&[
            command,
            "--snapshot",
            snapshot.to_str().unwrap(),
            "--today",
            "2024-01-11",
            "--config",
            config.to_str().unwrap(),
        ]);
        assert_eq!(code, 0, "{command} failed: {stderr}");
        serde_json::from_str(&stdout).expect("command output is JSON")
    }
}

fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_recovery-cli"))
        .args(args)
        .env("HOME", home)
        .env_remove("RECOVERY_ENV")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

#[test]
fn test_dashboard() {
    let fixture = Fixture::new(SNAPSHOT);
    let dashboard = fixture.run_on_snapshot("dashboard");
    assert_eq!(dashboard["today"], "2024-01-11");
    assert_eq!(dashboard["sobriety"]["elapsedDays"], 10);
    assert_eq!(dashboard["savings"]["summary"]["totalSaved"], 200.0);
    assert_eq!(dashboard["savings"]["activeGoal"]["goal"]["id"], "guitar");
    assert_eq!(dashboard["savings"]["activeGoal"]["daysAway"], 5);
    assert_eq!(dashboard["trend"]["verdict"]["isImproving"], true);
}

#[test]
fn test_milestones_upcoming() {
    let fixture = Fixture::new(SNAPSHOT);
    let snapshot = fixture.snapshot();
    let (code, stdout, stderr) = fixture.run(&[
        "milestones",
        "--snapshot",
        snapshot.to_str().unwrap(),
        "--today",
        "2024-01-11",
        "--upcoming",
        "2",
    ]);
    assert_eq!(code, 0, "milestones failed: {stderr}");
    let upcoming: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let thresholds: Vec<_> = upcoming
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["thresholdDays"].as_u64().unwrap())
        .collect();
    assert_eq!(thresholds, vec![14, 30]);
}

#[test]
fn test_savings() {
    let fixture = Fixture::new(SNAPSHOT);
    let savings = fixture.run_on_snapshot("savings");
    assert_eq!(savings["totalSaved"], 200.0);
    assert_eq!(savings["counterfactual"]["interest"], 68.0);
    assert_eq!(savings["counterfactual"]["healthCost"], 40.0);
    assert_eq!(savings["counterfactual"]["total"], 308.0);
    assert_eq!(savings["netGain"], 508.0);
}

#[test]
fn test_goals() {
    let fixture = Fixture::new(SNAPSHOT);
    let goals = fixture.run_on_snapshot("goals");
    let countdown = goals["countdown"].as_array().unwrap();
    let days: Vec<_> = countdown.iter().map(|g| g["daysAway"].as_u64().unwrap()).collect();
    assert!(days.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(countdown[0]["goal"]["id"], "nice-dinner");
    assert_eq!(countdown[0]["unlocked"], true);
}

#[test]
fn test_wellness_and_trend() {
    let fixture = Fixture::new(SNAPSHOT);
    let wellness = fixture.run_on_snapshot("wellness");
    assert_eq!(wellness["totalCheckIns"], 2);
    let anxiety = wellness["metrics"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["metric"] == "anxiety")
        .unwrap();
    assert_eq!(anxiety["average"], 4.0);

    let trend = fixture.run_on_snapshot("trend");
    let craving = trend["metrics"]
        .as_array()
        .unwrap()
        .iter()
        .find(|m| m["metric"] == "craving")
        .unwrap();
    assert_eq!(craving["delta"], 3.0);
}

#[test]
fn test_savings_without_daily_cost_fails() {
    let fixture = Fixture::new(r#"{"profile":{"startDate":"2024-01-01","dailyCost":0}}"#);
    let snapshot = fixture.snapshot();
    let (code, _, stderr) = fixture.run(&["savings", "--snapshot", snapshot.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("daily cost"));
}

#[test]
fn test_invalid_today_is_rejected() {
    let fixture = Fixture::new(SNAPSHOT);
    let snapshot = fixture.snapshot();
    let (code, _, _) = fixture.run(&[
        "dashboard",
        "--snapshot",
        snapshot.to_str().unwrap(),
        "--today",
        "11/01/2024",
    ]);
    assert_ne!(code, 0);
}

#[test]
fn test_config_set_get_reset() {
    let fixture = Fixture::new(SNAPSHOT);
    let config = fixture.config();
    let file = config.to_str().unwrap();

    let (code, stdout, _) = fixture.run(&["config", "get", "wellness.missed_lookback_days", "--file", file]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "31");

    let (code, _, stderr) = fixture.run(&["config", "set", "savings.interest_surcharge", "0.5", "--file", file]);
    assert_eq!(code, 0, "config set failed: {stderr}");

    let savings = fixture.run_on_snapshot("savings");
    assert_eq!(savings["counterfactual"]["interest"], 100.0);

    let (code, _, _) = fixture.run(&["config", "set", "savings.nope", "1", "--file", file]);
    assert_ne!(code, 0);

    let (code, _, _) = fixture.run(&["config", "reset", "--file", file]);
    assert_eq!(code, 0);
    let (_, stdout, _) = fixture.run(&["config", "get", "savings.interest_surcharge", "--file", file]);
    assert_eq!(stdout.trim(), "0.34");
}
