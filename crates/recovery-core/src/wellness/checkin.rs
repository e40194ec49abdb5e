//! Daily check-in records and the wellness metrics read from them.
//!
//! Stored check-ins went through a field rename (`anxietyLevel` became
//! `anxiety`, `sleepQuality` became `sleep`), so older documents may carry
//! either name. [`StoredCheckIn`] accepts both and [`StoredCheckIn::normalize`]
//! resolves them once, at ingestion. Everything downstream only sees the
//! canonical [`CheckIn`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Morning check-in answers, as stored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMorning {
    #[serde(default)]
    pub mood: Option<f64>,
    #[serde(default)]
    pub craving: Option<f64>,
    #[serde(default)]
    pub anxiety: Option<f64>,
    #[serde(default)]
    pub anxiety_level: Option<f64>,
    #[serde(default)]
    pub sleep: Option<f64>,
    #[serde(default)]
    pub sleep_quality: Option<f64>,
}

/// Evening check-in answers, as stored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredEvening {
    #[serde(default)]
    pub overall_day: Option<f64>,
}

/// A check-in document exactly as persisted, legacy names included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCheckIn {
    pub date: NaiveDate,
    #[serde(default)]
    pub morning_data: Option<StoredMorning>,
    #[serde(default)]
    pub evening_data: Option<StoredEvening>,
}

impl StoredCheckIn {
    /// Resolve legacy field names. The current name wins when both are set.
    pub fn normalize(self) -> CheckIn {
        let morning = self.morning_data.unwrap_or_default();
        let evening = self.evening_data.unwrap_or_default();
        CheckIn {
            date: self.date,
            mood: morning.mood,
            craving: morning.craving,
            anxiety: morning.anxiety.or(morning.anxiety_level),
            sleep: morning.sleep.or(morning.sleep_quality),
            overall_day: evening.overall_day,
        }
    }
}

/// A normalized check-in. Each metric is independently optional.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub date: NaiveDate,
    pub mood: Option<f64>,
    pub craving: Option<f64>,
    pub anxiety: Option<f64>,
    pub sleep: Option<f64>,
    pub overall_day: Option<f64>,
}

impl CheckIn {
    /// A check-in on `date` with nothing reported yet.
    pub fn on(date: NaiveDate) -> Self {
        Self {
            date,
            mood: None,
            craving: None,
            anxiety: None,
            sleep: None,
            overall_day: None,
        }
    }

    pub fn with(mut self, metric: Metric, value: f64) -> Self {
        *self.slot_mut(metric) = Some(value);
        self
    }

    /// The reported value for `metric`, if any.
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Mood => self.mood,
            Metric::Craving => self.craving,
            Metric::Anxiety => self.anxiety,
            Metric::Sleep => self.sleep,
            Metric::OverallDay => self.overall_day,
        }
    }

    fn slot_mut(&mut self, metric: Metric) -> &mut Option<f64> {
        match metric {
            Metric::Mood => &mut self.mood,
            Metric::Craving => &mut self.craving,
            Metric::Anxiety => &mut self.anxiety,
            Metric::Sleep => &mut self.sleep,
            Metric::OverallDay => &mut self.overall_day,
        }
    }
}

/// Which way a metric moves when things get better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetterDirection {
    Higher,
    Lower,
}

/// A wellness score tracked through check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Mood,
    Craving,
    Anxiety,
    Sleep,
    OverallDay,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Mood,
        Metric::Craving,
        Metric::Anxiety,
        Metric::Sleep,
        Metric::OverallDay,
    ];

    pub fn better_direction(self) -> BetterDirection {
        match self {
            Metric::Craving | Metric::Anxiety => BetterDirection::Lower,
            Metric::Mood | Metric::Sleep | Metric::OverallDay => BetterDirection::Higher,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Metric::Mood => "mood",
            Metric::Craving => "craving",
            Metric::Anxiety => "anxiety",
            Metric::Sleep => "sleep",
            Metric::OverallDay => "overallDay",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Metric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mood" => Ok(Metric::Mood),
            "craving" | "cravings" => Ok(Metric::Craving),
            "anxiety" => Ok(Metric::Anxiety),
            "sleep" => Ok(Metric::Sleep),
            "overallDay" | "overall-day" | "overall_day" => Ok(Metric::OverallDay),
            other => Err(format!("unknown metric: {other}")),
        }
    }
}
