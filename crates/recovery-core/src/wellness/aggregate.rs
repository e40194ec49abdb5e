//! Averages and gap counts over check-in history.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::checkin::{CheckIn, Metric};
use crate::clock::Clock;

/// Default look-back for [`missed_count`].
pub const DEFAULT_LOOKBACK_DAYS: u32 = 31;

/// Mean of the values `extractor` yields, skipping check-ins where it yields
/// nothing. `None` when no check-in reports a value.
pub fn average_metric<F>(check_ins: &[CheckIn], extractor: F) -> Option<f64>
where
    F: Fn(&CheckIn) -> Option<f64>,
{
    let (sum, count) = check_ins
        .iter()
        .filter_map(extractor)
        .fold((0.0, 0u32), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / f64::from(count))
}

/// [`average_metric`] for one of the tracked metrics.
pub fn average_of(check_ins: &[CheckIn], metric: Metric) -> Option<f64> {
    average_metric(check_ins, |c| c.metric(metric))
}

/// Days within the last `lookback_days` (today included) on which no
/// check-in reported `metric`.
///
/// Several check-ins on one day satisfy it once; check-ins outside the
/// window are ignored, so the result is always in `0..=lookback_days`.
pub fn missed_count(check_ins: &[CheckIn], lookback_days: u32, metric: Metric, clock: &Clock) -> u32 {
    let window = clock.trailing_window(lookback_days);
    let covered: BTreeSet<_> = check_ins
        .iter()
        .filter(|c| window.contains(c.date) && c.metric(metric).is_some())
        .map(|c| c.date)
        .collect();
    let covered = u32::try_from(covered.len()).unwrap_or(u32::MAX);
    window.len_days().saturating_sub(covered)
}

/// Average and gap count for a single metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricSummary {
    pub metric: Metric,
    pub average: Option<f64>,
    pub reported: usize,
    pub missed_days: u32,
}

/// Wellness card contents for every tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessSummary {
    pub lookback_days: u32,
    pub total_check_ins: usize,
    pub metrics: Vec<MetricSummary>,
}

impl WellnessSummary {
    pub fn compute(check_ins: &[CheckIn], lookback_days: u32, clock: &Clock) -> Self {
        let metrics = Metric::ALL
            .iter()
            .map(|&metric| MetricSummary {
                metric,
                average: average_of(check_ins, metric),
                reported: check_ins.iter().filter(|c| c.metric(metric).is_some()).count(),
                missed_days: missed_count(check_ins, lookback_days, metric, clock),
            })
            .collect();
        Self {
            lookback_days,
            total_check_ins: check_ins.len(),
            metrics,
        }
    }

    pub fn metric(&self, metric: Metric) -> Option<&MetricSummary> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn averages_only_reported_values() {
        let check_ins = vec![
            CheckIn::on(date(2024, 3, 1)).with(Metric::Mood, 6.0),
            CheckIn::on(date(2024, 3, 2)).with(Metric::Craving, 2.0),
            CheckIn::on(date(2024, 3, 3)).with(Metric::Mood, 8.0),
        ];
        assert_eq!(average_of(&check_ins, Metric::Mood), Some(7.0));
        assert_eq!(average_of(&check_ins, Metric::Craving), Some(2.0));
    }

    #[test]
    fn unreported_metric_is_none_not_zero() {
        let check_ins = vec![CheckIn::on(date(2024, 3, 1)).with(Metric::Mood, 6.0)];
        assert_eq!(average_of(&check_ins, Metric::Sleep), None);
        assert_eq!(average_of(&[], Metric::Mood), None);
    }

    #[test]
    fn zero_scores_count_toward_the_average() {
        let check_ins = vec![
            CheckIn::on(date(2024, 3, 1)).with(Metric::Craving, 0.0),
            CheckIn::on(date(2024, 3, 2)).with(Metric::Craving, 4.0),
        ];
        assert_eq!(average_of(&check_ins, Metric::Craving), Some(2.0));
    }

    #[test]
    fn custom_extractor() {
        let check_ins = vec![
            CheckIn::on(date(2024, 3, 1)).with(Metric::Mood, 4.0).with(Metric::Sleep, 8.0),
            CheckIn::on(date(2024, 3, 2)).with(Metric::Mood, 6.0),
        ];
        let combined = average_metric(&check_ins, |c| Some(c.mood? + c.sleep?));
        assert_eq!(combined, Some(12.0));
    }

    #[test]
    fn no_check_ins_means_every_day_missed() {
        let clock = Clock::on(date(2024, 3, 31));
        assert_eq!(missed_count(&[], DEFAULT_LOOKBACK_DAYS, Metric::Mood, &clock), 31);
    }

    #[test]
    fn duplicates_and_out_of_window_days_are_ignored() {
        let clock = Clock::on(date(2024, 3, 31));
        let check_ins = vec![
            CheckIn::on(date(2024, 3, 31)).with(Metric::Mood, 5.0),
            CheckIn::on(date(2024, 3, 31)).with(Metric::Mood, 7.0),
            CheckIn::on(date(2024, 3, 1)).with(Metric::Mood, 7.0),
            CheckIn::on(date(2024, 2, 29)).with(Metric::Mood, 7.0),
            CheckIn::on(date(2024, 4, 1)).with(Metric::Mood, 7.0),
            CheckIn::on(date(2024, 3, 15)).with(Metric::Craving, 1.0),
        ];
        assert_eq!(missed_count(&check_ins, 31, Metric::Mood, &clock), 29);
        assert_eq!(missed_count(&check_ins, 31, Metric::Craving, &clock), 30);
    }

    #[test]
    fn fully_covered_window_misses_nothing() {
        let clock = Clock::on(date(2024, 3, 7));
        let check_ins: Vec<_> = (1..=7)
            .flat_map(|d| {
                vec![
                    CheckIn::on(date(2024, 3, d)).with(Metric::Sleep, 7.0),
                    CheckIn::on(date(2024, 3, d)).with(Metric::Sleep, 6.0),
                ]
            })
            .collect();
        assert_eq!(missed_count(&check_ins, 7, Metric::Sleep, &clock), 0);
    }

    #[test]
    fn summary_covers_every_metric() {
        let clock = Clock::on(date(2024, 3, 2));
        let check_ins = vec![
            CheckIn::on(date(2024, 3, 1)).with(Metric::Mood, 6.0),
            CheckIn::on(date(2024, 3, 2)).with(Metric::Mood, 8.0),
        ];
        let summary = WellnessSummary::compute(&check_ins, 7, &clock);
        assert_eq!(summary.metrics.len(), Metric::ALL.len());
        let mood = summary.metric(Metric::Mood).unwrap();
        assert_eq!(mood.average, Some(7.0));
        assert_eq!(mood.reported, 2);
        assert_eq!(mood.missed_days, 5);
        assert_eq!(summary.metric(Metric::Anxiety).unwrap().average, None);
    }
}
