//! Week-over-week wellness comparison.
//!
//! A delta is polarity-adjusted: positive always means "improved", whichever
//! way the metric's scale runs.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::checkin::{BetterDirection, CheckIn, Metric};
use crate::clock::{Clock, DateWindow};

/// Mean of `metric` over check-ins dated inside `window`. `None` when no
/// check-in in the window reports it.
pub fn window_average(check_ins: &[CheckIn], window: DateWindow, metric: Metric) -> Option<f64> {
    super::aggregate::average_metric(check_ins, |c| {
        window.contains(c.date).then(|| c.metric(metric)).flatten()
    })
}

/// Polarity-adjusted change from `last_week` to `this_week`.
pub fn delta(this_week: Option<f64>, last_week: Option<f64>, direction: BetterDirection) -> Option<f64> {
    let (this_week, last_week) = (this_week?, last_week?);
    Some(match direction {
        BetterDirection::Higher => this_week - last_week,
        BetterDirection::Lower => last_week - this_week,
    })
}

/// Overall verdict across metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendVerdict {
    pub improved_count: usize,
    pub total_measured: usize,
    pub is_improving: bool,
}

/// Count improvements among the measurable deltas.
///
/// Returns `None` when nothing could be measured; the trend card is then not
/// shown at all.
pub fn classify_trend<I>(deltas: I) -> Option<TrendVerdict>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let (improved_count, total_measured) = deltas
        .into_iter()
        .flatten()
        .fold((0usize, 0usize), |(improved, total), d| {
            (improved + usize::from(d > 0.0), total + 1)
        });
    if total_measured == 0 {
        return None;
    }
    Some(TrendVerdict {
        improved_count,
        total_measured,
        // improved >= total / 2, kept in integers
        is_improving: improved_count * 2 >= total_measured,
    })
}

/// One metric's week-over-week comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTrend {
    pub metric: Metric,
    pub direction: BetterDirection,
    pub this_week: Option<f64>,
    pub last_week: Option<f64>,
    pub delta: Option<f64>,
}

impl MetricTrend {
    pub fn improved(&self) -> bool {
        self.delta.is_some_and(|d| d > 0.0)
    }
}

/// This week against last week for every tracked metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTrend {
    pub this_week: DateWindow,
    pub last_week: DateWindow,
    pub metrics: Vec<MetricTrend>,
    pub verdict: Option<TrendVerdict>,
}

impl WeeklyTrend {
    pub fn metric(&self, metric: Metric) -> Option<&MetricTrend> {
        self.metrics.iter().find(|m| m.metric == metric)
    }
}

/// The seven days ending today and the seven days before them.
pub fn week_windows(clock: &Clock) -> (DateWindow, DateWindow) {
    let this_week = clock.trailing_window(7);
    let last_week = DateWindow::new(
        this_week
            .start
            .checked_sub_days(Days::new(7))
            .unwrap_or(NaiveDate::MIN),
        this_week.start,
    );
    (this_week, last_week)
}

/// Compare the current week with the previous one.
pub fn week_over_week(check_ins: &[CheckIn], clock: &Clock) -> WeeklyTrend {
    let (this_week, last_week) = week_windows(clock);
    let metrics: Vec<MetricTrend> = Metric::ALL
        .iter()
        .map(|&metric| {
            let current = window_average(check_ins, this_week, metric);
            let previous = window_average(check_ins, last_week, metric);
            let direction = metric.better_direction();
            MetricTrend {
                metric,
                direction,
                this_week: current,
                last_week: previous,
                delta: delta(current, previous, direction),
            }
        })
        .collect();
    let verdict = classify_trend(metrics.iter().map(|m| m.delta));

    WeeklyTrend {
        this_week,
        last_week,
        metrics,
        verdict,
    }
}
