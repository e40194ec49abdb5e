//! Wellness module for Recovery
//!
//! Check-in ingestion, per-metric averages and gap counts, and the
//! week-over-week trend comparison. Averages here skip unreported metrics
//! rather than treating them as zero.

mod aggregate;
mod checkin;
mod trend;

pub use aggregate::{
    average_metric, average_of, missed_count, MetricSummary, WellnessSummary,
    DEFAULT_LOOKBACK_DAYS,
};

pub use checkin::{
    BetterDirection, CheckIn, Metric, StoredCheckIn, StoredEvening, StoredMorning,
};

pub use trend::{
    classify_trend, delta, week_over_week, week_windows, window_average, MetricTrend,
    TrendVerdict, WeeklyTrend,
};
