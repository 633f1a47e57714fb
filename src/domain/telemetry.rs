// Telemetry domain models: metrics, time series, query windows
use chrono::{DateTime, Duration, Local};
use serde::Serialize;

/// Measured quantities exposed by the raw-data endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Temp,
    XAcc,
    XVel,
    ZAcc,
    ZVel,
}

pub const ALL_METRICS: [Metric; 5] = [
    Metric::Temp,
    Metric::XAcc,
    Metric::XVel,
    Metric::ZAcc,
    Metric::ZVel,
];

impl Metric {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "temp" => Some(Self::Temp),
            "x-acc" => Some(Self::XAcc),
            "x-vel" => Some(Self::XVel),
            "z-acc" => Some(Self::ZAcc),
            "z-vel" => Some(Self::ZVel),
            _ => None,
        }
    }

    /// Field name inside a raw-data reading, also the dropdown value.
    pub fn key(self) -> &'static str {
        match self {
            Self::Temp => "temp",
            Self::XAcc => "x-acc",
            Self::XVel => "x-vel",
            Self::ZAcc => "z-acc",
            Self::ZVel => "z-vel",
        }
    }

    /// First-letter-uppercased key, used for the chart and y-axis titles.
    pub fn capitalized(self) -> &'static str {
        match self {
            Self::Temp => "Temp",
            Self::XAcc => "X-acc",
            Self::XVel => "X-vel",
            Self::ZAcc => "Z-acc",
            Self::ZVel => "Z-vel",
        }
    }

    /// Text shown in the chart-type dropdown.
    pub fn menu_label(self) -> &'static str {
        match self {
            Self::Temp => "Temperature vs Time",
            Self::XAcc => "X-acc vs Time",
            Self::XVel => "X-vel vs Time",
            Self::ZAcc => "Z-acc vs Time",
            Self::ZVel => "Z-vel vs Time",
        }
    }
}

/// One metric's time series, index-aligned pairwise: `values[i]` belongs to
/// `timestamps[i]`. A reading without the requested metric contributes a
/// `None` slot so alignment survives partially populated data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetricSeries {
    pub timestamps: Vec<String>,
    pub values: Vec<Option<f64>>,
}

impl MetricSeries {
    pub fn push_reading(&mut self, timestamp: String, value: Option<f64>) {
        self.timestamps.push(timestamp);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

/// Trailing query window, recomputed at every refresh and never persisted.
///
/// The raw-data endpoint takes whole-day `start_date`/`end_date` values, so
/// the nominal 24-hour window is truncated to calendar-day granularity on
/// the wire. That imprecision is inherited from the upstream query contract
/// and kept as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryWindow {
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
}

impl QueryWindow {
    /// The 24 hours ending at `now`.
    pub fn trailing_day(now: DateTime<Local>) -> Self {
        Self {
            start: now - Duration::hours(24),
            end: now,
        }
    }

    pub fn start_date(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_date(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn metric_keys_round_trip() {
        for metric in ALL_METRICS {
            assert_eq!(Metric::parse(metric.key()), Some(metric));
        }
        assert_eq!(Metric::parse("humidity"), None);
    }

    #[test]
    fn metric_titles_match_dropdown_keys() {
        assert_eq!(Metric::Temp.capitalized(), "Temp");
        assert_eq!(Metric::XAcc.capitalized(), "X-acc");
        assert_eq!(Metric::ZVel.capitalized(), "Z-vel");
        assert_eq!(Metric::Temp.menu_label(), "Temperature vs Time");
    }

    #[test]
    fn push_reading_keeps_sequences_aligned() {
        let mut series = MetricSeries::default();
        series.push_reading("2026-08-06 10:00:00".to_string(), Some(61.2));
        series.push_reading("2026-08-06 10:05:00".to_string(), None);

        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps.len(), series.values.len());
        assert_eq!(series.values[1], None);
    }

    #[test]
    fn trailing_day_spans_twenty_four_hours() {
        let now = Local.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();
        let window = QueryWindow::trailing_day(now);

        assert_eq!((window.end - window.start).num_hours(), 24);
        assert_eq!(window.start_date(), "2026-08-06");
        assert_eq!(window.end_date(), "2026-08-07");
    }

    #[test]
    fn window_dates_drop_time_of_day() {
        let now = Local.with_ymd_and_hms(2026, 8, 7, 0, 10, 0).unwrap();
        let window = QueryWindow::trailing_day(now);

        // Ten minutes past midnight still queries the two whole days.
        assert_eq!(window.start_date(), "2026-08-06");
        assert_eq!(window.end_date(), "2026-08-07");
    }
}
