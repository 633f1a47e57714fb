// Chart model for the dashboard's single line plot
use super::telemetry::{Metric, MetricSeries};
use serde::Serialize;

/// Everything the page needs to draw the line chart. Rebuilt wholesale on
/// every refresh; nothing is patched incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure {
    pub title: String,
    pub title_x: f64,
    pub title_y: f64,
    pub x_axis_title: String,
    pub y_axis_title: String,
    pub series: MetricSeries,
}

impl ChartFigure {
    pub fn line(metric: Metric, series: MetricSeries) -> Self {
        Self {
            title: format!("{} vs Time", metric.capitalized()),
            title_x: 0.5,
            title_y: 0.9,
            x_axis_title: "Timestamp".to_string(),
            y_axis_title: metric.capitalized().to_string(),
            series,
        }
    }

    pub fn empty(metric: Metric) -> Self {
        Self::line(metric, MetricSeries::default())
    }
}

/// Static chart display options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartDisplayConfig {
    pub display_mode_bar: bool,
}

impl Default for ChartDisplayConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: true,
        }
    }
}
