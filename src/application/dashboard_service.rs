// Dashboard service - Use case for rebuilding the chart
use crate::application::sensor_data_repository::SensorDataRepository;
use crate::domain::chart::{ChartDisplayConfig, ChartFigure};
use crate::domain::compressor::CompressorId;
use crate::domain::telemetry::{Metric, QueryWindow};
use chrono::Local;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn SensorDataRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn SensorDataRepository>) -> Self {
        Self { repository }
    }

    /// Fetch a fresh trailing-day window for the current selections and
    /// assemble the replacement figure. The window is recomputed here, at
    /// the moment of the refresh, never reused.
    pub async fn refresh_chart(
        &self,
        metric: Metric,
        compressor: CompressorId,
        sensor_id: &str,
    ) -> anyhow::Result<(ChartFigure, ChartDisplayConfig)> {
        let window = QueryWindow::trailing_day(Local::now());

        tracing::debug!(
            "Refreshing chart: metric={}, compressor={}, sensor={}, window={}..{}",
            metric.key(),
            compressor.wire_value(),
            sensor_id,
            window.start_date(),
            window.end_date()
        );

        let series = self
            .repository
            .fetch_metric_series(compressor, sensor_id, &window, metric)
            .await?;

        Ok((ChartFigure::line(metric, series), ChartDisplayConfig::default()))
    }
}
