// Repository trait for the remote sensor-data source
use crate::domain::compressor::CompressorId;
use crate::domain::telemetry::{Metric, MetricSeries, QueryWindow};
use async_trait::async_trait;

#[async_trait]
pub trait SensorDataRepository: Send + Sync {
    /// Fetch one metric's time series for a sensor over the given window.
    ///
    /// A response that lacks the expected shape degrades to an empty series;
    /// transport, status, and decode faults surface as errors.
    async fn fetch_metric_series(
        &self,
        compressor: CompressorId,
        sensor_id: &str,
        window: &QueryWindow,
        metric: Metric,
    ) -> anyhow::Result<MetricSeries>;
}
