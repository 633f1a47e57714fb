// CBM raw-data endpoint client
use crate::application::sensor_data_repository::SensorDataRepository;
use crate::domain::compressor::CompressorId;
use crate::domain::telemetry::{Metric, MetricSeries, QueryWindow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;

/// Faults talking to the raw-data endpoint. Shape problems inside an
/// otherwise valid response are not faults; they degrade to an empty
/// series in `extract_metric_series`.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to reach the raw-data endpoint")]
    Transport(#[source] reqwest::Error),
    #[error("raw-data endpoint returned status {status}")]
    Status { status: reqwest::StatusCode },
    #[error("failed to decode the raw-data response")]
    Decode(#[source] reqwest::Error),
}

/// Raw-data response body, keyed by compressor id.
pub type RawDataResponse = HashMap<String, CompressorRecord>;

#[derive(Debug, Default, Deserialize)]
pub struct CompressorRecord {
    #[serde(default)]
    pub sensors: HashMap<String, SensorRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SensorRecord {
    #[serde(default)]
    pub data: Vec<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub struct CbmDataClient {
    base_url: String,
    client: reqwest::Client,
}

impl CbmDataClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn build_rawdata_url(
        &self,
        compressor: CompressorId,
        sensor_id: &str,
        window: &QueryWindow,
    ) -> String {
        format!(
            "{}/cbmdata/rawdata?compressor_ids={}&sensor_ids={}&start_date={}&end_date={}",
            self.base_url,
            urlencoding::encode(compressor.wire_value()),
            urlencoding::encode(sensor_id),
            urlencoding::encode(&window.start_date()),
            urlencoding::encode(&window.end_date()),
        )
    }

    async fn fetch_raw_data(&self, url: &str) -> Result<RawDataResponse, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(FetchError::Transport)?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status(),
            });
        }

        response
            .json::<RawDataResponse>()
            .await
            .map_err(FetchError::Decode)
    }
}

#[async_trait]
impl SensorDataRepository for CbmDataClient {
    async fn fetch_metric_series(
        &self,
        compressor: CompressorId,
        sensor_id: &str,
        window: &QueryWindow,
        metric: Metric,
    ) -> anyhow::Result<MetricSeries> {
        let url = self.build_rawdata_url(compressor, sensor_id, window);
        tracing::debug!("Fetching raw data: {}", url);

        let body = self.fetch_raw_data(&url).await?;
        Ok(extract_metric_series(&body, compressor, sensor_id, metric))
    }
}

/// Pull one metric's series out of a parsed raw-data body.
///
/// A missing compressor entry, `sensors` key, sensor entry, or `data` list
/// yields an empty series. A reading without the requested metric key (or
/// with a non-numeric value) contributes a `None` slot, never a skipped
/// entry, so timestamps and values stay index-aligned.
pub fn extract_metric_series(
    body: &RawDataResponse,
    compressor: CompressorId,
    sensor_id: &str,
    metric: Metric,
) -> MetricSeries {
    let mut series = MetricSeries::default();

    let Some(record) = body.get(compressor.wire_value()) else {
        return series;
    };
    let Some(sensor) = record.sensors.get(sensor_id) else {
        return series;
    };

    for reading in &sensor.data {
        let timestamp = reading
            .get("timestamp")
            .and_then(|value| value.as_str())
            .unwrap_or_default()
            .to_string();
        let value = reading.get(metric.key()).and_then(|value| value.as_f64());
        series.push_reading(timestamp, value);
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn parse_body(body: serde_json::Value) -> RawDataResponse {
        serde_json::from_value(body).unwrap()
    }

    fn sample_window() -> QueryWindow {
        let now = chrono::Local.with_ymd_and_hms(2026, 8, 7, 9, 30, 0).unwrap();
        QueryWindow::trailing_day(now)
    }

    #[test]
    fn builds_rawdata_query_url() {
        let client = CbmDataClient::new("http://cbm.local:5000/".to_string());
        let url = client.build_rawdata_url(CompressorId::C200C, "12", &sample_window());

        assert_eq!(
            url,
            "http://cbm.local:5000/cbmdata/rawdata?compressor_ids=3&sensor_ids=12\
             &start_date=2026-08-06&end_date=2026-08-07"
        );
    }

    #[test]
    fn extracts_aligned_series_from_full_response() {
        let body = parse_body(json!({
            "1": {
                "sensors": {
                    "0": {
                        "data": [
                            { "timestamp": "2026-08-06 10:00:00", "temp": 61.2, "x-acc": 0.4 },
                            { "timestamp": "2026-08-06 10:05:00", "temp": 61.7, "x-acc": 0.5 }
                        ]
                    }
                }
            }
        }));

        let series = extract_metric_series(&body, CompressorId::C200A, "0", Metric::Temp);

        assert_eq!(series.timestamps, ["2026-08-06 10:00:00", "2026-08-06 10:05:00"]);
        assert_eq!(series.values, [Some(61.2), Some(61.7)]);
    }

    #[test]
    fn missing_metric_key_becomes_null_slot() {
        let body = parse_body(json!({
            "1": {
                "sensors": {
                    "0": {
                        "data": [
                            { "timestamp": "2026-08-06 10:00:00", "temp": 61.2 },
                            { "timestamp": "2026-08-06 10:05:00" },
                            { "timestamp": "2026-08-06 10:10:00", "temp": "bad" },
                            { "timestamp": "2026-08-06 10:15:00", "temp": 62.0 }
                        ]
                    }
                }
            }
        }));

        let series = extract_metric_series(&body, CompressorId::C200A, "0", Metric::Temp);

        assert_eq!(series.len(), 4);
        assert_eq!(series.timestamps.len(), series.values.len());
        assert_eq!(series.values, [Some(61.2), None, None, Some(62.0)]);
    }

    #[test]
    fn absent_compressor_yields_empty_series() {
        let body = parse_body(json!({
            "2": { "sensors": {} }
        }));

        let series = extract_metric_series(&body, CompressorId::C200A, "0", Metric::Temp);

        assert!(series.is_empty());
        assert!(series.values.is_empty());
    }

    #[test]
    fn absent_sensors_key_yields_empty_series() {
        let body = parse_body(json!({ "1": {} }));

        let series = extract_metric_series(&body, CompressorId::C200A, "0", Metric::Temp);

        assert!(series.is_empty());
    }

    #[test]
    fn absent_sensor_or_data_yields_empty_series() {
        let body = parse_body(json!({
            "1": { "sensors": { "3": {} } }
        }));

        assert!(extract_metric_series(&body, CompressorId::C200A, "0", Metric::Temp).is_empty());
        assert!(extract_metric_series(&body, CompressorId::C200A, "3", Metric::Temp).is_empty());
    }

    #[test]
    fn reading_without_timestamp_keeps_alignment() {
        let body = parse_body(json!({
            "1": {
                "sensors": {
                    "0": {
                        "data": [
                            { "temp": 61.2 },
                            { "timestamp": "2026-08-06 10:05:00", "temp": 61.7 }
                        ]
                    }
                }
            }
        }));

        let series = extract_metric_series(&body, CompressorId::C200A, "0", Metric::Temp);

        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps[0], "");
        assert_eq!(series.values[0], Some(61.2));
    }
}
