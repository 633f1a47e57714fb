// HTTP request handlers
use crate::application::controller::{DashboardState, UiEvent};
use crate::domain::chart::{ChartDisplayConfig, ChartFigure};
use crate::domain::compressor::{ALL_COMPRESSORS, SensorOption};
use crate::domain::telemetry::ALL_METRICS;
use crate::presentation::app_state::AppState;
use crate::presentation::page::DASHBOARD_HTML;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Everything the page renders: current selections, the dropdown menus,
/// and the chart.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub metric: String,
    pub compressor: String,
    pub sensor: Option<String>,
    pub metric_options: Vec<MenuOption>,
    pub compressor_options: Vec<MenuOption>,
    pub sensor_options: Vec<SensorOption>,
    pub figure: ChartFigure,
    pub display: ChartDisplayConfig,
    pub data_stale: bool,
    pub refresh_period_secs: u64,
}

#[derive(Debug, Serialize)]
pub struct MenuOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub event: String,
    #[serde(default)]
    pub value: String,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// The dashboard page itself
pub async fn dashboard_page() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Current dashboard view
pub async fn get_view(State(state): State<Arc<AppState>>) -> Json<DashboardView> {
    let dashboard = state.dashboard.read().await;
    Json(build_view(&dashboard, state.refresh_period_secs))
}

/// Apply one UI event and return the updated view
pub async fn post_event(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EventRequest>,
) -> Result<Json<DashboardView>, StatusCode> {
    let event = match request.event.as_str() {
        "metric" => UiEvent::MetricChanged(request.value),
        "compressor" => UiEvent::CompressorChanged(request.value),
        "sensor" => UiEvent::SensorChanged(request.value),
        "tick" => UiEvent::TimerTick,
        _ => return Err(StatusCode::BAD_REQUEST),
    };

    let mut dashboard = state.dashboard.write().await;
    state.controller.handle_event(&mut dashboard, event).await;

    Ok(Json(build_view(&dashboard, state.refresh_period_secs)))
}

fn build_view(state: &DashboardState, refresh_period_secs: u64) -> DashboardView {
    let metric_options = ALL_METRICS
        .iter()
        .map(|metric| MenuOption {
            label: metric.menu_label().to_string(),
            value: metric.key().to_string(),
        })
        .collect();

    let compressor_options = ALL_COMPRESSORS
        .iter()
        .map(|compressor| MenuOption {
            label: compressor.label().to_string(),
            value: compressor.wire_value().to_string(),
        })
        .collect();

    DashboardView {
        metric: state.metric.key().to_string(),
        compressor: state.compressor.wire_value().to_string(),
        sensor: state.sensor.clone(),
        metric_options,
        compressor_options,
        sensor_options: state.sensor_options.clone(),
        figure: state.figure.clone(),
        display: state.display,
        data_stale: state.data_stale,
        refresh_period_secs,
    }
}
