// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::application::controller::{DashboardController, DashboardState, UiEvent};
use crate::application::dashboard_service::DashboardService;
use crate::infrastructure::cbm_client::CbmDataClient;
use crate::infrastructure::config::load_dashboard_config;
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{dashboard_page, get_view, health_check, post_event};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Create the raw-data client (infrastructure layer)
    let client = Arc::new(CbmDataClient::new(config.source.base_url.clone()));

    // Create services (application layer)
    let service = DashboardService::new(client);
    let controller = DashboardController::new(service);

    // Seed the dashboard the way the UI comes up: default compressor
    // selected, sensor cascade applied, one initial chart load.
    let mut dashboard = DashboardState::new();
    controller
        .handle_event(&mut dashboard, UiEvent::CompressorChanged("1".to_string()))
        .await;

    let state = Arc::new(AppState {
        controller,
        dashboard: tokio::sync::RwLock::new(dashboard),
        refresh_period_secs: config.refresh.period_secs,
    });

    // Periodic refresh - the timer is the only autonomous event source
    let timer_state = state.clone();
    let period = Duration::from_secs(config.refresh.period_secs);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await; // the first tick completes immediately
        loop {
            ticker.tick().await;
            let mut dashboard = timer_state.dashboard.write().await;
            timer_state
                .controller
                .handle_event(&mut dashboard, UiEvent::TimerTick)
                .await;
        }
    });

    // Build router (presentation layer)
    let router = Router::new()
        .route("/", get(dashboard_page))
        .route("/healthz", get(health_check))
        .route("/api/view", get(get_view))
        .route("/api/event", post(post_event))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = config.server.listen.parse()?;
    println!("Starting cbm-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
