// Application state for HTTP handlers
use crate::application::controller::{DashboardController, DashboardState};
use tokio::sync::RwLock;

/// Shared by every handler and the refresh timer. The lock serializes UI
/// events, so each reactive rule runs to completion before the next one.
pub struct AppState {
    pub controller: DashboardController,
    pub dashboard: RwLock<DashboardState>,
    pub refresh_period_secs: u64,
}
