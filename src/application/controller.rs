// Dashboard controller - UI events, live state, cascade and refresh rules
use crate::application::dashboard_service::DashboardService;
use crate::domain::chart::{ChartDisplayConfig, ChartFigure};
use crate::domain::compressor::{CompressorId, SensorOption, lookup_sensor_options};
use crate::domain::telemetry::Metric;

/// UI events, as translated from the browser controls and the refresh timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    MetricChanged(String),
    CompressorChanged(String),
    SensorChanged(String),
    TimerTick,
}

/// The live dashboard state: the three selections plus the outputs derived
/// from them. Owned by the presentation layer; the controller reads current
/// selections and writes derived outputs, never a second copy.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub metric: Metric,
    pub compressor: CompressorId,
    pub sensor: Option<String>,
    pub sensor_options: Vec<SensorOption>,
    pub figure: ChartFigure,
    pub display: ChartDisplayConfig,
    /// Set when the last refresh failed and the figure still shows the
    /// previous fetch.
    pub data_stale: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            metric: Metric::Temp,
            compressor: CompressorId::C200A,
            sensor: None,
            sensor_options: Vec::new(),
            figure: ChartFigure::empty(Metric::Temp),
            display: ChartDisplayConfig::default(),
            data_stale: false,
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Dependent-dropdown rule: a compressor change repopulates the sensor
/// options and selects the first entry. An unknown id yields an empty
/// option list and no selection.
pub fn cascade_sensor_options(raw_compressor_id: &str) -> (Vec<SensorOption>, Option<String>) {
    let options = lookup_sensor_options(raw_compressor_id);
    let selection = options.first().map(|option| option.value.clone());
    (options, selection)
}

#[derive(Clone)]
pub struct DashboardController {
    service: DashboardService,
}

impl DashboardController {
    pub fn new(service: DashboardService) -> Self {
        Self { service }
    }

    /// Apply one UI event. Selection events update the state first; every
    /// event ends with a full chart replacement. Events are serialized by
    /// the caller's lock, so no two cascades are ever in flight at once.
    pub async fn handle_event(&self, state: &mut DashboardState, event: UiEvent) {
        match event {
            UiEvent::MetricChanged(raw) => match Metric::parse(&raw) {
                Some(metric) => state.metric = metric,
                None => tracing::warn!("Ignoring unknown metric key: {:?}", raw),
            },
            UiEvent::CompressorChanged(raw) => {
                let (options, selection) = cascade_sensor_options(&raw);
                match CompressorId::parse(&raw) {
                    Some(compressor) => state.compressor = compressor,
                    None => tracing::warn!("Unknown compressor id: {:?}", raw),
                }
                state.sensor_options = options;
                state.sensor = selection;
            }
            UiEvent::SensorChanged(raw) => state.sensor = Some(raw),
            UiEvent::TimerTick => {}
        }

        self.refresh(state).await;
    }

    async fn refresh(&self, state: &mut DashboardState) {
        let Some(sensor_id) = state.sensor.clone() else {
            // Nothing selected (empty cascade): replace the chart with an
            // empty series without querying the endpoint.
            state.figure = ChartFigure::empty(state.metric);
            state.display = ChartDisplayConfig::default();
            state.data_stale = false;
            return;
        };

        match self
            .service
            .refresh_chart(state.metric, state.compressor, &sensor_id)
            .await
        {
            Ok((figure, display)) => {
                state.figure = figure;
                state.display = display;
                state.data_stale = false;
            }
            Err(error) => {
                // Keep the last-good figure; the view flags it as stale.
                tracing::warn!("Chart refresh failed, keeping previous data: {:#}", error);
                state.data_stale = true;
            }
        }
    }
}
