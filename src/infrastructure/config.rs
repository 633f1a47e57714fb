use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    #[serde(default)]
    pub server: ServerSettings,
    pub source: SourceSettings,
    #[serde(default)]
    pub refresh: RefreshSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_listen")]
    pub listen: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    /// Base address of the CBM raw-data endpoint.
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RefreshSettings {
    /// Auto-refresh period for the chart, in seconds.
    #[serde(default = "default_period_secs")]
    pub period_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

impl Default for RefreshSettings {
    fn default() -> Self {
        Self {
            period_secs: default_period_secs(),
        }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_period_secs() -> u64 {
    300
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
