use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// External node-management REST backend (all mutations go through it).
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Reserved id of the central node; it can never be deleted.
    #[serde(default = "default_central_node_id")]
    pub central_node_id: String,
    /// List reload attempts after a successful delete.
    #[serde(default = "default_reload_retries")]
    pub reload_retries: u32,
    /// Fixed wait between reload attempts.
    #[serde(default = "default_reload_backoff_ms")]
    pub reload_backoff_ms: u64,
    /// Wait before rendering the server graph after a view switch.
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,
}

fn default_central_node_id() -> String {
    "main".into()
}

fn default_reload_retries() -> u32 {
    3
}

fn default_reload_backoff_ms() -> u64 {
    500
}

fn default_settle_delay_ms() -> u64 {
    100
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            central_node_id: default_central_node_id(),
            reload_retries: default_reload_retries(),
            reload_backoff_ms: default_reload_backoff_ms(),
            settle_delay_ms: default_settle_delay_ms(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &str) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("reading config {}: {}", path, e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.backend.base_url.is_empty(),
            "backend.base_url must be non-empty"
        );
        anyhow::ensure!(
            self.backend.base_url.starts_with("http://")
                || self.backend.base_url.starts_with("https://"),
            "backend.base_url must be an http(s) URL, got {}",
            self.backend.base_url
        );
        anyhow::ensure!(
            !self.dashboard.central_node_id.trim().is_empty(),
            "dashboard.central_node_id must be non-empty"
        );
        anyhow::ensure!(
            self.dashboard.reload_retries > 0,
            "dashboard.reload_retries must be > 0, got {}",
            self.dashboard.reload_retries
        );
        Ok(())
    }
}
