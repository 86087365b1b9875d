use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration for the client, read from `SHOPFRONT_*`
/// environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Base URL of the storefront backend, e.g. `http://127.0.0.1:5000`.
    pub api_base_url: String,
    pub api_timeout_secs: u64,
    pub user_agent: String,
    /// Directory holding durable client state (cart, session).
    pub state_dir: PathBuf,
    pub log_level: String,
    /// Default listing size for the location-based product endpoint.
    pub product_limit: u32,
}
