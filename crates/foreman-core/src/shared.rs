//! Shared configuration for the gateway.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Global application configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Application identity shown by the status endpoint.
    pub app_name: String,
    /// HTTP port for the gateway.
    pub port: u16,
}

impl CoreConfig {
    /// Load config from file and environment. Precedence: env `FOREMAN_CONFIG`
    /// path > `config/gateway.toml` > defaults; `FOREMAN`-prefixed env vars
    /// override both.
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_path =
            std::env::var("FOREMAN_CONFIG").unwrap_or_else(|_| "config/gateway.toml".to_string());
        let builder = config::Config::builder()
            .set_default("app_name", "Foreman Gateway")?
            .set_default("port", 8000_i64)?;

        let path = Path::new(&config_path);
        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("FOREMAN").separator("__"))
            .build()?;

        built.try_deserialize()
    }
}
