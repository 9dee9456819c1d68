use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Configuration options of the catalog server.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_address")]
    pub address: String,
    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Path of the SQLite database file.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Origins allowed to call the API cross-origin. Empty allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_database_url() -> String {
    "bores.db".to_string()
}

impl ServerConfig {
    /// Load configuration from `config/default.yaml`, the optional
    /// `config/{APP_ENV}.yaml` override and `APP_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        Self::load_from("config", &app_env, Environment::with_prefix("APP"))
    }

    fn load_from(dir: &str, app_env: &str, environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&format!("{dir}/default")).required(false))
            .add_source(File::with_name(&format!("{dir}/{app_env}")).required(false))
            .add_source(
                environment
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("allowed_origins"),
            )
            .build()?
            .try_deserialize()
    }

    /// Socket address the HTTP server binds to.
    pub fn bind_address(&self) -> (String, u16) {
        (self.address.clone(), self.port)
    }
}
