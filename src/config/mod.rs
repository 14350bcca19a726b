pub mod defaults;
pub mod listing_config;
pub mod security_config;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

pub use listing_config::ListingConfig;
pub use security_config::SecurityConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("listing configuration is invalid: {0}")]
    Listing(String),
    #[error("data configuration is invalid: {0}")]
    Data(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub listing: ListingConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    #[serde(default = "defaults::default_mandi_file")]
    pub mandi_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            mandi_file: defaults::default_mandi_file(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        let mut config: Self = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config/development.toml"))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(
                Env::raw()
                    .only(&["MANDI_DATA_FILE", "LOG_LEVEL"])
                    .map(|key| {
                        if key.as_str().eq_ignore_ascii_case("MANDI_DATA_FILE") {
                            "data.mandi_file".into()
                        } else if key.as_str().eq_ignore_ascii_case("LOG_LEVEL") {
                            "logging.level".into()
                        } else {
                            key.into()
                        }
                    }),
            )
            .extract()
            .map_err(Box::new)?;

        config.security.metrics_admin_token =
            defaults::normalize_optional_string(config.security.metrics_admin_token);

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.mandi_file.trim().is_empty() {
            return Err(ConfigError::Data(
                "MANDI_DATA_FILE must point to a mandi seed file".to_string(),
            ));
        }

        self.listing.validate()
    }
}
