use serde::Deserialize;

use crate::config::defaults;

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    #[serde(default = "defaults::default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "defaults::default_metrics_allow_private_only")]
    pub metrics_allow_private_only: bool,
    #[serde(default)]
    pub metrics_admin_token: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: defaults::default_cors_allowed_origins(),
            metrics_allow_private_only: defaults::default_metrics_allow_private_only(),
            metrics_admin_token: None,
        }
    }
}
