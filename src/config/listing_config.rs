use serde::Deserialize;

use crate::config::{defaults, ConfigError};
use crate::ranking::{SortDirection, SortKey};

/// Paging and ordering defaults for mandi listings.
#[derive(Debug, Deserialize, Clone)]
pub struct ListingConfig {
    #[serde(default = "defaults::default_page_size")]
    pub default_page_size: i64,
    #[serde(default = "defaults::default_max_page_size")]
    pub max_page_size: i64,
    #[serde(default = "defaults::default_sort_key")]
    pub default_sort: SortKey,
    #[serde(default = "defaults::default_sort_direction")]
    pub default_order: SortDirection,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_page_size: defaults::default_page_size(),
            max_page_size: defaults::default_max_page_size(),
            default_sort: defaults::default_sort_key(),
            default_order: defaults::default_sort_direction(),
        }
    }
}

impl ListingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_page_size < 1 {
            return Err(ConfigError::Listing(
                "max_page_size must be at least 1".to_string(),
            ));
        }
        if self.default_page_size < 1 {
            return Err(ConfigError::Listing(
                "default_page_size must be at least 1".to_string(),
            ));
        }
        if self.default_page_size > self.max_page_size {
            return Err(ConfigError::Listing(
                "default_page_size must not exceed max_page_size".to_string(),
            ));
        }
        Ok(())
    }

    /// Page number and clamped page size for a request.
    pub fn page_window(&self, page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
        let page = page.unwrap_or(1).max(1);
        let limit = limit
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size);
        (page, limit)
    }
}
