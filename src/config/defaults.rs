use crate::ranking::{SortDirection, SortKey};

pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub fn default_port() -> u16 {
    8080
}

pub fn default_environment() -> String {
    "development".to_string()
}

pub fn default_mandi_file() -> String {
    "data/mandis.json".to_string()
}

pub fn default_page_size() -> i64 {
    20
}

pub fn default_max_page_size() -> i64 {
    100
}

pub fn default_sort_key() -> SortKey {
    SortKey::Distance
}

pub fn default_sort_direction() -> SortDirection {
    SortDirection::Asc
}

pub fn default_logging_level() -> String {
    "info".to_string()
}

pub fn default_logging_json_format() -> bool {
    true
}

pub fn default_cors_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

pub fn default_metrics_allow_private_only() -> bool {
    true
}

pub fn normalize_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
