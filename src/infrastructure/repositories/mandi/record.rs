use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::domain::Mandi;

/// Wire shape of a mandi in the seed file. Validated before it becomes a
/// [`Mandi`].
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MandiRecord {
    pub id: Uuid,
    #[validate(length(min = 2, max = 120, message = "name must be 2-120 characters"))]
    pub name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub state: String,
    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,
    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: Option<f64>,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default)]
    pub commodities: Vec<String>,
    #[serde(default = "default_is_open")]
    pub is_open: bool,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Validate)]
pub(super) struct MandiSeed {
    #[validate(nested)]
    pub records: Vec<MandiRecord>,
}

fn default_is_open() -> bool {
    true
}

impl From<MandiRecord> for Mandi {
    fn from(record: MandiRecord) -> Self {
        Mandi {
            id: record.id,
            name: record.name.trim().to_string(),
            district: record.district.trim().to_string(),
            state: record.state.trim().to_string(),
            latitude: record.latitude,
            longitude: record.longitude,
            rating: record.rating,
            facilities: record.facilities,
            commodities: record.commodities,
            is_open: record.is_open,
            updated_at: record.updated_at,
        }
    }
}
