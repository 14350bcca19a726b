use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ranking::{Candidate, GeoPoint};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mandi {
    pub id: Uuid,
    pub name: String,
    pub district: String,
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    pub rating: Option<f64>,
    pub facilities: Vec<String>,
    pub commodities: Vec<String>,
    pub is_open: bool,
    pub updated_at: DateTime<Utc>,
}

impl Default for Mandi {
    fn default() -> Self {
        Self {
            id: Uuid::nil(),
            name: String::new(),
            district: String::new(),
            state: String::new(),
            latitude: 0.0,
            longitude: 0.0,
            rating: None,
            facilities: Vec::new(),
            commodities: Vec::new(),
            is_open: true,
            updated_at: DateTime::<Utc>::UNIX_EPOCH,
        }
    }
}

impl Mandi {
    pub fn has_facility(&self, facility: &str) -> bool {
        contains_ignore_case(&self.facilities, facility)
    }

    pub fn trades(&self, commodity: &str) -> bool {
        contains_ignore_case(&self.commodities, commodity)
    }
}

impl Candidate for Mandi {
    fn geo_point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }
}

/// Scalar listing filters. Every set field must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MandiFilter {
    pub search: Option<String>,
    pub state: Option<String>,
    pub commodity: Option<String>,
    pub facility: Option<String>,
    pub min_rating: Option<f64>,
    pub open_only: bool,
}

impl MandiFilter {
    pub fn matches(&self, mandi: &Mandi) -> bool {
        let search_ok = self.search.as_deref().is_none_or(|needle| {
            let needle = needle.to_lowercase();
            mandi.name.to_lowercase().contains(&needle)
                || mandi.district.to_lowercase().contains(&needle)
        });
        let state_ok = self
            .state
            .as_deref()
            .is_none_or(|state| mandi.state.eq_ignore_ascii_case(state));
        let commodity_ok = self
            .commodity
            .as_deref()
            .is_none_or(|commodity| mandi.trades(commodity));
        let facility_ok = self
            .facility
            .as_deref()
            .is_none_or(|facility| mandi.has_facility(facility));
        let rating_ok = self
            .min_rating
            .is_none_or(|min| mandi.rating.is_some_and(|rating| rating >= min));
        let open_ok = !self.open_only || mandi.is_open;

        search_ok && state_ok && commodity_ok && facility_ok && rating_ok && open_ok
    }

    pub fn apply(&self, mandis: Vec<Mandi>) -> Vec<Mandi> {
        mandis
            .into_iter()
            .filter(|mandi| self.matches(mandi))
            .collect()
    }
}

fn contains_ignore_case(values: &[String], wanted: &str) -> bool {
    let wanted = wanted.trim();
    values
        .iter()
        .any(|value| value.trim().eq_ignore_ascii_case(wanted))
}
