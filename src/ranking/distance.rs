use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Mean Earth radius used by the Haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A coordinate in decimal degrees. Ranges are not checked here; callers
/// validate at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Builds an origin only when both halves are present.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        latitude
            .zip(longitude)
            .map(|(latitude, longitude)| Self::new(latitude, longitude))
    }
}

/// Great-circle distance in kilometers, rounded to one decimal place.
///
/// NaN coordinates propagate to a NaN result.
pub fn compute_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    round_to_tenth(haversine_km(a, b))
}

/// Unrounded Haversine distance in kilometers.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();
    let h = ((d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
