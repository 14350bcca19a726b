use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::dtos::lenient;
use crate::domain::MandiFilter;
use crate::error::{AppError, AppResult};
use crate::ranking::{GeoPoint, SortDirection, SortKey};

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MandiQueryParams {
    /// Latitude of the user; distance features need both `lat` and `lng`.
    #[serde(default, alias = "latitude", deserialize_with = "lenient::option")]
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: Option<f64>,
    #[serde(default, alias = "longitude", deserialize_with = "lenient::option")]
    #[validate(range(min = -180.0, max = 180.0, message = "lng must be between -180 and 180"))]
    pub lng: Option<f64>,
    /// Maximum distance in kilometers, inclusive.
    #[serde(default, deserialize_with = "lenient::option")]
    #[validate(range(min = 0.0, message = "radius_km must not be negative"))]
    pub radius_km: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option")]
    #[param(value_type = Option<String>)]
    pub sort_by: Option<SortKey>,
    #[serde(default, deserialize_with = "lenient::option")]
    #[param(value_type = Option<String>)]
    pub order: Option<SortDirection>,
    #[serde(default, deserialize_with = "lenient::option_string")]
    #[validate(length(max = 100, message = "search must be at most 100 characters"))]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_string")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_string")]
    pub commodity: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_string")]
    pub facility: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    #[validate(range(min = 0.0, max = 5.0, message = "min_rating must be between 0 and 5"))]
    pub min_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub open_only: Option<bool>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub limit: Option<i64>,
}

impl MandiQueryParams {
    /// The user's position, if both halves were sent. Non-finite values are
    /// rejected here because the ranker itself does not check them.
    pub fn origin(&self) -> AppResult<Option<GeoPoint>> {
        origin_from(self.lat, self.lng)
    }

    pub fn max_distance_km(&self) -> AppResult<Option<f64>> {
        match self.radius_km {
            Some(radius) if radius.is_nan() => Err(AppError::validation_error(
                "radius_km must be a number",
            )),
            radius => Ok(radius),
        }
    }

    pub fn min_rating(&self) -> AppResult<Option<f64>> {
        match self.min_rating {
            Some(rating) if rating.is_nan() => Err(AppError::validation_error(
                "min_rating must be a number",
            )),
            rating => Ok(rating),
        }
    }

    pub fn filter(&self) -> AppResult<MandiFilter> {
        Ok(MandiFilter {
            search: self.search.clone(),
            state: self.state.clone(),
            commodity: self.commodity.clone(),
            facility: self.facility.clone(),
            min_rating: self.min_rating()?,
            open_only: self.open_only.unwrap_or(false),
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OriginParams {
    #[serde(default, alias = "latitude", deserialize_with = "lenient::option")]
    #[validate(range(min = -90.0, max = 90.0, message = "lat must be between -90 and 90"))]
    pub lat: Option<f64>,
    #[serde(default, alias = "longitude", deserialize_with = "lenient::option")]
    #[validate(range(min = -180.0, max = 180.0, message = "lng must be between -180 and 180"))]
    pub lng: Option<f64>,
}

impl OriginParams {
    pub fn origin(&self) -> AppResult<Option<GeoPoint>> {
        origin_from(self.lat, self.lng)
    }
}

fn origin_from(lat: Option<f64>, lng: Option<f64>) -> AppResult<Option<GeoPoint>> {
    let non_finite = [lat, lng]
        .into_iter()
        .flatten()
        .any(|value| !value.is_finite());
    if non_finite {
        return Err(AppError::validation_error(
            "lat and lng must be finite numbers",
        ));
    }
    Ok(GeoPoint::from_parts(lat, lng))
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MandiResponse {
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
    /// Kilometers from the requested origin, one decimal place; null without
    /// an origin.
    pub distance_km: Option<f64>,
    pub updated_at: DateTime<Utc>,
}
