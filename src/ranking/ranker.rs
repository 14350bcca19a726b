use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use super::distance::{compute_distance_km, GeoPoint};

/// Anything the ranker can place on a map and order for display.
pub trait Candidate {
    fn geo_point(&self) -> GeoPoint;
    fn name(&self) -> &str;
    fn rating(&self) -> Option<f64>;
}

/// A candidate plus its distance from the origin, when one was known.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub item: T,
    pub distance_km: Option<f64>,
}

impl<T> Ranked<T> {
    pub fn unranked(item: T) -> Self {
        Self {
            item,
            distance_km: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    #[default]
    Distance,
    Rating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "distance" => Ok(SortKey::Distance),
            "rating" => Ok(SortKey::Rating),
            other => Err(format!(
                "unknown sort key `{other}`, expected name, distance or rating"
            )),
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort order `{other}`, expected asc or desc")),
        }
    }
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RankingOptions {
    pub origin: Option<GeoPoint>,
    pub max_distance_km: Option<f64>,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

/// Attaches a distance to every candidate without dropping any. Without an
/// origin the candidates pass through unannotated.
pub fn annotate_distances<T: Candidate>(
    candidates: Vec<T>,
    origin: Option<GeoPoint>,
) -> Vec<Ranked<T>> {
    match origin {
        Some(origin) => candidates
            .into_iter()
            .map(|item| {
                let distance_km = compute_distance_km(origin, item.geo_point());
                Ranked {
                    item,
                    distance_km: Some(distance_km),
                }
            })
            .collect(),
        None => candidates.into_iter().map(Ranked::unranked).collect(),
    }
}

/// Keeps candidates within `max_distance_km` of `origin` (inclusive), in input
/// order. An absent origin turns this into a passthrough.
pub fn filter_by_radius<T: Candidate>(
    candidates: Vec<T>,
    origin: Option<GeoPoint>,
    max_distance_km: f64,
) -> Vec<Ranked<T>> {
    let mut ranked = annotate_distances(candidates, origin);
    if origin.is_some() {
        ranked.retain(|entry| {
            entry
                .distance_km
                .is_some_and(|distance| distance <= max_distance_km)
        });
    }
    ranked
}

/// Stable sort: equal keys keep their input order in either direction.
pub fn sort_ranked<T: Candidate>(
    ranked: &mut [Ranked<T>],
    key: SortKey,
    direction: SortDirection,
) {
    match key {
        SortKey::Name => ranked.sort_by(|left, right| {
            direction.apply(compare_names(left.item.name(), right.item.name()))
        }),
        SortKey::Distance => {
            if ranked.iter().all(|entry| entry.distance_km.is_none()) {
                return;
            }
            ranked.sort_by(|left, right| {
                compare_missing_last(left.distance_km, right.distance_km, direction)
            });
        }
        SortKey::Rating => ranked.sort_by(|left, right| {
            compare_missing_last(left.item.rating(), right.item.rating(), direction)
        }),
    }
}

/// Radius filter (or plain annotation when no radius is set), then sort.
pub fn rank<T: Candidate>(candidates: Vec<T>, options: &RankingOptions) -> Vec<Ranked<T>> {
    let total = candidates.len();
    let mut ranked = match options.max_distance_km {
        Some(max_distance_km) => filter_by_radius(candidates, options.origin, max_distance_km),
        None => annotate_distances(candidates, options.origin),
    };
    sort_ranked(&mut ranked, options.sort_key, options.direction);

    debug!(
        candidates = total,
        retained = ranked.len(),
        has_origin = options.origin.is_some(),
        sort_key = ?options.sort_key,
        direction = ?options.direction,
        "ranked candidates"
    );
    ranked
}

fn compare_names(left: &str, right: &str) -> Ordering {
    left.to_lowercase().cmp(&right.to_lowercase())
}

fn compare_missing_last(
    left: Option<f64>,
    right: Option<f64>,
    direction: SortDirection,
) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => direction.apply(left.total_cmp(&right)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
