//! Proximity ranking for located candidates.
//!
//! Distances are great-circle kilometers (Haversine, mean Earth radius),
//! rounded to one decimal place before any filtering or sorting.

mod distance;
mod ranker;

pub use distance::{compute_distance_km, haversine_km, round_to_tenth, GeoPoint, EARTH_RADIUS_KM};
pub use ranker::{
    annotate_distances, filter_by_radius, rank, sort_ranked, Candidate, Ranked, RankingOptions,
    SortDirection, SortKey,
};
