use std::sync::Arc;

use actix_web::http::StatusCode;
use uuid::Uuid;

use crate::common::{self, mocks::FailingMandiRepository, mocks::RecordingMandiRepository};
use crate::mandi_search::setup::*;

#[actix_rt::test]
async fn undefined_and_null_query_values_are_ignored() {
    let (status, body) = get_json(
        kerala_state(),
        "/api/v1/mandis?lat=undefined&lng=null&radius_km=&sort_by=undefined",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 5);
}

#[actix_rt::test]
async fn out_of_range_latitude_is_a_validation_error() {
    let (status, body) = get_json(kerala_state(), "/api/v1/mandis?lat=91&lng=76").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["details"][0]["field"], "lat");
}

#[actix_rt::test]
async fn non_numeric_latitude_is_a_bad_request() {
    let (status, body) = get_json(kerala_state(), "/api/v1/mandis?lat=north&lng=76").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_rt::test]
async fn nan_coordinates_are_rejected() {
    let (status, body) = get_json(kerala_state(), "/api/v1/mandis?lat=NaN&lng=76").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_rt::test]
async fn nan_min_rating_is_rejected() {
    let (status, body) = get_json(kerala_state(), "/api/v1/mandis?min_rating=NaN").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(body["message"], "min_rating must be a number");
}

#[actix_rt::test]
async fn negative_radius_is_rejected() {
    let (status, body) = get_json(
        kerala_state(),
        "/api/v1/mandis?lat=10.5&lng=76.2&radius_km=-1",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "radius_km must not be negative");
}

#[actix_rt::test]
async fn failing_source_returns_service_unavailable_without_ranking() {
    let state = common::app_state(Arc::new(FailingMandiRepository));
    let metrics = state.metrics.clone();

    let (status, body) = get_json(state, "/api/v1/mandis?lat=10.5&lng=76.2&radius_km=50").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");
    assert_eq!(body["message"], "Mandi listings are temporarily unavailable");
    assert!(metrics
        .render_prometheus(0)
        .contains("mandi_rankings_total 0"));
}

#[actix_rt::test]
async fn successful_listing_is_counted_once() {
    let repo = RecordingMandiRepository::with_mandis(crate::common::fixtures::kerala_mandis());
    let state = common::app_state(Arc::new(repo.clone()));
    let metrics = state.metrics.clone();

    let (status, _) = get_json(state, "/api/v1/mandis?lat=10.5276&lng=76.2144&radius_km=60").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(repo.find_all_calls(), 1);
    let rendered = metrics.render_prometheus(5);
    assert!(rendered.contains("mandi_rankings_total 1"));
    assert!(rendered.contains("mandi_candidates_ranked_total 5"));
    assert!(rendered.contains("mandi_candidates_retained_total 2"));
}

#[actix_rt::test]
async fn empty_source_returns_empty_page() {
    let state = common::app_state(Arc::new(RecordingMandiRepository::default()));

    let (status, body) = get_json(state, "/api/v1/mandis?lat=10.5&lng=76.2&radius_km=50").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
}

#[actix_rt::test]
async fn unknown_mandi_is_not_found() {
    let uri = format!("/api/v1/mandis/{}", Uuid::new_v4());
    let (status, body) = get_json(kerala_state(), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "mandi not found");
}

#[actix_rt::test]
async fn malformed_mandi_id_is_not_found() {
    let (status, body) = get_json(kerala_state(), "/api/v1/mandis/not-a-uuid").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "mandi not found");
}
