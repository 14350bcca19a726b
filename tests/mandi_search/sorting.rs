use std::sync::Arc;

use actix_web::http::StatusCode;
use mandi_backend::config::ListingConfig;
use mandi_backend::domain::Mandi;
use mandi_backend::ranking::{SortDirection, SortKey};
use uuid::Uuid;

use crate::common::{self, mocks::RecordingMandiRepository};
use crate::mandi_search::setup::*;

#[actix_rt::test]
async fn sort_by_name_ascending() {
    let (status, body) = get_json(kerala_state(), "/api/v1/mandis?sort_by=name").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&body),
        vec![COIMBATORE, ERNAKULAM, KOZHIKODE, PALAKKAD, THRISSUR]
    );
}

#[actix_rt::test]
async fn sort_by_name_descending() {
    let (_, body) = get_json(kerala_state(), "/api/v1/mandis?sort_by=name&order=desc").await;

    assert_eq!(
        names(&body),
        vec![THRISSUR, PALAKKAD, KOZHIKODE, ERNAKULAM, COIMBATORE]
    );
}

#[actix_rt::test]
async fn sort_by_rating_descending_puts_unrated_last() {
    let (_, body) = get_json(kerala_state(), "/api/v1/mandis?sort_by=rating&order=desc").await;

    assert_eq!(
        names(&body),
        vec![COIMBATORE, ERNAKULAM, THRISSUR, PALAKKAD, KOZHIKODE]
    );
}

#[actix_rt::test]
async fn sort_by_rating_ascending_still_puts_unrated_last() {
    let (_, body) = get_json(kerala_state(), "/api/v1/mandis?sort_by=rating&order=asc").await;

    assert_eq!(
        names(&body),
        vec![PALAKKAD, THRISSUR, ERNAKULAM, COIMBATORE, KOZHIKODE]
    );
}

#[actix_rt::test]
async fn sort_by_distance_descending_puts_farthest_first() {
    let (_, body) = get_json(
        kerala_state(),
        "/api/v1/mandis?lat=10.5276&lng=76.2144&sort_by=distance&order=desc",
    )
    .await;

    assert_eq!(
        names(&body),
        vec![COIMBATORE, KOZHIKODE, ERNAKULAM, PALAKKAD, THRISSUR]
    );
}

#[actix_rt::test]
async fn sort_options_are_case_insensitive() {
    let (status, body) = get_json(
        kerala_state(),
        "/api/v1/mandis?sort_by=NAME&order=Descending",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body)[0], THRISSUR);
}

#[actix_rt::test]
async fn unknown_sort_key_is_a_bad_request() {
    let (status, body) = get_json(kerala_state(), "/api/v1/mandis?sort_by=price").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_rt::test]
async fn equal_distances_keep_source_order_in_both_directions() {
    let twin = |name: &str| Mandi {
        id: Uuid::new_v4(),
        name: name.to_string(),
        latitude: 10.0,
        longitude: 76.0,
        ..Default::default()
    };
    let repo = RecordingMandiRepository::with_mandis(vec![twin("Beta Yard"), twin("Alpha Yard")]);

    for order in ["asc", "desc"] {
        let state = common::app_state(Arc::new(repo.clone()));
        let uri = format!("/api/v1/mandis?lat=10.5&lng=76.5&sort_by=distance&order={order}");
        let (_, body) = get_json(state, &uri).await;

        assert_eq!(names(&body), vec!["Beta Yard", "Alpha Yard"], "order={order}");
    }
}

#[actix_rt::test]
async fn configured_default_sort_applies_when_none_requested() {
    let state = common::app_state_with_listing(
        Arc::new(RecordingMandiRepository::with_mandis(
            crate::common::fixtures::kerala_mandis(),
        )),
        ListingConfig {
            default_sort: SortKey::Rating,
            default_order: SortDirection::Desc,
            ..Default::default()
        },
    );

    let (_, body) = get_json(state, "/api/v1/mandis").await;

    assert_eq!(names(&body)[0], COIMBATORE);
    assert_eq!(names(&body)[4], KOZHIKODE);
}
