use actix_web::web::Query;
use mandi_backend::api::dtos::{MandiQueryParams, OriginParams};
use mandi_backend::ranking::{GeoPoint, SortDirection, SortKey};
use validator::Validate;

fn parse(query: &str) -> MandiQueryParams {
    Query::<MandiQueryParams>::from_query(query)
        .expect("query should parse")
        .into_inner()
}

#[test]
fn empty_query_has_no_origin_or_filters() {
    let params = parse("");

    assert!(params.validate().is_ok());
    assert_eq!(params.origin().unwrap(), None);
    assert_eq!(params.max_distance_km().unwrap(), None);
    assert_eq!(params.filter().unwrap(), Default::default());
}

#[test]
fn full_query_parses_every_field() {
    let params = parse(
        "lat=10.5&lng=76.2&radius_km=25&sort_by=rating&order=desc&search=yard\
         &state=Kerala&commodity=banana&facility=weighbridge&min_rating=3.5\
         &open_only=true&page=2&limit=10",
    );

    assert!(params.validate().is_ok());
    assert_eq!(params.origin().unwrap(), Some(GeoPoint::new(10.5, 76.2)));
    assert_eq!(params.max_distance_km().unwrap(), Some(25.0));
    assert_eq!(params.sort_by, Some(SortKey::Rating));
    assert_eq!(params.order, Some(SortDirection::Desc));
    assert_eq!(params.page, Some(2));
    assert_eq!(params.limit, Some(10));

    let filter = params.filter().expect("filter should build");
    assert_eq!(filter.search.as_deref(), Some("yard"));
    assert_eq!(filter.state.as_deref(), Some("Kerala"));
    assert_eq!(filter.min_rating, Some(3.5));
    assert!(filter.open_only);
}

#[test]
fn placeholder_values_are_unset() {
    let params = parse("lat=undefined&lng=null&search=%20%20&state=undefined&open_only=");

    assert_eq!(params.lat, None);
    assert_eq!(params.lng, None);
    assert_eq!(params.search, None);
    assert_eq!(params.state, None);
    assert_eq!(params.open_only, None);
}

#[test]
fn boundary_coordinates_are_valid() {
    assert!(parse("lat=90&lng=-180").validate().is_ok());
    assert!(parse("lat=-90&lng=180").validate().is_ok());
}

#[test]
fn out_of_range_values_fail_validation() {
    assert!(parse("lat=90.01&lng=0").validate().is_err());
    assert!(parse("lat=0&lng=180.5").validate().is_err());
    assert!(parse("radius_km=-0.1").validate().is_err());
    assert!(parse("min_rating=5.5").validate().is_err());
}

#[test]
fn unparseable_values_fail_to_deserialize() {
    assert!(Query::<MandiQueryParams>::from_query("lat=north").is_err());
    assert!(Query::<MandiQueryParams>::from_query("sort_by=price").is_err());
    assert!(Query::<MandiQueryParams>::from_query("order=sideways").is_err());
    assert!(Query::<MandiQueryParams>::from_query("page=two").is_err());
}

#[test]
fn infinite_latitude_is_rejected_as_origin() {
    let params = parse("lat=inf&lng=76.2");
    assert!(params.origin().is_err());
}

#[test]
fn nan_radius_is_rejected() {
    let params = parse("lat=10&lng=76&radius_km=NaN");
    assert!(params.max_distance_km().is_err());
}

#[test]
fn nan_min_rating_is_rejected() {
    let params = parse("min_rating=NaN");
    assert!(params.validate().is_ok());
    assert!(params.min_rating().is_err());
    assert!(params.filter().is_err());
}

#[test]
fn origin_params_need_both_halves() {
    let only_lng = Query::<OriginParams>::from_query("lng=76.2")
        .expect("query should parse")
        .into_inner();
    assert_eq!(only_lng.origin().unwrap(), None);

    let both = Query::<OriginParams>::from_query("latitude=10.5&longitude=76.2")
        .expect("query should parse")
        .into_inner();
    assert_eq!(both.origin().unwrap(), Some(GeoPoint::new(10.5, 76.2)));
}
