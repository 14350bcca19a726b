use mandi_backend::api::dtos::{ErrorResponse, PaginatedResponse};

#[test]
fn paginated_response_serializes_paging_fields() {
    let page = PaginatedResponse::new(vec!["a", "b"], 5, 2, 2);
    let json = serde_json::to_value(&page).expect("page should serialize");

    assert_eq!(json["items"], serde_json::json!(["a", "b"]));
    assert_eq!(json["total"], 5);
    assert_eq!(json["page"], 2);
    assert_eq!(json["limit"], 2);
    assert_eq!(json["total_pages"], 3);
}

#[test]
fn paginated_response_with_exact_fit_has_no_extra_page() {
    let page = PaginatedResponse::new(vec![1; 20], 40, 1, 20);
    assert_eq!(page.total_pages, 2);
}

#[test]
fn error_response_serializes_all_fields() {
    let error = ErrorResponse {
        error: "Not found".to_string(),
        message: "mandi not found".to_string(),
        code: "NOT_FOUND".to_string(),
    };
    let json = serde_json::to_value(&error).expect("error should serialize");

    assert_eq!(json["error"], "Not found");
    assert_eq!(json["message"], "mandi not found");
    assert_eq!(json["code"], "NOT_FOUND");
}
