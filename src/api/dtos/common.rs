use serde::Serialize;
use utoipa::ToSchema;

use crate::api::dtos::MandiResponse;

/// Standard error response structure for API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error label (e.g., "Not found", "Validation error")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Stable machine-readable code (e.g., "NOT_FOUND")
    pub code: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[aliases(MandiPage = PaginatedResponse<MandiResponse>)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            (total + limit - 1) / limit
        };
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }
}
