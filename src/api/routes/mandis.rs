use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::api::dtos::{MandiQueryParams, OriginParams};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/mandis")
            .route("", web::get().to(list_mandis))
            .route("/{id}", web::get().to(get_mandi)),
    );
}

/// Lists mandis, nearest first when the caller sends a position.
#[utoipa::path(
    get,
    path = "/api/v1/mandis",
    params(MandiQueryParams),
    responses(
        (status = 200, description = "Ranked mandi page", body = crate::api::dtos::MandiPage),
        (status = 400, description = "Invalid query parameters", body = crate::api::dtos::ErrorResponse),
        (status = 503, description = "Mandi source unavailable", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "mandis"
)]
pub async fn list_mandis(
    state: web::Data<AppState>,
    query: web::Query<MandiQueryParams>,
) -> AppResult<HttpResponse> {
    let result = state.mandi_service.list(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/mandis/{id}",
    params(
        ("id" = Uuid, Path, description = "Mandi id"),
        OriginParams
    ),
    responses(
        (status = 200, description = "Mandi details", body = crate::api::dtos::MandiResponse),
        (status = 400, description = "Invalid coordinates", body = crate::api::dtos::ErrorResponse),
        (status = 404, description = "Mandi not found", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "mandis"
)]
pub async fn get_mandi(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    query: web::Query<OriginParams>,
) -> AppResult<HttpResponse> {
    let result = state
        .mandi_service
        .get_by_id(path.into_inner(), query.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
