use actix_web::{web, HttpResponse};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::mandis::list_mandis,
        crate::api::routes::mandis::get_mandi,
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::MandiResponse,
            crate::api::dtos::MandiPage,
            crate::api::dtos::ErrorResponse,
            crate::ranking::GeoPoint,
            crate::ranking::SortKey,
            crate::ranking::SortDirection,
        )
    ),
    tags(
        (name = "mandis", description = "Mandi listings ranked by proximity"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Mandi Backend API",
        version = "0.1.0",
        description = "Agricultural market listings with distance ranking",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn configure_openapi(cfg: &mut web::ServiceConfig) {
    cfg.route("/api-docs/openapi.json", web::get().to(openapi_json));
}

async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
