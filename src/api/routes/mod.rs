use std::net::IpAddr;
use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};

use crate::application::MandiService;
use crate::config::SecurityConfig;
use crate::error::{AppError, AppResult};
use crate::observability::AppMetrics;

pub mod mandis;

#[derive(Clone)]
pub struct AppState {
    pub mandi_service: Arc<MandiService>,
    pub security: SecurityConfig,
    pub metrics: Arc<AppMetrics>,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|error, _| {
        AppError::BadRequest(format!("invalid query parameters: {error}")).into()
    }))
    .app_data(
        web::PathConfig::default()
            .error_handler(|_, _| AppError::NotFound("mandi not found".to_string()).into()),
    )
    .service(web::scope("/api/v1").configure(mandis::configure))
    .route("/health", web::get().to(health))
    .route("/ready", web::get().to(ready))
    .route("/metrics", web::get().to(metrics));
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
pub async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Mandi listings loaded"),
        (status = 503, description = "No mandis loaded", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "health"
)]
pub async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let count = state.mandi_service.count().await?;
    if count == 0 {
        return Err(AppError::mandi_source_unavailable(
            "Service not ready: no mandis loaded",
        ));
    }
    Ok(HttpResponse::Ok().body("ready"))
}

async fn metrics(state: web::Data<AppState>, request: HttpRequest) -> AppResult<HttpResponse> {
    let admin_authorized = state
        .security
        .metrics_admin_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .is_some_and(|token| {
            request
                .headers()
                .get("x-admin-token")
                .and_then(|value| value.to_str().ok())
                == Some(token)
        });

    if !admin_authorized && state.security.metrics_allow_private_only {
        let ip = request
            .peer_addr()
            .map(|addr| addr.ip())
            .ok_or_else(|| AppError::Forbidden("metrics are not public".to_string()))?;

        if !is_private_or_loopback(ip) {
            return Err(AppError::Forbidden("metrics are not public".to_string()));
        }
    }

    let mandis_loaded = state.mandi_service.count().await.unwrap_or(0);
    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(state.metrics.render_prometheus(mandis_loaded)))
}

fn is_private_or_loopback(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local(),
    }
}
