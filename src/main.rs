use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{middleware::Logger, web, App, HttpServer};
use mandi_backend::api::openapi::configure_openapi;
use mandi_backend::api::routes::{self, AppState};
use mandi_backend::application::MandiService;
use mandi_backend::config::AppConfig;
use mandi_backend::infrastructure::repositories::InMemoryMandiRepository;
use mandi_backend::middleware::request_logging::{
    create_request_span, get_client_ip, get_status_class, get_user_agent, has_origin,
};
use mandi_backend::observability::error_tracking::capture_unexpected_5xx;
use mandi_backend::observability::AppMetrics;
use mandi_backend::security::{cors_middleware, security_headers};
use tracing::{info, warn, Instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

fn startup_error(context: &str, error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {error}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()
        .map_err(|e| startup_error("failed to load application configuration", e))?;
    config
        .validate()
        .map_err(|e| startup_error("invalid application configuration", e))?;

    let filter =
        EnvFilter::try_new(&config.logging.level).unwrap_or_else(|_| EnvFilter::new("info"));
    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer())
            .init();
    }

    let mandi_repo = Arc::new(
        InMemoryMandiRepository::from_json_file(&config.data.mandi_file)
            .await
            .map_err(|e| startup_error("failed to load mandi seed data", e))?,
    );

    let metrics = Arc::new(AppMetrics::default());
    let state = AppState {
        mandi_service: Arc::new(
            MandiService::new(mandi_repo, config.listing.clone()).with_metrics(metrics.clone()),
        ),
        security: config.security.clone(),
        metrics: metrics.clone(),
    };

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let security_config = config.security.clone();
    let environment = config.environment.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.environment,
        "starting mandi backend"
    );

    HttpServer::new(move || {
        let metrics = metrics.clone();
        let environment = environment.clone();
        App::new()
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let request_id = Uuid::new_v4().to_string();
                let path = req.path().to_string();
                let method = req.method().to_string();
                let span = create_request_span(
                    &request_id,
                    &method,
                    &path,
                    &get_client_ip(&req),
                    &get_user_agent(&req),
                    has_origin(&req),
                );
                let metrics = metrics.clone();
                let environment = environment.clone();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        HeaderName::from_static("x-request-id"),
                        HeaderValue::from_str(&request_id)
                            .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
                    );

                    let status = response.status().as_u16();
                    let latency_ms = start.elapsed().as_millis() as u64;
                    metrics.record_request(status, latency_ms);

                    info!(
                        status = status,
                        status_class = get_status_class(status),
                        latency_ms = latency_ms,
                        "request completed"
                    );

                    if status >= 500 {
                        let captured = capture_unexpected_5xx(
                            &environment,
                            &path,
                            &method,
                            status,
                            &request_id,
                        );
                        if let Err(error) = captured {
                            warn!(error = %error, "failed to capture server error");
                        }
                    }
                    Ok::<_, actix_web::Error>(response)
                }
                .instrument(span)
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(configure_openapi)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
