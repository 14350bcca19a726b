use crate::config::SecurityConfig;
use actix_cors::Cors;

/// The API is read-only, so only safe methods are allowed cross-origin.
pub fn cors_middleware(config: &SecurityConfig) -> Cors {
    let allowlist = config.cors_allowed_origins.clone();

    Cors::default()
        .allowed_methods(vec!["GET", "HEAD", "OPTIONS"])
        .allow_any_header()
        .expose_headers(vec!["x-request-id"])
        .max_age(3600)
        .allowed_origin_fn(move |origin, _| {
            origin
                .to_str()
                .ok()
                .map(|value| allowlist.iter().any(|allowed| allowed == value))
                .unwrap_or(false)
        })
}
