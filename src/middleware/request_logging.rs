/// Request context helpers for the access log.
use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use actix_web::web;
use tracing::Span;

use crate::api::dtos::OriginParams;

/// Client address as seen by actix.
///
/// Forwarded headers are only honoured through `realip_remote_addr`, which
/// relies on actix's own proxy handling rather than trusting raw
/// X-Forwarded-For values.
pub fn get_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn get_user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Whether the request carries a usable caller position, parsed the same way
/// the mandi routes parse it. Coordinates themselves are never logged.
pub fn has_origin(req: &ServiceRequest) -> bool {
    web::Query::<OriginParams>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.origin().ok().flatten())
        .is_some()
}

pub fn create_request_span(
    request_id: &str,
    method: &str,
    path: &str,
    client_ip: &str,
    user_agent: &str,
    has_origin: bool,
) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        user_agent = %user_agent,
        has_origin = has_origin
    )
}

pub fn get_status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}
