use tracing::error;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Logs an unexpected 5xx as a trackable event and returns its id.
pub fn capture_unexpected_5xx(
    environment: &str,
    path: &str,
    method: &str,
    status: u16,
    request_id: &str,
) -> AppResult<Uuid> {
    if !(500..=599).contains(&status) {
        return Err(AppError::BadRequest(format!(
            "status {status} is not a server error"
        )));
    }

    let event_id = Uuid::new_v4();
    error!(
        tracking_backend = "log",
        event_id = %event_id,
        environment = %environment,
        request_id = %request_id,
        method = %method,
        path = %path,
        status = status,
        "unexpected server error"
    );
    Ok(event_id)
}
