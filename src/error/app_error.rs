use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    pub code: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    ValidationError {
        message: String,
        issues: Vec<ValidationIssue>,
    },

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    InternalError(#[source] anyhow::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {service}")]
    ServiceUnavailable { service: String, message: String },
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let mut payload = serde_json::json!({
            "error": self.error_label(),
            "message": self.public_message(),
            "code": self.error_code(),
        });

        if let Some(issues) = self.validation_issues() {
            payload["details"] = serde_json::to_value(issues).unwrap_or_default();
        }

        HttpResponse::build(self.status_code()).json(payload)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServiceUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError { .. } => "VALIDATION_ERROR",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::Conflict(_) => "CONFLICT",
            AppError::InternalError(_) => "INTERNAL_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::ServiceUnavailable { .. } => "SERVICE_UNAVAILABLE",
        }
    }

    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
            issues: Vec::new(),
        }
    }

    pub fn mandi_source_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            service: "mandi-source".to_string(),
            message: message.into(),
        }
    }

    fn error_label(&self) -> &'static str {
        match self {
            AppError::InternalError(_) => "Internal server error",
            AppError::NotFound(_) => "Not found",
            AppError::ValidationError { .. } => "Validation error",
            AppError::Forbidden(_) => "Forbidden",
            AppError::Conflict(_) => "Conflict",
            AppError::BadRequest(_) => "Bad request",
            AppError::ServiceUnavailable { .. } => "Service unavailable",
        }
    }

    pub(super) fn public_message(&self) -> String {
        match self {
            AppError::InternalError(_) => "Internal server error".to_string(),
            AppError::NotFound(message)
            | AppError::Forbidden(message)
            | AppError::Conflict(message)
            | AppError::BadRequest(message) => message.clone(),
            AppError::ValidationError { message, .. } => message.clone(),
            AppError::ServiceUnavailable { message, .. } => message.clone(),
        }
    }

    fn validation_issues(&self) -> Option<&[ValidationIssue]> {
        match self {
            AppError::ValidationError { issues, .. } if !issues.is_empty() => Some(issues),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
