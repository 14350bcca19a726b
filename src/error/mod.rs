mod app_error;
mod conversions;
mod validation_mapping;


pub use app_error::{AppError, AppResult, ValidationIssue};
