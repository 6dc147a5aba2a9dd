//! Error-to-response mapping for the web layer.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use blogly_core::error::RepoError;
use blogly_shared::FormError;

/// Application-level error type rendered as a minimal HTML error page.
///
/// Persistence failures on write paths never reach this type: handlers
/// turn them into a warning flash and redirect anyway.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let detail = match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => msg.as_str(),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Something went wrong on our side."
            }
        };

        let body = format!(
            "<!doctype html>\n<html><head><title>{status}</title></head>\
             <body><h1>{status}</h1><p>{detail}</p>\
             <p><a href=\"/\">Back to Blogly</a></p></body></html>",
        );

        HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(body)
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => {
                tracing::error!("Constraint violation: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Connection(msg) | RepoError::Query(msg) => {
                tracing::error!("Database error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<minijinja::Error> for AppError {
    fn from(err: minijinja::Error) -> Self {
        AppError::Internal(format!("Template rendering failed: {}", err))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
