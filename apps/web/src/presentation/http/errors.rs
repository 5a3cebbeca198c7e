//! HTTP error handling and response conversion.
//!
//! Every failure that reaches the HTTP layer becomes an [`AppError`], which is
//! the single place errors are turned into responses: a 404 view for missing
//! records and the generic server error view for everything else.

use crate::domain::shared::errors::DomainError;
use crate::presentation::http::views::{self, ERROR_PAGE, NOT_FOUND_PAGE};
use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

/// Application-level errors returned from handlers and loaders.
#[derive(Debug)]
pub enum AppError {
    /// Resource not found (404).
    NotFound(String),

    /// Malformed request (400).
    BadRequest(String),

    /// Request data failed validation (400).
    ValidationError(String),

    /// No authenticated user (401).
    Unauthorized,

    /// Store operation failed (500).
    Database(String),

    /// A view could not be rendered (500).
    Template(String),

    /// Routing or extraction fault on our side (500).
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::Database(msg) => write!(f, "Database error: {}", msg),
            Self::Template(msg) => write!(f, "Template error: {}", msg),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) | Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Database(_) | Self::Template(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// User-safe message, without implementation details.
    fn user_message(&self) -> String {
        match self {
            Self::NotFound(_) => "Not found".into(),
            Self::BadRequest(msg) => msg.clone(),
            Self::ValidationError(_) => "The submitted data is invalid".into(),
            Self::Unauthorized => "Please sign in to continue".into(),
            Self::Database(_) | Self::Template(_) | Self::Internal(_) => {
                "Oops! Something went wrong".into()
            }
        }
    }

    /// Extra detail worth showing to the user, if any.
    fn details(&self) -> Option<String> {
        match self {
            Self::ValidationError(msg) => Some(msg.clone()),
            _ => None,
        }
    }

    fn title(&self) -> &'static str {
        match self.status_code() {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::UNAUTHORIZED => "Unauthorized",
            _ => "Server error",
        }
    }
}

#[derive(Serialize)]
struct ErrorPage<'a> {
    title: &'a str,
    error: String,
    details: Option<String>,
    url: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("error={}", self);
            }
            StatusCode::BAD_REQUEST | StatusCode::NOT_FOUND => {
                tracing::warn!("error={}", self);
            }
            _ => {
                tracing::debug!("error={}", self);
            }
        }

        let page = ErrorPage {
            title: self.title(),
            error: self.user_message(),
            details: self.details(),
            url: None,
        };
        let html = if status == StatusCode::NOT_FOUND {
            views::render_error_page(NOT_FOUND_PAGE, &page, "Not Found")
        } else {
            views::render_error_page(ERROR_PAGE, &page, "Internal Server Error")
        };

        (status, html).into_response()
    }
}

/// Renders the 404 view for a path no route matched.
pub fn not_found_page(url: &str) -> Response {
    let page = ErrorPage {
        title: "Not found",
        error: "Not found".into(),
        details: None,
        url: Some(url.to_string()),
    };
    (
        StatusCode::NOT_FOUND,
        views::render_error_page(NOT_FOUND_PAGE, &page, "Not Found"),
    )
        .into_response()
}

// === Domain Error Conversion ===

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => AppError::NotFound(msg),
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            DomainError::InfrastructureError(msg) => {
                tracing::error!(infrastructure_error = %msg);
                AppError::Database(msg)
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::from(err).into()
    }
}

// === Template Error Conversion ===

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        tracing::error!(template_error = %message);
        AppError::Template(message)
    }
}

// === Extractor Rejection Conversion ===

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        let detail = rejection.body_text();
        if rejection.status().is_client_error() {
            tracing::debug!(rejection = %detail, "Path parameters rejected");
            AppError::BadRequest("The address contains an invalid id".into())
        } else {
            AppError::Internal(detail)
        }
    }
}
