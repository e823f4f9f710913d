//! Error pages
//!
//! Every failure below the handlers ends up here. Nothing is retried or
//! hidden; the caller gets a bare status page and the log gets the location.

use crate::web::views::{escape_html, page};

use uc_db::DbError;

use std::panic::Location;

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        ApiError::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let message = match self {
            ApiError::NotFound { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::Internal { message, .. } => message,
        };

        let title = format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error")
        );
        let body = format!(
            "<h1>{}</h1>\n<p>{}</p>\n<p><a href=\"/users\">Back to users</a></p>",
            escape_html(&title),
            escape_html(&message)
        );

        (status, Html(page(&title, &body))).into_response()
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UserNotFound { id, .. } => ApiError::NotFound {
                message: format!("User {} not found", id),
                location: ErrorLocation::from(Location::caller()),
            },
            // Don't expose internal database details to clients
            _ => ApiError::Internal {
                message: "Database operation failed".to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<FormRejection> for ApiError {
    #[track_caller]
    fn from(rejection: FormRejection) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid form submission: {}", rejection.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
