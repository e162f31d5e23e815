//! Error types for the DREAM Tool server application.
//!
//! Each domain has its own `thiserror` enum with an `IntoResponse` mapping, and all of
//! them are aggregated in [`Error`] so services and controllers can use `?` freely.
//! Client errors map to 400/401/403/404 with a descriptive message; everything else
//! is logged and returned as a generic 500.

pub mod auth;
pub mod config;
pub mod not_found;
pub mod validation;
pub mod whatsapp;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, not_found::NotFoundError,
        validation::ValidationError, whatsapp::WhatsAppError,
    },
};

/// Main error type for the DREAM Tool server application.
///
/// Aggregates the domain-specific error types and external library errors into a
/// single type with `#[from]` conversions for the `?` operator.
///
/// # Error Categories
/// - Validation errors (missing fields, invalid parameters, forbidden combinations)
/// - Not-found errors (facility, survey, analysis, system, record)
/// - Authentication errors (missing/invalid bearer token, insufficient role)
/// - WhatsApp Cloud API errors
/// - External library errors (database, JSON, scheduler, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Requested resource does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// WhatsApp Cloud API call failed.
    #[error(transparent)]
    WhatsAppError(#[from] WhatsAppError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// A stored JSON column could not be (de)serialized.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
    /// IO error (binding the listener, serving requests).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation errors
/// - 401 Unauthorized / 403 Forbidden - Authentication errors
/// - 404 Not Found - Missing resources
/// - 500 Internal Server Error - All other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::WhatsAppError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}
