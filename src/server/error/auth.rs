use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::error_response, model::auth::Role};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing or malformed bearer token")]
    MissingToken,
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),
    #[error("Role {actual:?} is not permitted, {required:?} or higher is required")]
    InsufficientRole { required: Role, actual: Role },
    #[error("Webhook verification failed")]
    WebhookVerificationFailed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InsufficientRole { .. } => {
                error_response(StatusCode::FORBIDDEN, "Insufficient permissions")
            }
            Self::WebhookVerificationFailed => {
                error_response(StatusCode::FORBIDDEN, "Webhook verification failed")
            }
        }
    }
}
