use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum WhatsAppError {
    #[error("WhatsApp request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("WhatsApp API responded with status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("WhatsApp API response did not contain a message ID")]
    MissingMessageId,
}

impl IntoResponse for WhatsAppError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
