//! Minimal WhatsApp Cloud API client for outbound text messages.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::server::{config::WhatsAppConfig, error::whatsapp::WhatsAppError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Deserialize)]
struct SendMessageResponse {
    #[serde(default)]
    messages: Vec<SentMessage>,
}

#[derive(Deserialize)]
struct SentMessage {
    id: String,
}

/// Client for `POST {api_url}/{phone_number_id}/messages`.
///
/// Cheap to clone; the underlying [`reqwest::Client`] shares its connection pool.
#[derive(Clone, Debug)]
pub struct WhatsAppClient {
    http: reqwest::Client,
    api_url: String,
    phone_number_id: String,
    access_token: String,
    verify_token: String,
}

impl WhatsAppClient {
    pub fn new(config: &WhatsAppConfig) -> Result<Self, WhatsAppError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            phone_number_id: config.phone_number_id.clone(),
            access_token: config.access_token.clone(),
            verify_token: config.verify_token.clone(),
        })
    }

    /// Token expected in the webhook subscription handshake
    pub fn verify_token(&self) -> &str {
        &self.verify_token
    }

    /// Sends a text message and returns the message ID assigned by WhatsApp
    ///
    /// # Returns
    /// - `Ok(String)` - WhatsApp message ID
    /// - `Err(WhatsAppError::Request)` - Request could not be sent or decoded
    /// - `Err(WhatsAppError::Api)` - API answered with a non-success status
    /// - `Err(WhatsAppError::MissingMessageId)` - Success response without a message ID
    pub async fn send_text(&self, to: &str, body: &str) -> Result<String, WhatsAppError> {
        let url = format!("{}/{}/messages", self.api_url, self.phone_number_id);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&json!({
                "messaging_product": "whatsapp",
                "to": to,
                "type": "text",
                "text": { "body": body },
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<empty response>".to_string());

            return Err(WhatsAppError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: SendMessageResponse = response.json().await?;

        response
            .messages
            .into_iter()
            .next()
            .map(|message| message.id)
            .ok_or(WhatsAppError::MissingMessageId)
    }
}
