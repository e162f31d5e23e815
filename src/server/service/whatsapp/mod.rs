//! Outbound WhatsApp notifications and the Cloud API webhook.
//!
//! Every outbound message is recorded before it is sent, so a failed call to the API
//! leaves a `failed` row carrying the error text. Webhook deliveries store inbound
//! messages and advance the status of outbound ones.

pub mod client;

use entity::sea_orm_active_enums::MessageStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::whatsapp::{
        SendMessageDto, WebhookPayload, WebhookSummaryDto, WebhookVerifyParams,
        WhatsAppMessageDto,
    },
    server::{
        data::whatsapp_message::WhatsAppMessageRepository,
        error::{auth::AuthError, validation::ValidationError, Error},
        service::whatsapp::client::WhatsAppClient,
    },
};

pub struct WhatsAppService<'a> {
    db: &'a DatabaseConnection,
    client: &'a WhatsAppClient,
}

impl<'a> WhatsAppService<'a> {
    /// Creates a new instance of [`WhatsAppService`]
    pub fn new(db: &'a DatabaseConnection, client: &'a WhatsAppClient) -> Self {
        Self { db, client }
    }

    /// Sends a text message, recording it as `sent` or `failed`
    ///
    /// No retry is attempted; a failed send returns the API error after the failure
    /// has been recorded.
    pub async fn send(&self, message: SendMessageDto) -> Result<WhatsAppMessageDto, Error> {
        if message.to.trim().is_empty() {
            return Err(ValidationError::MissingField("to").into());
        }
        if message.body.trim().is_empty() {
            return Err(ValidationError::MissingField("body").into());
        }

        let message_repo = WhatsAppMessageRepository::new(self.db);
        let record = message_repo
            .create_outbound(message.to.clone(), message.body.clone())
            .await?;

        match self.client.send_text(&message.to, &message.body).await {
            Ok(external_id) => {
                let record = message_repo.mark_sent(record, external_id).await?;

                tracing::info!(
                    "Sent WhatsApp message {} to {}",
                    record.id,
                    record.phone_number
                );

                Ok(record.into())
            }
            Err(err) => {
                let record = message_repo.mark_failed(record, err.to_string()).await?;

                tracing::warn!(
                    "Failed to send WhatsApp message {} to {}: {}",
                    record.id,
                    record.phone_number,
                    err
                );

                Err(err.into())
            }
        }
    }

    /// Completes the webhook subscription handshake by echoing the challenge
    pub fn verify(&self, params: WebhookVerifyParams) -> Result<String, AuthError> {
        if params.mode == "subscribe" && params.verify_token == self.client.verify_token() {
            return Ok(params.challenge);
        }

        Err(AuthError::WebhookVerificationFailed)
    }

    /// Stores inbound messages and applies delivery status updates
    ///
    /// Inbound messages already stored under the same WhatsApp ID are skipped. Status
    /// updates for unknown messages or with unrecognised statuses are ignored.
    pub async fn handle_webhook(&self, payload: WebhookPayload) -> Result<WebhookSummaryDto, Error> {
        let message_repo = WhatsAppMessageRepository::new(self.db);
        let mut summary = WebhookSummaryDto {
            received: 0,
            status_updates: 0,
        };

        let values = payload
            .entry
            .into_iter()
            .flat_map(|entry| entry.changes)
            .map(|change| change.value);

        for value in values {
            for message in value.messages {
                if message_repo.find_by_external_id(&message.id).await?.is_some() {
                    tracing::debug!("Skipping duplicate inbound WhatsApp message {}", message.id);
                    continue;
                }

                let body = match message.text {
                    Some(text) => text.body,
                    None => format!("[{}]", message.kind),
                };
                message_repo
                    .create_inbound(message.from, body, message.id)
                    .await?;
                summary.received += 1;
            }

            for update in value.statuses {
                let Some(status) = parse_status(&update.status) else {
                    tracing::debug!(
                        "Ignoring unknown WhatsApp status {:?} for message {}",
                        update.status,
                        update.id
                    );
                    continue;
                };

                if message_repo
                    .update_status_by_external_id(&update.id, status)
                    .await?
                    .is_some()
                {
                    summary.status_updates += 1;
                }
            }
        }

        tracing::debug!(
            "Processed WhatsApp webhook: {} messages received, {} status updates",
            summary.received,
            summary.status_updates
        );

        Ok(summary)
    }
}

fn parse_status(status: &str) -> Option<MessageStatus> {
    match status {
        "sent" => Some(MessageStatus::Sent),
        "delivered" => Some(MessageStatus::Delivered),
        "read" => Some(MessageStatus::Read),
        "failed" => Some(MessageStatus::Failed),
        _ => None,
    }
}
