//! WhatsApp message bodies and the subset of the WhatsApp Cloud API webhook payload
//! the service consumes.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::{MessageDirection, MessageStatus};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageDto {
    /// Recipient phone number in international format
    pub to: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct WhatsAppMessageDto {
    pub id: i32,
    #[schema(value_type = String)]
    pub direction: MessageDirection,
    pub phone_number: String,
    pub body: String,
    #[schema(value_type = String)]
    pub status: MessageStatus,
    pub external_message_id: Option<String>,
    pub error: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::whatsapp_message::Model> for WhatsAppMessageDto {
    fn from(model: entity::whatsapp_message::Model) -> Self {
        Self {
            id: model.id,
            direction: model.direction,
            phone_number: model.phone_number,
            body: model.body,
            status: model.status,
            external_message_id: model.external_message_id,
            error: model.error,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Query parameters of the webhook subscription handshake.
#[derive(Clone, Debug, Deserialize, IntoParams)]
pub struct WebhookVerifyParams {
    #[serde(rename = "hub.mode")]
    #[param(rename = "hub.mode")]
    pub mode: String,
    #[serde(rename = "hub.verify_token")]
    #[param(rename = "hub.verify_token")]
    pub verify_token: String,
    #[serde(rename = "hub.challenge")]
    #[param(rename = "hub.challenge")]
    pub challenge: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WebhookPayload {
    pub object: String,
    pub entry: Vec<WebhookEntry>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WebhookEntry {
    pub id: String,
    pub changes: Vec<WebhookChange>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WebhookChange {
    pub field: String,
    pub value: WebhookValue,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct WebhookValue {
    pub messages: Vec<InboundMessage>,
    pub statuses: Vec<StatusUpdate>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct InboundMessage {
    pub from: String,
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: Option<TextBody>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct TextBody {
    pub body: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct StatusUpdate {
    /// Message ID assigned by WhatsApp when the message was sent
    pub id: String,
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WebhookSummaryDto {
    pub received: usize,
    pub status_updates: usize,
}
