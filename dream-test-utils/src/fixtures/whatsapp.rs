//! WhatsApp message records and mock Cloud API endpoints.

use chrono::Utc;
use entity::sea_orm_active_enums::{MessageDirection, MessageStatus};
use mockito::{Matcher, Mock};
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::json;

use crate::{
    constant::{TEST_WHATSAPP_ACCESS_TOKEN, TEST_WHATSAPP_PHONE_NUMBER_ID},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn whatsapp<'a>(&'a mut self) -> WhatsAppFixtures<'a> {
        WhatsAppFixtures { test: self }
    }
}

pub struct WhatsAppFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> WhatsAppFixtures<'a> {
    /// Insert an outbound message record.
    pub async fn insert_outbound_message(
        &self,
        phone_number: &str,
        external_message_id: Option<&str>,
        status: MessageStatus,
    ) -> Result<entity::whatsapp_message::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::WhatsappMessage::insert(entity::whatsapp_message::ActiveModel {
                direction: ActiveValue::Set(MessageDirection::Outbound),
                phone_number: ActiveValue::Set(phone_number.to_string()),
                body: ActiveValue::Set("Scheduled maintenance reminder".to_string()),
                status: ActiveValue::Set(status),
                external_message_id: ActiveValue::Set(external_message_id.map(str::to_string)),
                error: ActiveValue::Set(None),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Mock `POST /{phone_number_id}/messages` accepting a message and returning `message_id`.
    ///
    /// The mock only matches requests carrying the test access token as bearer credential.
    pub fn create_send_message_endpoint(&mut self, message_id: &str, expected_requests: usize) -> Mock {
        let body = json!({
            "messaging_product": "whatsapp",
            "contacts": [{ "input": "+254700000000", "wa_id": "254700000000" }],
            "messages": [{ "id": message_id }],
        });

        self.test
            .server
            .mock("POST", send_message_path().as_str())
            .match_header(
                "authorization",
                format!("Bearer {}", TEST_WHATSAPP_ACCESS_TOKEN).as_str(),
            )
            .match_body(Matcher::PartialJson(json!({
                "messaging_product": "whatsapp",
                "type": "text",
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Mock `POST /{phone_number_id}/messages` failing with `status`.
    pub fn create_send_message_error_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "error": {
                "message": "Invalid parameter",
                "type": "OAuthException",
                "code": 100,
            }
        });

        self.test
            .server
            .mock("POST", send_message_path().as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }
}

fn send_message_path() -> String {
    format!("/{}/messages", TEST_WHATSAPP_PHONE_NUMBER_ID)
}
