//! Builds [`AppState`] from a [`TestContext`] for calling controllers directly.

use dream_test_utils::prelude::*;
use dream_tool::server::{
    config::WhatsAppConfig,
    model::{
        app::AppState,
        auth::{AuthUser, JwtVerifier, Role},
    },
    service::whatsapp::client::WhatsAppClient,
};

/// Extension trait for TestContext to create AppState pointing at the mock server
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        let whatsapp = WhatsAppClient::new(&WhatsAppConfig {
            api_url: self.server_url(),
            phone_number_id: TEST_WHATSAPP_PHONE_NUMBER_ID.to_string(),
            access_token: TEST_WHATSAPP_ACCESS_TOKEN.to_string(),
            verify_token: TEST_WHATSAPP_VERIFY_TOKEN.to_string(),
        })
        .expect("Failed to build WhatsApp client");

        AppState {
            db: self.db.clone(),
            whatsapp,
            jwt: JwtVerifier::new(TEST_JWT_SECRET),
        }
    }
}

/// Authenticated caller with the given role
pub fn user(role: Role) -> AuthUser {
    AuthUser {
        user_id: "test-user".to_string(),
        role,
    }
}
