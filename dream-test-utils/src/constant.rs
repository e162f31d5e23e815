//! Configuration constants shared by tests.
//!
//! None of these are real credentials.

/// HMAC secret used to sign and verify test bearer tokens.
pub static TEST_JWT_SECRET: &str = "dream-test-jwt-secret";

/// Sender phone number ID used for the mock WhatsApp Cloud API.
pub static TEST_WHATSAPP_PHONE_NUMBER_ID: &str = "1234567890";

/// Access token the mock WhatsApp Cloud API expects as bearer credential.
pub static TEST_WHATSAPP_ACCESS_TOKEN: &str = "whatsapp_access_token";

/// Token the webhook subscription handshake must present.
pub static TEST_WHATSAPP_VERIFY_TOKEN: &str = "whatsapp_verify_token";
