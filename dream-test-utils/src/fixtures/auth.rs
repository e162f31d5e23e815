//! Bearer token helpers.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::json;

use crate::constant::TEST_JWT_SECRET;

/// Create a bearer token for `role` valid for one hour.
///
/// # Arguments
/// - `role` - Role claim, one of `viewer`, `technician`, `manager`, `admin`
///
/// # Returns
/// - `String` - HS256 JWT signed with [`TEST_JWT_SECRET`]
pub fn bearer_token(role: &str) -> String {
    sign(role, Utc::now().timestamp() + 3600)
}

/// Create a bearer token for `role` that expired an hour ago.
pub fn expired_bearer_token(role: &str) -> String {
    sign(role, Utc::now().timestamp() - 3600)
}

fn sign(role: &str, exp: i64) -> String {
    let claims = json!({
        "sub": "test-user",
        "role": role,
        "exp": exp,
    });

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}
