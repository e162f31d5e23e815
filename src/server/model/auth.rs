//! Bearer-token authentication and role-based access.
//!
//! Tokens are HS256 JWTs issued by an external identity provider sharing `JWT_SECRET`.
//! Handlers take an [`AuthUser`] argument to require a valid token, then call
//! [`AuthUser::require`] with the minimum [`Role`] of the route.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, Error},
    model::app::AppState,
};

/// User role, ordered from least to most privileged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Technician,
    Manager,
    Admin,
}

/// JWT claims carried by bearer tokens.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier assigned by the identity provider
    pub sub: String,
    pub role: Role,
    /// Expiry as seconds since the Unix epoch
    pub exp: usize,
}

/// Validates HS256 bearer tokens against the shared secret.
#[derive(Clone)]
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    /// Decodes and validates a token, including its expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)?;

        Ok(data.claims)
    }
}

/// Authenticated caller extracted from the `Authorization: Bearer` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
    pub role: Role,
}

impl AuthUser {
    /// Returns `AuthError::InsufficientRole` unless the user's role is at least `required`.
    pub fn require(&self, required: Role) -> Result<(), AuthError> {
        if self.role < required {
            return Err(AuthError::InsufficientRole {
                required,
                actual: self.role,
            });
        }

        Ok(())
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = state.jwt.verify(token)?;

        Ok(claims.into())
    }
}
