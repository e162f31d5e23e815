use sea_orm::DatabaseConnection;

use crate::server::{model::auth::JwtVerifier, service::whatsapp::client::WhatsAppClient};

/// State shared by all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// WhatsApp Cloud API client
    pub whatsapp: WhatsAppClient,
    /// Validates bearer tokens on authenticated routes
    pub jwt: JwtVerifier,
}
