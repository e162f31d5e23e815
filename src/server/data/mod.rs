//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries per table. Each one is generic over
//! [`sea_orm::ConnectionTrait`] so services can run it against a plain connection or
//! inside a transaction.

pub mod facility;
pub mod maintenance_record;
pub mod solar_system;
pub mod survey;
pub mod techno_economic;
pub mod whatsapp_message;
