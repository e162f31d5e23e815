//! Service layer for business logic.
//!
//! Services are constructed per request from a borrowed database connection and
//! coordinate repositories, calculations and the WhatsApp Cloud API. Multi-step writes
//! run inside a single database transaction.

pub mod facility;
pub mod maintenance;
pub mod solar_system;
pub mod survey;
pub mod techno_economic;
pub mod whatsapp;
