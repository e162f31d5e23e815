//! SeaORM entity definitions for the DREAM Tool database schema.

pub mod prelude;

pub mod facility;
pub mod maintenance_record;
pub mod sea_orm_active_enums;
pub mod solar_system;
pub mod survey;
pub mod survey_equipment;
pub mod survey_version;
pub mod techno_economic_analysis;
pub mod whatsapp_message;
