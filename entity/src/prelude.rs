pub use super::facility::Entity as Facility;
pub use super::maintenance_record::Entity as MaintenanceRecord;
pub use super::solar_system::Entity as SolarSystem;
pub use super::survey::Entity as Survey;
pub use super::survey_equipment::Entity as SurveyEquipment;
pub use super::survey_version::Entity as SurveyVersion;
pub use super::techno_economic_analysis::Entity as TechnoEconomicAnalysis;
pub use super::whatsapp_message::Entity as WhatsappMessage;
