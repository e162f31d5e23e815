pub use sea_orm_migration::prelude::*;

mod m20251101_000001_facility;
mod m20251101_000002_survey;
mod m20251101_000003_survey_version;
mod m20251101_000004_survey_equipment;
mod m20251101_000005_techno_economic_analysis;
mod m20251101_000006_solar_system;
mod m20251101_000007_maintenance_record;
mod m20251101_000008_whatsapp_message;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_facility::Migration),
            Box::new(m20251101_000002_survey::Migration),
            Box::new(m20251101_000003_survey_version::Migration),
            Box::new(m20251101_000004_survey_equipment::Migration),
            Box::new(m20251101_000005_techno_economic_analysis::Migration),
            Box::new(m20251101_000006_solar_system::Migration),
            Box::new(m20251101_000007_maintenance_record::Migration),
            Box::new(m20251101_000008_whatsapp_message::Migration),
        ]
    }
}
