use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000006_solar_system::SolarSystem;

static IDX_MAINTENANCE_RECORD_SOLAR_SYSTEM_ID: &str = "idx-maintenance_record-solar_system_id";
static FK_MAINTENANCE_RECORD_SOLAR_SYSTEM_ID: &str = "fk-maintenance_record-solar_system_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRecord::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRecord::Id))
                    .col(integer(MaintenanceRecord::SolarSystemId))
                    .col(timestamp(MaintenanceRecord::MaintenanceDate))
                    .col(string(MaintenanceRecord::MaintenanceType))
                    .col(string(MaintenanceRecord::MaintenanceStatus))
                    .col(text_null(MaintenanceRecord::Description))
                    .col(double(MaintenanceRecord::Cost))
                    .col(double(MaintenanceRecord::LaborHours))
                    .col(double(MaintenanceRecord::DowntimeHours))
                    .col(timestamp_null(MaintenanceRecord::NextMaintenanceDate))
                    .col(timestamp_null(MaintenanceRecord::CompletedAt))
                    .col(timestamp(MaintenanceRecord::CreatedAt))
                    .col(timestamp(MaintenanceRecord::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MAINTENANCE_RECORD_SOLAR_SYSTEM_ID)
                            .from(MaintenanceRecord::Table, MaintenanceRecord::SolarSystemId)
                            .to(SolarSystem::Table, SolarSystem::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MAINTENANCE_RECORD_SOLAR_SYSTEM_ID)
                    .table(MaintenanceRecord::Table)
                    .col(MaintenanceRecord::SolarSystemId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MAINTENANCE_RECORD_SOLAR_SYSTEM_ID)
                    .table(MaintenanceRecord::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MaintenanceRecord::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRecord {
    Table,
    Id,
    SolarSystemId,
    MaintenanceDate,
    MaintenanceType,
    MaintenanceStatus,
    Description,
    Cost,
    LaborHours,
    DowntimeHours,
    NextMaintenanceDate,
    CompletedAt,
    CreatedAt,
    UpdatedAt,
}
