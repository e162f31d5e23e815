use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_facility::Facility;

static IDX_SOLAR_SYSTEM_FACILITY_ID: &str = "idx-solar_system-facility_id";
static IDX_SOLAR_SYSTEM_STATUS: &str = "idx-solar_system-status";
static FK_SOLAR_SYSTEM_FACILITY_ID: &str = "fk-solar_system-facility_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SolarSystem::Table)
                    .if_not_exists()
                    .col(pk_auto(SolarSystem::Id))
                    .col(integer(SolarSystem::FacilityId))
                    .col(string(SolarSystem::Name))
                    .col(double(SolarSystem::CapacityKw))
                    .col(timestamp(SolarSystem::InstallationDate))
                    .col(timestamp_null(SolarSystem::CommissioningDate))
                    .col(string(SolarSystem::Status))
                    .col(timestamp_null(SolarSystem::LastMaintenanceDate))
                    .col(timestamp_null(SolarSystem::NextMaintenanceDate))
                    .col(json_binary(SolarSystem::PerformanceMetrics))
                    .col(timestamp(SolarSystem::CreatedAt))
                    .col(timestamp(SolarSystem::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SOLAR_SYSTEM_FACILITY_ID)
                            .from(SolarSystem::Table, SolarSystem::FacilityId)
                            .to(Facility::Table, Facility::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOLAR_SYSTEM_FACILITY_ID)
                    .table(SolarSystem::Table)
                    .col(SolarSystem::FacilityId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SOLAR_SYSTEM_STATUS)
                    .table(SolarSystem::Table)
                    .col(SolarSystem::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SOLAR_SYSTEM_STATUS)
                    .table(SolarSystem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SOLAR_SYSTEM_FACILITY_ID)
                    .table(SolarSystem::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SolarSystem::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SolarSystem {
    Table,
    Id,
    FacilityId,
    Name,
    CapacityKw,
    InstallationDate,
    CommissioningDate,
    Status,
    LastMaintenanceDate,
    NextMaintenanceDate,
    PerformanceMetrics,
    CreatedAt,
    UpdatedAt,
}
