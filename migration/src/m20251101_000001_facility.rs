use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Facility::Table)
                    .if_not_exists()
                    .col(pk_auto(Facility::Id))
                    .col(string(Facility::Name))
                    .col(string(Facility::FacilityType))
                    .col(string(Facility::Location))
                    .col(double_null(Facility::Latitude))
                    .col(double_null(Facility::Longitude))
                    .col(timestamp(Facility::CreatedAt))
                    .col(timestamp(Facility::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Facility::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Facility {
    Table,
    Id,
    Name,
    FacilityType,
    Location,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
