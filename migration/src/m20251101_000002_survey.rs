use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_facility::Facility;

static IDX_SURVEY_FACILITY_ID: &str = "idx-survey-facility_id";
static FK_SURVEY_FACILITY_ID: &str = "fk-survey-facility_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Survey::Table)
                    .if_not_exists()
                    .col(pk_auto(Survey::Id))
                    .col(string_uniq(Survey::ExternalId))
                    .col(integer(Survey::FacilityId))
                    .col(json_binary(Survey::FacilityData))
                    .col(timestamp(Survey::CreatedAt))
                    .col(timestamp(Survey::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SURVEY_FACILITY_ID)
                            .from(Survey::Table, Survey::FacilityId)
                            .to(Facility::Table, Facility::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SURVEY_FACILITY_ID)
                    .table(Survey::Table)
                    .col(Survey::FacilityId)
                    .col(Survey::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SURVEY_FACILITY_ID)
                    .table(Survey::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Survey::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Survey {
    Table,
    Id,
    ExternalId,
    FacilityId,
    FacilityData,
    CreatedAt,
    UpdatedAt,
}
