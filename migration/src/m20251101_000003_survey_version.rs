use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000002_survey::Survey;

static IDX_SURVEY_VERSION_SURVEY_ID_VERSION: &str = "idx-survey_version-survey_id-version_number";
static FK_SURVEY_VERSION_SURVEY_ID: &str = "fk-survey_version-survey_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SurveyVersion::Table)
                    .if_not_exists()
                    .col(pk_auto(SurveyVersion::Id))
                    .col(integer(SurveyVersion::SurveyId))
                    .col(integer(SurveyVersion::VersionNumber))
                    .col(json_binary(SurveyVersion::FacilityData))
                    .col(timestamp(SurveyVersion::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SURVEY_VERSION_SURVEY_ID)
                            .from(SurveyVersion::Table, SurveyVersion::SurveyId)
                            .to(Survey::Table, Survey::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SURVEY_VERSION_SURVEY_ID_VERSION)
                    .table(SurveyVersion::Table)
                    .col(SurveyVersion::SurveyId)
                    .col(SurveyVersion::VersionNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SURVEY_VERSION_SURVEY_ID_VERSION)
                    .table(SurveyVersion::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SurveyVersion::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SurveyVersion {
    Table,
    Id,
    SurveyId,
    VersionNumber,
    FacilityData,
    CreatedAt,
}
