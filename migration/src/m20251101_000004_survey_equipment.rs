use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000003_survey_version::SurveyVersion;

static FK_SURVEY_EQUIPMENT_SURVEY_VERSION_ID: &str = "fk-survey_equipment-survey_version_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SurveyEquipment::Table)
                    .if_not_exists()
                    .col(pk_auto(SurveyEquipment::Id))
                    .col(integer(SurveyEquipment::SurveyVersionId))
                    .col(string(SurveyEquipment::Name))
                    .col(double(SurveyEquipment::PowerRatingW))
                    .col(integer(SurveyEquipment::Quantity))
                    .col(double(SurveyEquipment::HoursPerDay))
                    .col(double(SurveyEquipment::HoursPerNight))
                    .col(double(SurveyEquipment::WeeklyUsageDays))
                    .col(string(SurveyEquipment::TimeOfDay))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SURVEY_EQUIPMENT_SURVEY_VERSION_ID)
                            .from(SurveyEquipment::Table, SurveyEquipment::SurveyVersionId)
                            .to(SurveyVersion::Table, SurveyVersion::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SurveyEquipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SurveyEquipment {
    Table,
    Id,
    SurveyVersionId,
    Name,
    PowerRatingW,
    Quantity,
    HoursPerDay,
    HoursPerNight,
    WeeklyUsageDays,
    TimeOfDay,
}
