use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000001_facility::Facility, m20251101_000002_survey::Survey};

static IDX_TEA_FACILITY_ID: &str = "idx-techno_economic_analysis-facility_id";
static FK_TEA_FACILITY_ID: &str = "fk-techno_economic_analysis-facility_id";
static FK_TEA_SURVEY_ID: &str = "fk-techno_economic_analysis-survey_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TechnoEconomicAnalysis::Table)
                    .if_not_exists()
                    .col(pk_auto(TechnoEconomicAnalysis::Id))
                    .col(integer(TechnoEconomicAnalysis::FacilityId))
                    .col(integer(TechnoEconomicAnalysis::SurveyId))
                    .col(string(TechnoEconomicAnalysis::Stage))
                    .col(string(TechnoEconomicAnalysis::CostingMethod))
                    .col(string(TechnoEconomicAnalysis::BatteryType))
                    .col(double(TechnoEconomicAnalysis::BatteryAutonomyFactor))
                    .col(double(TechnoEconomicAnalysis::BatteryDepthOfDischarge))
                    .col(double(TechnoEconomicAnalysis::InverterEfficiency))
                    .col(double(TechnoEconomicAnalysis::DailyUsageKwh))
                    .col(double(TechnoEconomicAnalysis::PeakHours))
                    .col(double(TechnoEconomicAnalysis::PvSystemSizeKw))
                    .col(double(TechnoEconomicAnalysis::BatteryCapacityKwh))
                    .col(json_binary(TechnoEconomicAnalysis::UnitCosts))
                    .col(double(TechnoEconomicAnalysis::PvInitialCost))
                    .col(double(TechnoEconomicAnalysis::PvBatteryCost))
                    .col(double(TechnoEconomicAnalysis::PvAnnualMaintenance))
                    .col(double(TechnoEconomicAnalysis::PvLifecycleCost))
                    .col(double(TechnoEconomicAnalysis::PvNpv))
                    .col(double_null(TechnoEconomicAnalysis::PvIrr))
                    .col(double(TechnoEconomicAnalysis::DieselInitialCost))
                    .col(double(TechnoEconomicAnalysis::DieselAnnualMaintenance))
                    .col(double(TechnoEconomicAnalysis::DieselLifecycleCost))
                    .col(double(TechnoEconomicAnalysis::DieselNpv))
                    .col(double_null(TechnoEconomicAnalysis::DieselIrr))
                    .col(timestamp(TechnoEconomicAnalysis::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEA_FACILITY_ID)
                            .from(
                                TechnoEconomicAnalysis::Table,
                                TechnoEconomicAnalysis::FacilityId,
                            )
                            .to(Facility::Table, Facility::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEA_SURVEY_ID)
                            .from(
                                TechnoEconomicAnalysis::Table,
                                TechnoEconomicAnalysis::SurveyId,
                            )
                            .to(Survey::Table, Survey::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEA_FACILITY_ID)
                    .table(TechnoEconomicAnalysis::Table)
                    .col(TechnoEconomicAnalysis::FacilityId)
                    .col(TechnoEconomicAnalysis::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEA_FACILITY_ID)
                    .table(TechnoEconomicAnalysis::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TechnoEconomicAnalysis::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TechnoEconomicAnalysis {
    Table,
    Id,
    FacilityId,
    SurveyId,
    Stage,
    CostingMethod,
    BatteryType,
    BatteryAutonomyFactor,
    BatteryDepthOfDischarge,
    InverterEfficiency,
    DailyUsageKwh,
    PeakHours,
    PvSystemSizeKw,
    BatteryCapacityKwh,
    UnitCosts,
    PvInitialCost,
    PvBatteryCost,
    PvAnnualMaintenance,
    PvLifecycleCost,
    PvNpv,
    PvIrr,
    DieselInitialCost,
    DieselAnnualMaintenance,
    DieselLifecycleCost,
    DieselNpv,
    DieselIrr,
    CreatedAt,
}
