//! Techno-economic analysis of a facility's PV/battery option against diesel.
//!
//! A calculation reads the facility's latest survey, estimates its daily demand
//! ([`usage`]), sizes and prices a PV array and battery bank ([`sizing`]), compares
//! lifecycle costs with a diesel generator ([`financial`]) and stores the result.

pub mod financial;
pub mod sizing;
pub mod usage;

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::{
        survey::FacilityData,
        techno_economic::{AnalysisDto, CalculationRequestDto},
    },
    server::{
        data::{
            facility::FacilityRepository, survey::SurveyRepository,
            techno_economic::TechnoEconomicRepository,
        },
        error::{not_found::NotFoundError, Error},
        service::techno_economic::sizing::SizingInput,
    },
};

/// Service running and retrieving techno-economic analyses.
pub struct TechnoEconomicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TechnoEconomicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Runs a calculation on the facility's latest survey and stores the result.
    ///
    /// # Returns
    /// - `Ok(AnalysisDto)` - The stored analysis
    /// - `Err(Error::NotFoundError)` - Facility or survey does not exist
    /// - `Err(Error::ValidationError)` - Invalid parameters or costing method not allowed at stage
    /// - `Err(Error::DbErr)` / `Err(Error::JsonError)` - Loading or storing failed
    pub async fn calculate(
        &self,
        facility_id: i32,
        request: CalculationRequestDto,
    ) -> Result<AnalysisDto, Error> {
        FacilityRepository::new(self.db)
            .get_by_id(facility_id)
            .await?
            .ok_or(NotFoundError::Facility(facility_id))?;

        let survey = SurveyRepository::new(self.db)
            .get_latest_by_facility(facility_id)
            .await?
            .ok_or(NotFoundError::Survey(facility_id))?;
        let facility_data: FacilityData = serde_json::from_value(survey.facility_data)?;

        let daily_usage = usage::estimate_daily_usage(&facility_data);
        let peak_hours = usage::peak_hours(&facility_data.operational_hours);

        let sizing = sizing::size_system(&SizingInput {
            daily_usage,
            peak_hours,
            battery_autonomy_factor: request.battery_autonomy_factor,
            battery_depth_of_discharge: request.battery_depth_of_discharge,
            battery_type: request.battery_type,
            inverter_efficiency: request.inverter_efficiency,
            stage: request.stage,
            costing_method: request.costing_method,
            unit_costs: request.unit_costs,
        })?;

        let diesel = financial::diesel_baseline(daily_usage);
        let pv = financial::pv_financials(&sizing, &diesel);

        let analysis = entity::techno_economic_analysis::ActiveModel {
            facility_id: ActiveValue::Set(facility_id),
            survey_id: ActiveValue::Set(survey.id),
            stage: ActiveValue::Set(request.stage),
            costing_method: ActiveValue::Set(request.costing_method),
            battery_type: ActiveValue::Set(request.battery_type),
            battery_autonomy_factor: ActiveValue::Set(request.battery_autonomy_factor),
            battery_depth_of_discharge: ActiveValue::Set(request.battery_depth_of_discharge),
            inverter_efficiency: ActiveValue::Set(request.inverter_efficiency),
            daily_usage_kwh: ActiveValue::Set(daily_usage),
            peak_hours: ActiveValue::Set(peak_hours),
            pv_system_size_kw: ActiveValue::Set(pv.system_size_kw),
            battery_capacity_kwh: ActiveValue::Set(pv.battery_capacity_kwh),
            unit_costs: ActiveValue::Set(serde_json::to_value(&sizing.unit_costs)?),
            pv_initial_cost: ActiveValue::Set(pv.initial_cost),
            pv_battery_cost: ActiveValue::Set(pv.battery_cost),
            pv_annual_maintenance: ActiveValue::Set(pv.annual_maintenance),
            pv_lifecycle_cost: ActiveValue::Set(pv.lifecycle_cost),
            pv_npv: ActiveValue::Set(pv.npv),
            pv_irr: ActiveValue::Set(pv.irr),
            diesel_initial_cost: ActiveValue::Set(diesel.initial_cost),
            diesel_annual_maintenance: ActiveValue::Set(diesel.annual_maintenance),
            diesel_lifecycle_cost: ActiveValue::Set(diesel.lifecycle_cost),
            diesel_npv: ActiveValue::Set(diesel.npv),
            diesel_irr: ActiveValue::Set(diesel.irr),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        let analysis = TechnoEconomicRepository::new(self.db)
            .create(analysis)
            .await?;

        tracing::debug!(
            "Stored techno-economic analysis {} for facility {}: {:.2} kWh/day, {:.2} kW PV",
            analysis.id,
            facility_id,
            daily_usage,
            sizing.pv_system_size_kw
        );

        Ok(AnalysisDto::try_from(analysis)?)
    }

    /// Returns the facility's most recent analysis.
    ///
    /// # Returns
    /// - `Ok(AnalysisDto)` - Latest analysis
    /// - `Err(Error::NotFoundError)` - The facility has no analysis
    pub async fn get_latest(&self, facility_id: i32) -> Result<AnalysisDto, Error> {
        let analysis = TechnoEconomicRepository::new(self.db)
            .get_latest_by_facility(facility_id)
            .await?
            .ok_or(NotFoundError::Analysis(facility_id))?;

        Ok(AnalysisDto::try_from(analysis)?)
    }
}

#[cfg(test)]
mod tests {
    use dream_test_utils::prelude::*;
    use entity::sea_orm_active_enums::{AnalysisStage, BatteryType, CostingMethod};

    use crate::{
        model::techno_economic::{CalculationRequestDto, UnitCostOverrides},
        server::{
            error::{not_found::NotFoundError, validation::ValidationError, Error},
            service::techno_economic::TechnoEconomicService,
        },
    };

    fn request(stage: AnalysisStage, costing_method: CostingMethod) -> CalculationRequestDto {
        CalculationRequestDto {
            stage,
            costing_method,
            battery_type: BatteryType::Lithium,
            battery_autonomy_factor: 1.0,
            battery_depth_of_discharge: 0.8,
            inverter_efficiency: 0.95,
            unit_costs: UnitCostOverrides::default(),
        }
    }

    mod calculate {
        use super::*;

        /// Expect an analysis built from the latest survey to be stored and returned
        #[tokio::test]
        async fn stores_analysis_for_latest_survey() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_all_tables()
                .with_mock_facility("Clinic")
                .build()
                .await?;
            let (survey, _) = test
                .survey()
                .insert_mock_survey(1, "kobo-1", factory::facility_data())
                .await?;

            let service = TechnoEconomicService::new(&test.db);
            let analysis = service
                .calculate(
                    1,
                    request(AnalysisStage::Prefeasibility, CostingMethod::PerWatt),
                )
                .await
                .unwrap();

            assert_eq!(analysis.survey_id, survey.id);
            assert!((analysis.daily_usage_kwh - 8.0 * 8.0 / 24.0).abs() < 1e-9);
            assert!((analysis.peak_hours - 8.0 * 0.85).abs() < 1e-9);
            assert_eq!(analysis.diesel.irr, None);
            assert!(analysis.pv.irr.is_some());

            let latest = service.get_latest(1).await.unwrap();
            assert_eq!(latest.id, analysis.id);
            assert_eq!(latest.unit_costs, analysis.unit_costs);

            Ok(())
        }

        /// Expect NotFound when the facility has no survey
        #[tokio::test]
        async fn fails_without_survey() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_mock_facility("Clinic")
                .build()
                .await?;

            let service = TechnoEconomicService::new(&test.db);
            let result = service
                .calculate(
                    1,
                    request(AnalysisStage::Prefeasibility, CostingMethod::PerWatt),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::NotFoundError(NotFoundError::Survey(1)))
            ));

            Ok(())
        }

        /// Expect NotFound when the facility does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_facility() -> Result<(), TestError> {
            let test = TestBuilder::new().with_all_tables().build().await?;

            let service = TechnoEconomicService::new(&test.db);
            let result = service
                .calculate(
                    1,
                    request(AnalysisStage::Prefeasibility, CostingMethod::PerWatt),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::NotFoundError(NotFoundError::Facility(1)))
            ));

            Ok(())
        }

        /// Expect component-based costing at prefeasibility to be rejected
        #[tokio::test]
        async fn rejects_costing_stage_mismatch() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_all_tables()
                .with_mock_facility("Clinic")
                .build()
                .await?;
            test.survey()
                .insert_mock_survey(1, "kobo-1", factory::facility_data())
                .await?;

            let service = TechnoEconomicService::new(&test.db);
            let result = service
                .calculate(
                    1,
                    request(AnalysisStage::Prefeasibility, CostingMethod::ComponentBased),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(
                    ValidationError::CostingStageMismatch { .. }
                ))
            ));

            Ok(())
        }

        /// Expect a facility reporting no operating hours to fail on peak hours
        #[tokio::test]
        async fn rejects_zero_peak_hours() -> Result<(), TestError> {
            let mut test = TestBuilder::new()
                .with_all_tables()
                .with_mock_facility("Clinic")
                .build()
                .await?;
            test.survey()
                .insert_mock_survey(
                    1,
                    "kobo-1",
                    factory::facility_data_with(
                        vec![factory::equipment("Fridge", 100.0, 1, 8.0)],
                        0.0,
                        0.0,
                    ),
                )
                .await?;

            let service = TechnoEconomicService::new(&test.db);
            let result = service
                .calculate(
                    1,
                    request(AnalysisStage::Prefeasibility, CostingMethod::PerWatt),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::InvalidField {
                    field: "peak_hours",
                    ..
                }))
            ));

            Ok(())
        }
    }

    mod get_latest {
        use super::*;

        /// Expect NotFound before any analysis was run
        #[tokio::test]
        async fn fails_without_analysis() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_all_tables()
                .with_mock_facility("Clinic")
                .build()
                .await?;

            let service = TechnoEconomicService::new(&test.db);
            let result = service.get_latest(1).await;

            assert!(matches!(
                result,
                Err(Error::NotFoundError(NotFoundError::Analysis(1)))
            ));

            Ok(())
        }
    }
}
