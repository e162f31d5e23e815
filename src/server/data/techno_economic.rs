use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

pub struct TechnoEconomicRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TechnoEconomicRepository<'a, C> {
    /// Creates a new instance of [`TechnoEconomicRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a fully computed analysis
    pub async fn create(
        &self,
        analysis: entity::techno_economic_analysis::ActiveModel,
    ) -> Result<entity::techno_economic_analysis::Model, DbErr> {
        analysis.insert(self.db).await
    }

    /// Returns the most recent analysis of a facility
    pub async fn get_latest_by_facility(
        &self,
        facility_id: i32,
    ) -> Result<Option<entity::techno_economic_analysis::Model>, DbErr> {
        entity::prelude::TechnoEconomicAnalysis::find()
            .filter(entity::techno_economic_analysis::Column::FacilityId.eq(facility_id))
            .order_by_desc(entity::techno_economic_analysis::Column::CreatedAt)
            .order_by_desc(entity::techno_economic_analysis::Column::Id)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use dream_test_utils::prelude::*;
    use entity::sea_orm_active_enums::{AnalysisStage, BatteryType, CostingMethod};
    use sea_orm::ActiveValue;

    use crate::server::data::techno_economic::TechnoEconomicRepository;

    fn analysis(
        facility_id: i32,
        survey_id: i32,
        daily_usage_kwh: f64,
    ) -> entity::techno_economic_analysis::ActiveModel {
        entity::techno_economic_analysis::ActiveModel {
            facility_id: ActiveValue::Set(facility_id),
            survey_id: ActiveValue::Set(survey_id),
            stage: ActiveValue::Set(AnalysisStage::Prefeasibility),
            costing_method: ActiveValue::Set(CostingMethod::PerWatt),
            battery_type: ActiveValue::Set(BatteryType::Lithium),
            battery_autonomy_factor: ActiveValue::Set(1.0),
            battery_depth_of_discharge: ActiveValue::Set(0.8),
            inverter_efficiency: ActiveValue::Set(0.95),
            daily_usage_kwh: ActiveValue::Set(daily_usage_kwh),
            peak_hours: ActiveValue::Set(6.8),
            pv_system_size_kw: ActiveValue::Set(0.5),
            battery_capacity_kwh: ActiveValue::Set(3.3),
            unit_costs: ActiveValue::Set(serde_json::json!({})),
            pv_initial_cost: ActiveValue::Set(400.0),
            pv_battery_cost: ActiveValue::Set(1666.0),
            pv_annual_maintenance: ActiveValue::Set(8.0),
            pv_lifecycle_cost: ActiveValue::Set(2146.0),
            pv_npv: ActiveValue::Set(-2119.0),
            pv_irr: ActiveValue::Set(None),
            diesel_initial_cost: ActiveValue::Set(13.3),
            diesel_annual_maintenance: ActiveValue::Set(0.66),
            diesel_lifecycle_cost: ActiveValue::Set(19.9),
            diesel_npv: ActiveValue::Set(-17.8),
            diesel_irr: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
    }

    /// Expect the newest analysis to be returned for the facility
    #[tokio::test]
    async fn returns_latest_analysis() -> Result<(), TestError> {
        let mut test = TestBuilder::new()
            .with_all_tables()
            .with_mock_facility("Clinic")
            .build()
            .await?;
        let (survey, _) = test
            .survey()
            .insert_mock_survey(1, "kobo-1", factory::facility_data())
            .await?;

        let analysis_repo = TechnoEconomicRepository::new(&test.db);
        analysis_repo.create(analysis(1, survey.id, 1.0)).await?;
        let newest = analysis_repo.create(analysis(1, survey.id, 2.0)).await?;

        let latest = analysis_repo.get_latest_by_facility(1).await?;

        assert_eq!(latest.map(|a| a.id), Some(newest.id));

        Ok(())
    }

    /// Expect None when the facility has no analysis
    #[tokio::test]
    async fn returns_none_without_analysis() -> Result<(), TestError> {
        let test = TestBuilder::new().with_all_tables().build().await?;

        let analysis_repo = TechnoEconomicRepository::new(&test.db);
        let result = analysis_repo.get_latest_by_facility(1).await;

        assert!(matches!(result, Ok(None)));

        Ok(())
    }

    /// Expect Error when the referenced survey does not exist
    #[tokio::test]
    async fn fails_for_nonexistent_survey() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .with_mock_facility("Clinic")
            .build()
            .await?;

        let analysis_repo = TechnoEconomicRepository::new(&test.db);
        let result = analysis_repo.create(analysis(1, 99, 1.0)).await;

        assert!(result.is_err());

        Ok(())
    }
}
