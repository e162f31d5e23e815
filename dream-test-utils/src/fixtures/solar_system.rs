use chrono::{Duration, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::SystemStatus;
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::Value;

use crate::{error::TestError, fixtures::factory, TestContext};

impl TestContext {
    pub fn solar_system<'a>(&'a mut self) -> SolarSystemFixtures<'a> {
        SolarSystemFixtures { test: self }
    }
}

pub struct SolarSystemFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> SolarSystemFixtures<'a> {
    /// Insert an active 5 kW system installed 400 days ago without measured performance.
    pub async fn insert_mock_solar_system(
        &self,
        facility_id: i32,
    ) -> Result<entity::solar_system::Model, TestError> {
        let installation_date = Utc::now().naive_utc() - Duration::days(400);

        self.insert_solar_system(
            facility_id,
            SystemStatus::Active,
            factory::not_computed_performance_metrics(),
            installation_date,
        )
        .await
    }

    /// Insert a system with explicit status, performance metrics and installation date.
    ///
    /// `performance_metrics` is stored as given, so tests can insert values that fail
    /// to deserialize.
    pub async fn insert_solar_system(
        &self,
        facility_id: i32,
        status: SystemStatus,
        performance_metrics: Value,
        installation_date: NaiveDateTime,
    ) -> Result<entity::solar_system::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::SolarSystem::insert(entity::solar_system::ActiveModel {
                facility_id: ActiveValue::Set(facility_id),
                name: ActiveValue::Set(format!("System {}", facility_id)),
                capacity_kw: ActiveValue::Set(5.0),
                installation_date: ActiveValue::Set(installation_date),
                commissioning_date: ActiveValue::Set(None),
                status: ActiveValue::Set(status),
                last_maintenance_date: ActiveValue::Set(None),
                next_maintenance_date: ActiveValue::Set(None),
                performance_metrics: ActiveValue::Set(performance_metrics),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
