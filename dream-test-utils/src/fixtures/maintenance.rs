use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn maintenance<'a>(&'a mut self) -> MaintenanceFixtures<'a> {
        MaintenanceFixtures { test: self }
    }
}

pub struct MaintenanceFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> MaintenanceFixtures<'a> {
    /// Insert a maintenance record costing 100 with 2 labor hours and no downtime.
    ///
    /// Completed records get `completed_at` set to the maintenance date.
    pub async fn insert_mock_record(
        &self,
        solar_system_id: i32,
        maintenance_type: MaintenanceType,
        status: MaintenanceStatus,
        maintenance_date: NaiveDateTime,
    ) -> Result<entity::maintenance_record::Model, TestError> {
        self.insert_record_with_downtime(
            solar_system_id,
            maintenance_type,
            status,
            maintenance_date,
            0.0,
        )
        .await
    }

    /// Insert a maintenance record with the given downtime hours.
    pub async fn insert_record_with_downtime(
        &self,
        solar_system_id: i32,
        maintenance_type: MaintenanceType,
        status: MaintenanceStatus,
        maintenance_date: NaiveDateTime,
        downtime_hours: f64,
    ) -> Result<entity::maintenance_record::Model, TestError> {
        let now = Utc::now().naive_utc();
        let completed_at = (status == MaintenanceStatus::Completed).then_some(maintenance_date);

        Ok(
            entity::prelude::MaintenanceRecord::insert(entity::maintenance_record::ActiveModel {
                solar_system_id: ActiveValue::Set(solar_system_id),
                maintenance_date: ActiveValue::Set(maintenance_date),
                maintenance_type: ActiveValue::Set(maintenance_type),
                maintenance_status: ActiveValue::Set(status),
                description: ActiveValue::Set(None),
                cost: ActiveValue::Set(100.0),
                labor_hours: ActiveValue::Set(2.0),
                downtime_hours: ActiveValue::Set(downtime_hours),
                next_maintenance_date: ActiveValue::Set(None),
                completed_at: ActiveValue::Set(completed_at),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
