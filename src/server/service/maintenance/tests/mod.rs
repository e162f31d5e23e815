mod optimize;

use chrono::{Duration, Utc};
use dream_test_utils::prelude::*;
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType, SystemStatus};

use crate::server::{
    data::solar_system::SolarSystemRepository,
    error::{not_found::NotFoundError, validation::ValidationError, Error},
    service::maintenance::{scheduler::MaintenanceScheduler, MaintenanceService},
};

async fn setup_with_system() -> Result<(TestContext, entity::solar_system::Model), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_facility("Clinic")
        .build()
        .await?;
    let system = test.solar_system().insert_mock_solar_system(1).await?;

    Ok((test, system))
}
