use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn facility<'a>(&'a mut self) -> FacilityFixtures<'a> {
        FacilityFixtures { test: self }
    }
}

pub struct FacilityFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> FacilityFixtures<'a> {
    /// Insert a health clinic facility with the given name.
    pub async fn insert_mock_facility(
        &self,
        name: &str,
    ) -> Result<entity::facility::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Facility::insert(entity::facility::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                facility_type: ActiveValue::Set("health_clinic".to_string()),
                location: ActiveValue::Set("Test District".to_string()),
                latitude: ActiveValue::Set(Some(-1.2921)),
                longitude: ActiveValue::Set(Some(36.8219)),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
