use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};
use serde_json::Value;

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn survey<'a>(&'a mut self) -> SurveyFixtures<'a> {
        SurveyFixtures { test: self }
    }
}

pub struct SurveyFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> SurveyFixtures<'a> {
    /// Insert a survey together with its first version.
    ///
    /// No equipment rows are written; the snapshot lives in `facility_data`.
    pub async fn insert_mock_survey(
        &self,
        facility_id: i32,
        external_id: &str,
        facility_data: Value,
    ) -> Result<(entity::survey::Model, entity::survey_version::Model), TestError> {
        let now = Utc::now().naive_utc();

        let survey = entity::prelude::Survey::insert(entity::survey::ActiveModel {
            external_id: ActiveValue::Set(external_id.to_string()),
            facility_id: ActiveValue::Set(facility_id),
            facility_data: ActiveValue::Set(facility_data.clone()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?;

        let version = entity::prelude::SurveyVersion::insert(entity::survey_version::ActiveModel {
            survey_id: ActiveValue::Set(survey.id),
            version_number: ActiveValue::Set(1),
            facility_data: ActiveValue::Set(facility_data),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?;

        Ok((survey, version))
    }
}
