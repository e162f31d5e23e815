use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct SurveyVersionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SurveyVersionRepository<'a, C> {
    /// Creates a new instance of [`SurveyVersionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        survey_id: i32,
        version_number: i32,
        facility_data: serde_json::Value,
    ) -> Result<entity::survey_version::Model, DbErr> {
        let version = entity::survey_version::ActiveModel {
            survey_id: ActiveValue::Set(survey_id),
            version_number: ActiveValue::Set(version_number),
            facility_data: ActiveValue::Set(facility_data),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        version.insert(self.db).await
    }

    /// Returns the highest version of a survey
    pub async fn get_latest(
        &self,
        survey_id: i32,
    ) -> Result<Option<entity::survey_version::Model>, DbErr> {
        entity::prelude::SurveyVersion::find()
            .filter(entity::survey_version::Column::SurveyId.eq(survey_id))
            .order_by_desc(entity::survey_version::Column::VersionNumber)
            .one(self.db)
            .await
    }

    /// Returns every version of a survey, oldest first
    pub async fn get_all(
        &self,
        survey_id: i32,
    ) -> Result<Vec<entity::survey_version::Model>, DbErr> {
        entity::prelude::SurveyVersion::find()
            .filter(entity::survey_version::Column::SurveyId.eq(survey_id))
            .order_by_asc(entity::survey_version::Column::VersionNumber)
            .all(self.db)
            .await
    }
}
