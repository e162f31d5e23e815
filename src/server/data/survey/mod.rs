//! Survey, survey version and survey equipment repositories.

pub mod equipment;
pub mod version;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct SurveyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SurveyRepository<'a, C> {
    /// Creates a new instance of [`SurveyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        external_id: String,
        facility_id: i32,
        facility_data: serde_json::Value,
    ) -> Result<entity::survey::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let survey = entity::survey::ActiveModel {
            external_id: ActiveValue::Set(external_id),
            facility_id: ActiveValue::Set(facility_id),
            facility_data: ActiveValue::Set(facility_data),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        survey.insert(self.db).await
    }

    pub async fn find_by_external_id(
        &self,
        external_id: &str,
    ) -> Result<Option<entity::survey::Model>, DbErr> {
        entity::prelude::Survey::find()
            .filter(entity::survey::Column::ExternalId.eq(external_id))
            .one(self.db)
            .await
    }

    /// Returns the most recently created survey of a facility
    ///
    /// Surveys created within the same timestamp are ordered by ID, newest first.
    pub async fn get_latest_by_facility(
        &self,
        facility_id: i32,
    ) -> Result<Option<entity::survey::Model>, DbErr> {
        entity::prelude::Survey::find()
            .filter(entity::survey::Column::FacilityId.eq(facility_id))
            .order_by_desc(entity::survey::Column::CreatedAt)
            .order_by_desc(entity::survey::Column::Id)
            .one(self.db)
            .await
    }

    /// Replaces the snapshot stored on the survey row and bumps `updated_at`
    pub async fn update_facility_data(
        &self,
        survey: entity::survey::Model,
        facility_data: serde_json::Value,
    ) -> Result<entity::survey::Model, DbErr> {
        let mut survey_am = survey.into_active_model();
        survey_am.facility_data = ActiveValue::Set(facility_data);
        survey_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        survey_am.update(self.db).await
    }
}
