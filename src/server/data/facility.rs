use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::model::facility::CreateFacilityDto;

pub struct FacilityRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FacilityRepository<'a, C> {
    /// Creates a new instance of [`FacilityRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        facility: CreateFacilityDto,
    ) -> Result<entity::facility::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let facility = entity::facility::ActiveModel {
            name: ActiveValue::Set(facility.name),
            facility_type: ActiveValue::Set(facility.facility_type),
            location: ActiveValue::Set(facility.location),
            latitude: ActiveValue::Set(facility.latitude),
            longitude: ActiveValue::Set(facility.longitude),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        facility.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        facility_id: i32,
    ) -> Result<Option<entity::facility::Model>, DbErr> {
        entity::prelude::Facility::find_by_id(facility_id)
            .one(self.db)
            .await
    }

    /// Returns all facilities ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::facility::Model>, DbErr> {
        entity::prelude::Facility::find()
            .order_by_asc(entity::facility::Column::Id)
            .all(self.db)
            .await
    }
}
