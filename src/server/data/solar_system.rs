use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::SystemStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::solar_system::{CreateSolarSystemDto, UpdateSolarSystemDto};

/// Maintenance bookkeeping fields written back onto a solar system.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MaintenanceDatesUpdate {
    pub last_maintenance_date: Option<NaiveDateTime>,
    pub next_maintenance_date: Option<NaiveDateTime>,
    pub status: Option<SystemStatus>,
}

pub struct SolarSystemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SolarSystemRepository<'a, C> {
    /// Creates a new instance of [`SolarSystemRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        system: CreateSolarSystemDto,
        performance_metrics: serde_json::Value,
    ) -> Result<entity::solar_system::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let system = entity::solar_system::ActiveModel {
            facility_id: ActiveValue::Set(system.facility_id),
            name: ActiveValue::Set(system.name),
            capacity_kw: ActiveValue::Set(system.capacity_kw),
            installation_date: ActiveValue::Set(system.installation_date),
            commissioning_date: ActiveValue::Set(system.commissioning_date),
            status: ActiveValue::Set(system.status.unwrap_or(SystemStatus::Active)),
            last_maintenance_date: ActiveValue::Set(None),
            next_maintenance_date: ActiveValue::Set(None),
            performance_metrics: ActiveValue::Set(performance_metrics),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        system.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        system_id: i32,
    ) -> Result<Option<entity::solar_system::Model>, DbErr> {
        entity::prelude::SolarSystem::find_by_id(system_id)
            .one(self.db)
            .await
    }

    /// Returns systems ordered by ID, optionally limited to one facility
    pub async fn get_all(
        &self,
        facility_id: Option<i32>,
    ) -> Result<Vec<entity::solar_system::Model>, DbErr> {
        let mut query = entity::prelude::SolarSystem::find();

        if let Some(facility_id) = facility_id {
            query = query.filter(entity::solar_system::Column::FacilityId.eq(facility_id));
        }

        query
            .order_by_asc(entity::solar_system::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the IDs of all systems with the given status, ordered by ID
    pub async fn get_ids_by_status(&self, status: SystemStatus) -> Result<Vec<i32>, DbErr> {
        let systems = entity::prelude::SolarSystem::find()
            .filter(entity::solar_system::Column::Status.eq(status))
            .order_by_asc(entity::solar_system::Column::Id)
            .all(self.db)
            .await?;

        Ok(systems.into_iter().map(|system| system.id).collect())
    }

    /// Applies the fields present in `update`
    ///
    /// `performance_metrics` is passed pre-serialized so the caller controls its format.
    pub async fn update(
        &self,
        system: entity::solar_system::Model,
        update: UpdateSolarSystemDto,
        performance_metrics: Option<serde_json::Value>,
    ) -> Result<entity::solar_system::Model, DbErr> {
        let mut system_am = system.into_active_model();

        if let Some(name) = update.name {
            system_am.name = ActiveValue::Set(name);
        }
        if let Some(capacity_kw) = update.capacity_kw {
            system_am.capacity_kw = ActiveValue::Set(capacity_kw);
        }
        if let Some(status) = update.status {
            system_am.status = ActiveValue::Set(status);
        }
        if let Some(commissioning_date) = update.commissioning_date {
            system_am.commissioning_date = ActiveValue::Set(Some(commissioning_date));
        }
        if let Some(performance_metrics) = performance_metrics {
            system_am.performance_metrics = ActiveValue::Set(performance_metrics);
        }
        system_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        system_am.update(self.db).await
    }

    /// Writes maintenance dates and status, leaving fields set to `None` untouched
    pub async fn update_maintenance_dates(
        &self,
        system: entity::solar_system::Model,
        update: MaintenanceDatesUpdate,
    ) -> Result<entity::solar_system::Model, DbErr> {
        let mut system_am = system.into_active_model();

        if let Some(last) = update.last_maintenance_date {
            system_am.last_maintenance_date = ActiveValue::Set(Some(last));
        }
        if let Some(next) = update.next_maintenance_date {
            system_am.next_maintenance_date = ActiveValue::Set(Some(next));
        }
        if let Some(status) = update.status {
            system_am.status = ActiveValue::Set(status);
        }
        system_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        system_am.update(self.db).await
    }

    /// Deletes a system; its maintenance records are removed by cascade
    ///
    /// Returns OK regardless of the system existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, system_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SolarSystem::delete_by_id(system_id)
            .exec(self.db)
            .await
    }
}
