use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Fields of a maintenance record to insert.
#[derive(Clone, Debug, PartialEq)]
pub struct NewMaintenanceRecord {
    pub solar_system_id: i32,
    pub maintenance_date: NaiveDateTime,
    pub maintenance_type: MaintenanceType,
    pub maintenance_status: MaintenanceStatus,
    pub description: Option<String>,
    pub cost: f64,
    pub labor_hours: f64,
    pub downtime_hours: f64,
    pub next_maintenance_date: Option<NaiveDateTime>,
}

pub struct MaintenanceRecordRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceRecordRepository<'a, C> {
    /// Creates a new instance of [`MaintenanceRecordRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a record, setting `completed_at` when it is created as completed
    pub async fn create(
        &self,
        record: NewMaintenanceRecord,
    ) -> Result<entity::maintenance_record::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let completed_at = (record.maintenance_status == MaintenanceStatus::Completed)
            .then_some(record.maintenance_date);

        let record = entity::maintenance_record::ActiveModel {
            solar_system_id: ActiveValue::Set(record.solar_system_id),
            maintenance_date: ActiveValue::Set(record.maintenance_date),
            maintenance_type: ActiveValue::Set(record.maintenance_type),
            maintenance_status: ActiveValue::Set(record.maintenance_status),
            description: ActiveValue::Set(record.description),
            cost: ActiveValue::Set(record.cost),
            labor_hours: ActiveValue::Set(record.labor_hours),
            downtime_hours: ActiveValue::Set(record.downtime_hours),
            next_maintenance_date: ActiveValue::Set(record.next_maintenance_date),
            completed_at: ActiveValue::Set(completed_at),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        record.insert(self.db).await
    }

    /// Returns all records of a system, most recent maintenance date first
    pub async fn get_by_system(
        &self,
        solar_system_id: i32,
    ) -> Result<Vec<entity::maintenance_record::Model>, DbErr> {
        entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::SolarSystemId.eq(solar_system_id))
            .order_by_desc(entity::maintenance_record::Column::MaintenanceDate)
            .order_by_desc(entity::maintenance_record::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns a record only if it belongs to the given system
    pub async fn get_for_system(
        &self,
        solar_system_id: i32,
        record_id: i32,
    ) -> Result<Option<entity::maintenance_record::Model>, DbErr> {
        entity::prelude::MaintenanceRecord::find_by_id(record_id)
            .filter(entity::maintenance_record::Column::SolarSystemId.eq(solar_system_id))
            .one(self.db)
            .await
    }

    /// Returns PENDING and IN_PROGRESS records of a system, earliest maintenance date first
    pub async fn get_open_by_system(
        &self,
        solar_system_id: i32,
    ) -> Result<Vec<entity::maintenance_record::Model>, DbErr> {
        entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::SolarSystemId.eq(solar_system_id))
            .filter(
                entity::maintenance_record::Column::MaintenanceStatus
                    .ne(MaintenanceStatus::Completed),
            )
            .order_by_asc(entity::maintenance_record::Column::MaintenanceDate)
            .order_by_asc(entity::maintenance_record::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts open records of the given type for a system
    pub async fn count_open_by_type(
        &self,
        solar_system_id: i32,
        maintenance_type: MaintenanceType,
    ) -> Result<u64, DbErr> {
        entity::prelude::MaintenanceRecord::find()
            .filter(entity::maintenance_record::Column::SolarSystemId.eq(solar_system_id))
            .filter(entity::maintenance_record::Column::MaintenanceType.eq(maintenance_type))
            .filter(
                entity::maintenance_record::Column::MaintenanceStatus
                    .ne(MaintenanceStatus::Completed),
            )
            .count(self.db)
            .await
    }

    /// Sets the status of a record, stamping `completed_at` when it becomes COMPLETED
    pub async fn update_status(
        &self,
        record: entity::maintenance_record::Model,
        status: MaintenanceStatus,
        now: NaiveDateTime,
    ) -> Result<entity::maintenance_record::Model, DbErr> {
        let mut record_am = record.into_active_model();
        record_am.maintenance_status = ActiveValue::Set(status);
        if status == MaintenanceStatus::Completed {
            record_am.completed_at = ActiveValue::Set(Some(now));
        }
        record_am.updated_at = ActiveValue::Set(now);

        record_am.update(self.db).await
    }
}
