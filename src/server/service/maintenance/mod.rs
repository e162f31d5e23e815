//! Maintenance records, system health assessment and scheduling.
//!
//! Every assessment loads the system's records once, builds a [`SystemMetricsDto`] from
//! them ([`metrics`]) and derives health, risk and the next visit from those metrics
//! ([`health`]). [`scheduler::MaintenanceScheduler`] turns assessments into pending
//! records.

pub mod health;
pub mod metrics;
pub mod scheduler;

use chrono::{Duration, NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType, SystemStatus};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        maintenance::{
            CreateMaintenanceRecordDto, MaintenanceInterval, MaintenanceRecordDto,
            MaintenanceStatusDto, ScheduleDto, SystemMetricsDto,
        },
        solar_system::PerformanceMetrics,
    },
    server::{
        data::{
            maintenance_record::{MaintenanceRecordRepository, NewMaintenanceRecord},
            solar_system::{MaintenanceDatesUpdate, SolarSystemRepository},
        },
        error::{not_found::NotFoundError, validation::ValidationError, Error},
    },
};

/// Assessment of one system together with the records it was computed from.
pub(crate) struct Assessment {
    pub status: MaintenanceStatusDto,
    pub records: Vec<entity::maintenance_record::Model>,
}

/// Assesses a system's health and maintenance needs at `now`.
///
/// Fails with `Error::JsonError` when the stored performance metrics are malformed.
pub(crate) async fn assess<C: ConnectionTrait>(
    db: &C,
    system: &entity::solar_system::Model,
    now: NaiveDateTime,
) -> Result<Assessment, Error> {
    let performance: PerformanceMetrics =
        serde_json::from_value(system.performance_metrics.clone())?;
    let records = MaintenanceRecordRepository::new(db)
        .get_by_system(system.id)
        .await?;

    let metrics = SystemMetricsDto::from_records(system, &performance, &records, now);
    let health_score = health::health_score(&metrics);
    let risk_level = health::risk_level(health_score);
    let recommended_type = health::recommended_type(health_score, risk_level, metrics.open_records);
    let next_maintenance_date = health::next_maintenance_date(
        system,
        metrics.last_maintenance_date,
        recommended_type,
        now,
    );
    let should_schedule =
        health::should_schedule_maintenance(system, &metrics, health_score, risk_level, now);

    Ok(Assessment {
        status: MaintenanceStatusDto {
            system_id: system.id,
            health_score,
            risk_level,
            recommended_type,
            next_maintenance_date,
            should_schedule,
            metrics,
        },
        records,
    })
}

/// Checks a record status change against the allowed transitions.
///
/// PENDING may move to IN_PROGRESS or straight to COMPLETED, IN_PROGRESS may move to
/// COMPLETED, and COMPLETED is final.
pub fn check_transition(
    record_id: i32,
    from: MaintenanceStatus,
    to: MaintenanceStatus,
) -> Result<(), ValidationError> {
    let allowed = matches!(
        (from, to),
        (MaintenanceStatus::Pending, MaintenanceStatus::InProgress)
            | (MaintenanceStatus::Pending, MaintenanceStatus::Completed)
            | (MaintenanceStatus::InProgress, MaintenanceStatus::Completed)
    );

    if !allowed {
        return Err(ValidationError::InvalidStatusTransition { record_id, from, to });
    }

    Ok(())
}

// Completion only moves the system's last visit forward, never back
fn completion_update(
    system: &entity::solar_system::Model,
    completed_at: NaiveDateTime,
    next: NaiveDateTime,
) -> MaintenanceDatesUpdate {
    let mut update = MaintenanceDatesUpdate::default();
    if system
        .last_maintenance_date
        .is_none_or(|last| last < completed_at)
    {
        update.last_maintenance_date = Some(completed_at);
        update.next_maintenance_date = Some(next);
    }

    update
}

fn is_open(record: &entity::maintenance_record::Model) -> bool {
    record.maintenance_status != MaintenanceStatus::Completed
}

/// Service managing maintenance records and maintenance status of solar systems.
pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records maintenance for a system.
    ///
    /// Records default to PENDING. A record created as COMPLETED updates the system's
    /// last and next maintenance dates; an open EMERGENCY record takes an active system
    /// into MAINTENANCE. Both writes happen in one transaction.
    ///
    /// # Returns
    /// - `Ok(MaintenanceRecordDto)` - The stored record
    /// - `Err(Error::NotFoundError)` - The system does not exist
    /// - `Err(Error::ValidationError)` - Negative or non-finite cost, labor or downtime
    pub async fn create_record(
        &self,
        system_id: i32,
        record: CreateMaintenanceRecordDto,
    ) -> Result<MaintenanceRecordDto, Error> {
        for (field, value) in [
            ("cost", record.cost),
            ("labor_hours", record.labor_hours),
            ("downtime_hours", record.downtime_hours),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(
                    ValidationError::invalid(field, "must be a finite number of at least 0").into(),
                );
            }
        }

        let status = record.maintenance_status.unwrap_or(MaintenanceStatus::Pending);
        let interval = record
            .recurrence
            .unwrap_or_else(|| MaintenanceInterval::from(record.maintenance_type));
        let next_maintenance_date = record.maintenance_date + Duration::days(interval.days());

        let txn = self.db.begin().await?;

        let system_repo = SolarSystemRepository::new(&txn);
        let system = system_repo
            .get_by_id(system_id)
            .await?
            .ok_or(NotFoundError::SolarSystem(system_id))?;

        let created = MaintenanceRecordRepository::new(&txn)
            .create(NewMaintenanceRecord {
                solar_system_id: system_id,
                maintenance_date: record.maintenance_date,
                maintenance_type: record.maintenance_type,
                maintenance_status: status,
                description: record.description,
                cost: record.cost,
                labor_hours: record.labor_hours,
                downtime_hours: record.downtime_hours,
                next_maintenance_date: Some(next_maintenance_date),
            })
            .await?;

        let mut update = if status == MaintenanceStatus::Completed {
            completion_update(&system, record.maintenance_date, next_maintenance_date)
        } else {
            MaintenanceDatesUpdate::default()
        };
        if record.maintenance_type == MaintenanceType::Emergency
            && status != MaintenanceStatus::Completed
            && system.status == SystemStatus::Active
        {
            update.status = Some(SystemStatus::Maintenance);
        }
        if update != MaintenanceDatesUpdate::default() {
            system_repo.update_maintenance_dates(system, update).await?;
        }

        txn.commit().await?;

        Ok(created.into())
    }

    /// Returns a system's records, most recent first.
    pub async fn get_records(&self, system_id: i32) -> Result<Vec<MaintenanceRecordDto>, Error> {
        self.get_system(system_id).await?;

        let records = MaintenanceRecordRepository::new(self.db)
            .get_by_system(system_id)
            .await?;

        Ok(records.into_iter().map(MaintenanceRecordDto::from).collect())
    }

    /// Moves a record to a new status.
    ///
    /// Completing a record stamps its completion time and, when now is later than the
    /// system's last maintenance date, moves that date to now and the next maintenance
    /// date to the record's follow-up date. Completing an EMERGENCY record returns a
    /// system in MAINTENANCE to ACTIVE once no open EMERGENCY record remains.
    ///
    /// # Returns
    /// - `Ok(MaintenanceRecordDto)` - The updated record
    /// - `Err(Error::NotFoundError)` - System or record does not exist
    /// - `Err(Error::ValidationError)` - Transition not allowed
    pub async fn update_record_status(
        &self,
        system_id: i32,
        record_id: i32,
        status: MaintenanceStatus,
    ) -> Result<MaintenanceRecordDto, Error> {
        let now = Utc::now().naive_utc();
        let txn = self.db.begin().await?;

        let system_repo = SolarSystemRepository::new(&txn);
        let record_repo = MaintenanceRecordRepository::new(&txn);

        let system = system_repo
            .get_by_id(system_id)
            .await?
            .ok_or(NotFoundError::SolarSystem(system_id))?;
        let record = record_repo
            .get_for_system(system_id, record_id)
            .await?
            .ok_or(NotFoundError::MaintenanceRecord {
                system_id,
                record_id,
            })?;

        check_transition(record_id, record.maintenance_status, status)?;

        let record = record_repo.update_status(record, status, now).await?;

        if status == MaintenanceStatus::Completed {
            let next = record.next_maintenance_date.unwrap_or_else(|| {
                now + Duration::days(MaintenanceInterval::from(record.maintenance_type).days())
            });

            let mut update = completion_update(&system, now, next);
            if record.maintenance_type == MaintenanceType::Emergency
                && system.status == SystemStatus::Maintenance
                && record_repo
                    .count_open_by_type(system_id, MaintenanceType::Emergency)
                    .await?
                    == 0
            {
                update.status = Some(SystemStatus::Active);
            }

            if update != MaintenanceDatesUpdate::default() {
                system_repo.update_maintenance_dates(system, update).await?;
            }
        }

        txn.commit().await?;

        tracing::debug!(
            "Maintenance record {} of solar system {} moved to {:?}",
            record.id,
            system_id,
            record.maintenance_status
        );

        Ok(record.into())
    }

    /// Current maintenance status of a system and its open records.
    pub async fn get_schedule(&self, system_id: i32) -> Result<ScheduleDto, Error> {
        let system = self.get_system(system_id).await?;

        let assessment = assess(self.db, &system, Utc::now().naive_utc()).await?;

        let mut open_records: Vec<MaintenanceRecordDto> = assessment
            .records
            .into_iter()
            .filter(is_open)
            .map(MaintenanceRecordDto::from)
            .collect();
        open_records.sort_by_key(|record| (record.maintenance_date, record.id));

        Ok(ScheduleDto {
            status: assessment.status,
            open_records,
        })
    }

    /// Maintenance metrics of a system.
    pub async fn get_analytics(&self, system_id: i32) -> Result<SystemMetricsDto, Error> {
        let system = self.get_system(system_id).await?;

        let assessment = assess(self.db, &system, Utc::now().naive_utc()).await?;

        Ok(assessment.status.metrics)
    }

    async fn get_system(&self, system_id: i32) -> Result<entity::solar_system::Model, Error> {
        Ok(SolarSystemRepository::new(self.db)
            .get_by_id(system_id)
            .await?
            .ok_or(NotFoundError::SolarSystem(system_id))?)
    }
}

#[cfg(test)]
mod tests;
