use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType, SystemStatus};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::maintenance::{MaintenanceInterval, OptimizeAllDto, OptimizeResultDto},
    server::{
        data::{
            maintenance_record::{MaintenanceRecordRepository, NewMaintenanceRecord},
            solar_system::{MaintenanceDatesUpdate, SolarSystemRepository},
        },
        error::{not_found::NotFoundError, Error},
        service::maintenance::assess,
    },
};

/// Creates pending maintenance records for systems whose assessment calls for a visit.
pub struct MaintenanceScheduler<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MaintenanceScheduler<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assesses one system and schedules its next visit if needed.
    ///
    /// Only ACTIVE systems are scheduled. No record is created while an open record of
    /// the recommended type already exists. The system's next maintenance date is
    /// updated either way, and an EMERGENCY recommendation puts the system into
    /// MAINTENANCE.
    ///
    /// # Returns
    /// - `Ok(OptimizeResultDto)` - With the created record, if any
    /// - `Err(Error::NotFoundError)` - The system does not exist
    /// - `Err(Error::JsonError)` - Stored performance metrics are malformed
    pub async fn optimize(&self, system_id: i32) -> Result<OptimizeResultDto, Error> {
        let now = Utc::now().naive_utc();
        let txn = self.db.begin().await?;

        let system_repo = SolarSystemRepository::new(&txn);
        let record_repo = MaintenanceRecordRepository::new(&txn);

        let system = system_repo
            .get_by_id(system_id)
            .await?
            .ok_or(NotFoundError::SolarSystem(system_id))?;

        if system.status != SystemStatus::Active {
            tracing::debug!(
                "Skipping maintenance scheduling for solar system {} with status {:?}",
                system_id,
                system.status
            );

            return Ok(OptimizeResultDto {
                system_id,
                scheduled: None,
            });
        }

        let status = assess(&txn, &system, now).await?.status;
        let recommended = status.recommended_type;

        let mut scheduled = None;
        if status.should_schedule
            && record_repo.count_open_by_type(system_id, recommended).await? == 0
        {
            let follow_up = status.next_maintenance_date
                + Duration::days(MaintenanceInterval::from(recommended).days());

            let record = record_repo
                .create(NewMaintenanceRecord {
                    solar_system_id: system_id,
                    maintenance_date: status.next_maintenance_date,
                    maintenance_type: recommended,
                    maintenance_status: MaintenanceStatus::Pending,
                    description: Some(format!(
                        "Scheduled {:?} maintenance: risk {:?}, health score {}",
                        recommended, status.risk_level, status.health_score
                    )),
                    cost: 0.0,
                    labor_hours: 0.0,
                    downtime_hours: 0.0,
                    next_maintenance_date: Some(follow_up),
                })
                .await?;

            tracing::info!(
                "Scheduled {:?} maintenance for solar system {} on {}",
                recommended,
                system_id,
                status.next_maintenance_date
            );

            scheduled = Some(record.into());
        }

        system_repo
            .update_maintenance_dates(
                system,
                MaintenanceDatesUpdate {
                    last_maintenance_date: None,
                    next_maintenance_date: Some(status.next_maintenance_date),
                    status: (recommended == MaintenanceType::Emergency)
                        .then_some(SystemStatus::Maintenance),
                },
            )
            .await?;

        txn.commit().await?;

        Ok(OptimizeResultDto {
            system_id,
            scheduled,
        })
    }

    /// Runs [`Self::optimize`] for every ACTIVE system in ID order.
    ///
    /// Each system is committed on its own; the first failure stops the run and is
    /// returned, leaving systems already processed scheduled.
    pub async fn optimize_all(&self) -> Result<OptimizeAllDto, Error> {
        let system_ids = SolarSystemRepository::new(self.db)
            .get_ids_by_status(SystemStatus::Active)
            .await?;

        let mut results = Vec::with_capacity(system_ids.len());
        for system_id in system_ids {
            results.push(self.optimize(system_id).await?);
        }

        let scheduled = results.iter().filter(|r| r.scheduled.is_some()).count();
        tracing::info!(
            "Maintenance optimization evaluated {} systems, scheduled {}",
            results.len(),
            scheduled
        );

        Ok(OptimizeAllDto {
            evaluated: results.len(),
            results,
        })
    }
}
