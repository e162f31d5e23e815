//! Aggregated maintenance metrics of a single solar system.

use chrono::{Duration, NaiveDateTime};
use entity::sea_orm_active_enums::{MaintenanceStatus, MaintenanceType};

use crate::model::{
    maintenance::{MaintenanceTypeCounts, SystemMetricsDto},
    solar_system::PerformanceMetrics,
};

/// Days of history considered for downtime and availability.
const OBSERVATION_WINDOW_DAYS: i64 = 365;

impl SystemMetricsDto {
    /// Computes metrics from a system's full maintenance history.
    ///
    /// Downtime is measured over the last 365 days, or since the system was commissioned
    /// (installed, when no commissioning date is known) if that is more recent. Only
    /// completed records count towards downtime. Efficiency and performance ratio are
    /// `None` until the system has measured performance.
    pub fn from_records(
        system: &entity::solar_system::Model,
        performance: &PerformanceMetrics,
        records: &[entity::maintenance_record::Model],
        now: NaiveDateTime,
    ) -> Self {
        let mut records_by_type = MaintenanceTypeCounts::default();
        let mut completed_records = 0;
        let mut total_cost = 0.0;
        let mut total_labor_hours = 0.0;
        let mut total_downtime_hours = 0.0;
        let mut window_downtime_hours = 0.0;
        let mut last_completed: Option<NaiveDateTime> = None;

        let in_service_since = system
            .commissioning_date
            .unwrap_or(system.installation_date);
        let window_start =
            (now - Duration::days(OBSERVATION_WINDOW_DAYS)).max(in_service_since);

        for record in records {
            match record.maintenance_type {
                MaintenanceType::Routine => records_by_type.routine += 1,
                MaintenanceType::Corrective => records_by_type.corrective += 1,
                MaintenanceType::Preventive => records_by_type.preventive += 1,
                MaintenanceType::Emergency => records_by_type.emergency += 1,
                MaintenanceType::Seasonal => records_by_type.seasonal += 1,
            }

            total_cost += record.cost;
            total_labor_hours += record.labor_hours;
            total_downtime_hours += record.downtime_hours;

            if record.maintenance_status != MaintenanceStatus::Completed {
                continue;
            }

            completed_records += 1;
            if record.maintenance_date >= window_start && record.maintenance_date <= now {
                window_downtime_hours += record.downtime_hours.max(0.0);
            }

            let completed_at = record.completed_at.unwrap_or(record.maintenance_date);
            last_completed = last_completed.max(Some(completed_at));
        }

        let window_hours = (now - window_start).num_seconds() as f64 / 3600.0;
        let downtime_percentage = if window_hours > 0.0 {
            (window_downtime_hours / window_hours).clamp(0.0, 1.0)
        } else {
            0.0
        };

        let total_records = records.len();
        let average_cost = if total_records > 0 {
            total_cost / total_records as f64
        } else {
            0.0
        };

        let (efficiency, performance_ratio) = match performance {
            PerformanceMetrics::NotComputed => (None, None),
            PerformanceMetrics::Measured {
                efficiency,
                performance_ratio,
                ..
            } => (Some(*efficiency), Some(*performance_ratio)),
        };

        Self {
            total_records,
            completed_records,
            open_records: total_records - completed_records,
            records_by_type,
            total_cost,
            average_cost,
            total_labor_hours,
            total_downtime_hours,
            downtime_percentage,
            availability: 1.0 - downtime_percentage,
            efficiency,
            performance_ratio,
            last_maintenance_date: last_completed.or(system.last_maintenance_date),
        }
    }
}
