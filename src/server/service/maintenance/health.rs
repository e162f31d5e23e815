//! Health score, risk classification and maintenance planning rules.

use chrono::{Duration, NaiveDateTime};
use entity::sea_orm_active_enums::MaintenanceType;

use crate::model::maintenance::{MaintenanceInterval, RiskLevel, SystemMetricsDto};

const EFFICIENCY_WEIGHT: f64 = 0.4;
const AVAILABILITY_WEIGHT: f64 = 0.3;
const PERFORMANCE_RATIO_WEIGHT: f64 = 0.2;
const UPTIME_WEIGHT: f64 = 0.1;

/// Scores below this call for corrective maintenance.
const CORRECTIVE_THRESHOLD: u8 = 70;
/// Open records at which routine work is bundled into a seasonal visit.
const SEASONAL_OPEN_RECORDS: usize = 5;
/// Earliest a non-emergency visit is planned after today.
const LEAD_TIME_DAYS: i64 = 7;
/// Longest a system goes without maintenance before a visit is due.
const MAX_DAYS_BETWEEN_VISITS: i64 = 30;

/// Weighted health score from 0 to 100.
///
/// Efficiency and performance ratio only take part once measured; when missing their
/// weight is dropped and the remaining weights are rescaled.
pub fn health_score(metrics: &SystemMetricsDto) -> u8 {
    let inputs = [
        (metrics.efficiency, EFFICIENCY_WEIGHT),
        (Some(metrics.availability), AVAILABILITY_WEIGHT),
        (metrics.performance_ratio, PERFORMANCE_RATIO_WEIGHT),
        (Some(1.0 - metrics.downtime_percentage), UPTIME_WEIGHT),
    ];

    let (sum, total_weight) = inputs
        .into_iter()
        .filter_map(|(value, weight)| value.map(|v| (unit(v), weight)))
        .fold((0.0, 0.0), |(sum, total), (value, weight)| {
            (sum + value * weight, total + weight)
        });

    if total_weight == 0.0 {
        return 0;
    }

    (100.0 * sum / total_weight).round().clamp(0.0, 100.0) as u8
}

pub fn risk_level(health_score: u8) -> RiskLevel {
    match health_score {
        90.. => RiskLevel::Low,
        70..=89 => RiskLevel::Moderate,
        50..=69 => RiskLevel::High,
        _ => RiskLevel::Critical,
    }
}

/// Type of maintenance to schedule next.
pub fn recommended_type(health_score: u8, risk: RiskLevel, open_records: usize) -> MaintenanceType {
    if risk == RiskLevel::Critical {
        MaintenanceType::Emergency
    } else if health_score < CORRECTIVE_THRESHOLD {
        MaintenanceType::Corrective
    } else if open_records >= SEASONAL_OPEN_RECORDS {
        MaintenanceType::Seasonal
    } else {
        MaintenanceType::Routine
    }
}

/// Date the next visit of `maintenance_type` should take place.
///
/// Counts the type's interval from the last maintenance, or from commissioning or
/// installation for systems never maintained. Visits are never planned sooner than a
/// week out, except emergencies which are due immediately.
pub fn next_maintenance_date(
    system: &entity::solar_system::Model,
    last_maintenance_date: Option<NaiveDateTime>,
    maintenance_type: MaintenanceType,
    now: NaiveDateTime,
) -> NaiveDateTime {
    if maintenance_type == MaintenanceType::Emergency {
        return now;
    }

    let base = last_maintenance_date
        .or(system.commissioning_date)
        .unwrap_or(system.installation_date);
    let interval = MaintenanceInterval::from(maintenance_type);

    (base + Duration::days(interval.days())).max(now + Duration::days(LEAD_TIME_DAYS))
}

/// Whether the system needs a visit scheduled now.
pub fn should_schedule_maintenance(
    system: &entity::solar_system::Model,
    metrics: &SystemMetricsDto,
    health_score: u8,
    risk: RiskLevel,
    now: NaiveDateTime,
) -> bool {
    let overdue = system
        .next_maintenance_date
        .is_some_and(|next| next < now);

    let since = metrics
        .last_maintenance_date
        .or(system.commissioning_date)
        .unwrap_or(system.installation_date);
    let long_since_last_visit = now - since >= Duration::days(MAX_DAYS_BETWEEN_VISITS);

    overdue
        || risk == RiskLevel::Critical
        || health_score < CORRECTIVE_THRESHOLD
        || metrics.total_records == 0
        || long_since_last_visit
}

fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use entity::sea_orm_active_enums::SystemStatus;

    use super::*;
    use crate::model::maintenance::MaintenanceTypeCounts;

    fn metrics(
        efficiency: Option<f64>,
        performance_ratio: Option<f64>,
        downtime: f64,
    ) -> SystemMetricsDto {
        SystemMetricsDto {
            total_records: 1,
            completed_records: 1,
            open_records: 0,
            records_by_type: MaintenanceTypeCounts::default(),
            total_cost: 0.0,
            average_cost: 0.0,
            total_labor_hours: 0.0,
            total_downtime_hours: 0.0,
            downtime_percentage: downtime,
            availability: 1.0 - downtime,
            efficiency,
            performance_ratio,
            last_maintenance_date: None,
        }
    }

    fn system(now: NaiveDateTime) -> entity::solar_system::Model {
        entity::solar_system::Model {
            id: 1,
            facility_id: 1,
            name: "Array".to_string(),
            capacity_kw: 5.0,
            installation_date: now - Duration::days(400),
            commissioning_date: None,
            status: SystemStatus::Active,
            last_maintenance_date: None,
            next_maintenance_date: None,
            performance_metrics: serde_json::json!({ "state": "not_computed" }),
            created_at: now,
            updated_at: now,
        }
    }

    /// Expect the weighted combination of all four inputs
    #[test]
    fn scores_measured_system() {
        assert_eq!(health_score(&metrics(Some(0.9), Some(0.8), 0.05)), 90);
    }

    /// Expect an unmeasured system without downtime to score full health
    #[test]
    fn renormalises_without_measurements() {
        assert_eq!(health_score(&metrics(None, None, 0.0)), 100);
        assert_eq!(health_score(&metrics(None, None, 0.5)), 50);
    }

    /// Expect the score never to increase as downtime grows
    #[test]
    fn score_is_non_increasing_in_downtime() {
        let mut previous = u8::MAX;
        for step in 0..=10 {
            let score = health_score(&metrics(Some(0.7), Some(0.6), step as f64 / 10.0));
            assert!(score <= previous);
            previous = score;
        }
    }

    /// Expect out of range inputs to be clamped
    #[test]
    fn clamps_inputs() {
        assert_eq!(health_score(&metrics(Some(1.5), Some(2.0), -1.0)), 100);
        assert_eq!(health_score(&metrics(Some(-1.0), Some(f64::NAN), 1.0)), 0);
    }

    /// Expect risk thresholds at 90, 70 and 50
    #[test]
    fn classifies_risk() {
        assert_eq!(risk_level(100), RiskLevel::Low);
        assert_eq!(risk_level(90), RiskLevel::Low);
        assert_eq!(risk_level(89), RiskLevel::Moderate);
        assert_eq!(risk_level(70), RiskLevel::Moderate);
        assert_eq!(risk_level(69), RiskLevel::High);
        assert_eq!(risk_level(50), RiskLevel::High);
        assert_eq!(risk_level(49), RiskLevel::Critical);
    }

    /// Expect the recommendation to escalate with risk and backlog
    #[test]
    fn recommends_type() {
        assert_eq!(
            recommended_type(40, RiskLevel::Critical, 0),
            MaintenanceType::Emergency
        );
        assert_eq!(
            recommended_type(60, RiskLevel::High, 0),
            MaintenanceType::Corrective
        );
        assert_eq!(
            recommended_type(95, RiskLevel::Low, 5),
            MaintenanceType::Seasonal
        );
        assert_eq!(
            recommended_type(95, RiskLevel::Low, 4),
            MaintenanceType::Routine
        );
    }

    /// Expect the interval to count from the last maintenance
    #[test]
    fn plans_from_last_maintenance() {
        let now = Utc::now().naive_utc();
        let last = now - Duration::days(10);

        let next = next_maintenance_date(&system(now), Some(last), MaintenanceType::Preventive, now);

        assert_eq!(next, last + Duration::days(90));
    }

    /// Expect overdue plans to be pushed a week out
    #[test]
    fn enforces_lead_time() {
        let now = Utc::now().naive_utc();

        let next = next_maintenance_date(&system(now), None, MaintenanceType::Routine, now);

        assert_eq!(next, now + Duration::days(7));
    }

    /// Expect emergencies to be due immediately
    #[test]
    fn emergencies_are_due_now() {
        let now = Utc::now().naive_utc();

        let next = next_maintenance_date(&system(now), None, MaintenanceType::Emergency, now);

        assert_eq!(next, now);
    }

    /// Expect a recently maintained healthy system not to need a visit
    #[test]
    fn skips_recently_maintained_system() {
        let now = Utc::now().naive_utc();
        let mut m = metrics(None, None, 0.0);
        m.last_maintenance_date = Some(now - Duration::days(5));
        let mut s = system(now);
        s.next_maintenance_date = Some(now + Duration::days(25));

        assert!(!should_schedule_maintenance(&s, &m, 100, RiskLevel::Low, now));
    }

    /// Expect each trigger to request a visit on its own
    #[test]
    fn triggers_scheduling() {
        let now = Utc::now().naive_utc();
        let mut recent = metrics(None, None, 0.0);
        recent.last_maintenance_date = Some(now - Duration::days(5));
        let healthy = system(now);

        // Overdue
        let mut overdue = system(now);
        overdue.next_maintenance_date = Some(now - Duration::days(1));
        assert!(should_schedule_maintenance(&overdue, &recent, 100, RiskLevel::Low, now));

        // Poor health
        assert!(should_schedule_maintenance(&healthy, &recent, 60, RiskLevel::High, now));
        assert!(should_schedule_maintenance(&healthy, &recent, 40, RiskLevel::Critical, now));

        // No records
        let mut empty = recent.clone();
        empty.total_records = 0;
        assert!(should_schedule_maintenance(&healthy, &empty, 100, RiskLevel::Low, now));

        // Thirty days since last visit
        let mut stale = recent.clone();
        stale.last_maintenance_date = Some(now - Duration::days(30));
        assert!(should_schedule_maintenance(&healthy, &stale, 100, RiskLevel::Low, now));
    }
}
