//! Daily energy demand estimate from a facility survey.

use entity::sea_orm_active_enums::TimeOfDay;

use crate::model::survey::{DigitalConnectivity, Equipment, FacilityData, Infrastructure, OperationalHours};

/// Share of operating hours that count as peak sun hours.
const PEAK_HOURS_FACTOR: f64 = 0.85;

/// Estimates the facility's daily energy demand in kWh.
///
/// Each equipment entry contributes its rated load over its daily running hours, scaled
/// by how many days a week it is used and by a time-of-day factor. The total is then
/// scaled by the share of the day the facility operates and by an infrastructure factor.
/// Negative or non-finite survey values count as zero, so the result is never negative.
pub fn estimate_daily_usage(data: &FacilityData) -> f64 {
    let equipment_kwh: f64 = data.equipment.iter().map(equipment_daily_kwh).sum();

    let hours = &data.operational_hours;
    let operational_factor = (non_negative(hours.day) + non_negative(hours.night)) / 24.0;

    equipment_kwh * operational_factor * infrastructure_factor(&data.infrastructure)
}

/// Peak sun hours derived from the facility's operating hours.
pub fn peak_hours(hours: &OperationalHours) -> f64 {
    non_negative(hours.day).max(non_negative(hours.night)) * PEAK_HOURS_FACTOR
}

fn equipment_daily_kwh(equipment: &Equipment) -> f64 {
    let running_hours = non_negative(equipment.hours_per_day) + non_negative(equipment.hours_per_night);
    let weekly_share = non_negative(equipment.weekly_usage).min(7.0) / 7.0;

    running_hours
        * non_negative(equipment.power_rating)
        * f64::from(equipment.quantity)
        * weekly_share
        / 1000.0
        * time_of_day_factor(equipment.time_of_day)
}

fn time_of_day_factor(time_of_day: TimeOfDay) -> f64 {
    match time_of_day {
        TimeOfDay::Evening => 1.2,
        TimeOfDay::Night => 0.8,
        TimeOfDay::Morning | TimeOfDay::Afternoon => 1.0,
    }
}

// First match wins: a grid connection outweighs connectivity.
fn infrastructure_factor(infrastructure: &Infrastructure) -> f64 {
    if infrastructure.grid_connection {
        0.9
    } else if infrastructure.digital_connectivity == DigitalConnectivity::High {
        1.1
    } else {
        1.0
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
