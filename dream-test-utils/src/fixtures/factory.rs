//! Factory functions for JSON payloads with standard test values.

use serde_json::{json, Value};

/// A single equipment entry in survey format.
pub fn equipment(name: &str, power_rating: f64, quantity: u32, hours_per_day: f64) -> Value {
    json!({
        "name": name,
        "power_rating": power_rating,
        "quantity": quantity,
        "hours_per_day": hours_per_day,
        "hours_per_night": 0.0,
        "weekly_usage": 7.0,
        "time_of_day": "morning",
    })
}

/// Survey snapshot with the given equipment and operating hours, no grid connection.
pub fn facility_data_with(equipment: Vec<Value>, day_hours: f64, night_hours: f64) -> Value {
    json!({
        "electricity_source": "diesel_generator",
        "operational_hours": { "day": day_hours, "night": night_hours },
        "equipment": equipment,
        "infrastructure": {
            "grid_connection": false,
            "water_access": true,
            "transport_access": true,
            "digital_connectivity": "low",
        },
    })
}

/// Survey snapshot with one 1000 W device running 8 hours a day, every day, in a
/// facility open 8 daytime hours.
///
/// Estimated daily usage is 8 kWh × 8/24 ≈ 2.667 kWh.
pub fn facility_data() -> Value {
    facility_data_with(vec![equipment("Vaccine refrigerator", 1000.0, 1, 8.0)], 8.0, 0.0)
}

/// Performance metrics of a system that has not been measured yet.
pub fn not_computed_performance_metrics() -> Value {
    json!({ "state": "not_computed" })
}

/// Measured performance metrics.
pub fn measured_performance_metrics(efficiency: f64, performance_ratio: f64) -> Value {
    json!({
        "state": "measured",
        "efficiency": efficiency,
        "performance_ratio": performance_ratio,
        "energy_loss_kwh": 0.0,
        "measured_at": "2025-01-01T00:00:00",
    })
}
