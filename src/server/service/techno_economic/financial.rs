//! Diesel baseline and lifecycle financial metrics.

use crate::{
    model::techno_economic::{DieselResultDto, PvResultDto},
    server::service::techno_economic::sizing::SizingResult,
};

const DIESEL_EFFICIENCY: f64 = 0.3;
/// Fuel price in $/L
const DIESEL_FUEL_COST: f64 = 1.5;
const PROJECT_YEARS: u32 = 10;
const DISCOUNT_RATE: f64 = 0.08;
const PV_MAINTENANCE_RATE: f64 = 0.02;
const DIESEL_MAINTENANCE_RATE: f64 = 0.05;

const IRR_MAX_ITERATIONS: usize = 100;
const IRR_TOLERANCE: f64 = 1e-10;

/// Costs of supplying the same demand from a diesel generator.
///
/// Diesel is the baseline option with no investment return stream, so `irr` is `None`.
pub fn diesel_baseline(daily_usage: f64) -> DieselResultDto {
    let initial_cost = daily_usage / DIESEL_EFFICIENCY * DIESEL_FUEL_COST;
    let annual_maintenance = initial_cost * DIESEL_MAINTENANCE_RATE;

    DieselResultDto {
        initial_cost,
        annual_maintenance,
        lifecycle_cost: lifecycle_cost(initial_cost, annual_maintenance),
        npv: cost_npv(initial_cost, annual_maintenance),
        irr: None,
    }
}

/// Lifecycle metrics of the sized PV system, with IRR measured against the diesel baseline.
pub fn pv_financials(sizing: &SizingResult, diesel: &DieselResultDto) -> PvResultDto {
    let upfront = sizing.pv_cost + sizing.battery_cost;
    let annual_maintenance = sizing.pv_cost * PV_MAINTENANCE_RATE;

    let yearly_savings =
        diesel.initial_cost * 365.0 + diesel.annual_maintenance - annual_maintenance;
    let irr = irr(&savings_cash_flows(upfront, yearly_savings));

    PvResultDto {
        system_size_kw: sizing.pv_system_size_kw,
        battery_capacity_kwh: sizing.battery_capacity_kwh,
        initial_cost: sizing.pv_cost,
        battery_cost: sizing.battery_cost,
        annual_maintenance,
        lifecycle_cost: lifecycle_cost(upfront, annual_maintenance),
        npv: cost_npv(upfront, annual_maintenance),
        irr,
    }
}

// Year 0 investment followed by one year of savings per project year
fn savings_cash_flows(upfront: f64, yearly_savings: f64) -> Vec<f64> {
    std::iter::once(-upfront)
        .chain(std::iter::repeat(yearly_savings).take(PROJECT_YEARS as usize))
        .collect()
}

/// Present value factor of a constant annual payment.
pub fn annuity_factor(rate: f64, years: u32) -> f64 {
    if rate == 0.0 {
        return f64::from(years);
    }

    (1.0 - (1.0 + rate).powi(-(years as i32))) / rate
}

fn lifecycle_cost(upfront: f64, annual_maintenance: f64) -> f64 {
    upfront + annual_maintenance * f64::from(PROJECT_YEARS)
}

// Net present value in the cost view: all outflows, so always <= 0.
fn cost_npv(upfront: f64, annual_maintenance: f64) -> f64 {
    -upfront - annual_maintenance * annuity_factor(DISCOUNT_RATE, PROJECT_YEARS)
}

/// Internal rate of return of a yearly cash flow series starting at year 0.
///
/// Uses Newton-Raphson from 10%, falling back to bisection when Newton leaves the
/// valid domain or fails to converge.
///
/// # Returns
/// - `Some(rate)` - Rate at which the series' net present value is zero
/// - `None` - The series has no sign change, so no rate exists, or no root was found
pub fn irr(cash_flows: &[f64]) -> Option<f64> {
    let has_inflow = cash_flows.iter().any(|cf| *cf > 0.0);
    let has_outflow = cash_flows.iter().any(|cf| *cf < 0.0);
    if !has_inflow || !has_outflow || cash_flows.iter().any(|cf| !cf.is_finite()) {
        return None;
    }

    newton(cash_flows).or_else(|| bisection(cash_flows))
}

fn npv_at(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

fn npv_derivative_at(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / (1.0 + rate).powi(t as i32 + 1))
        .sum()
}

fn newton(cash_flows: &[f64]) -> Option<f64> {
    let mut rate = 0.1;

    for _ in 0..IRR_MAX_ITERATIONS {
        let value = npv_at(cash_flows, rate);
        let derivative = npv_derivative_at(cash_flows, rate);
        if derivative == 0.0 || !derivative.is_finite() {
            return None;
        }

        let next = rate - value / derivative;
        if !next.is_finite() || next <= -1.0 {
            return None;
        }
        if (next - rate).abs() < IRR_TOLERANCE {
            return Some(next);
        }
        rate = next;
    }

    None
}

fn bisection(cash_flows: &[f64]) -> Option<f64> {
    let mut low = -0.9999;
    let mut high = 1.0;

    // Widen the bracket until the sign changes
    while npv_at(cash_flows, low).signum() == npv_at(cash_flows, high).signum() {
        high *= 2.0;
        if high > 1e6 {
            return None;
        }
    }

    let low_sign = npv_at(cash_flows, low).signum();
    for _ in 0..200 {
        let mid = (low + high) / 2.0;
        let value = npv_at(cash_flows, mid);
        if value.abs() < IRR_TOLERANCE || (high - low) / 2.0 < IRR_TOLERANCE {
            return Some(mid);
        }
        if value.signum() == low_sign {
            low = mid;
        } else {
            high = mid;
        }
    }

    Some((low + high) / 2.0)
}
