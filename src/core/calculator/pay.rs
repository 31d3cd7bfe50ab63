//! Pay derivation. Plain f64 arithmetic; rounding to cents is left to
//! whoever displays the figures.

/// Rate used when none is configured for an employee.
pub const DEFAULT_HOURLY_RATE: f64 = 20.0;

/// `None`, NaN/inf or a negative rate fall back to [`DEFAULT_HOURLY_RATE`].
pub fn resolve_rate(rate: Option<f64>) -> f64 {
    match rate {
        Some(r) if r.is_finite() && r >= 0.0 => r,
        _ => DEFAULT_HOURLY_RATE,
    }
}

pub fn daily_pay(daily_hours: f64, hourly_rate: f64) -> f64 {
    daily_hours * hourly_rate
}

/// Pay for the whole period: last running total times the rate.
pub fn period_pay(running_hours: &[f64], hourly_rate: f64) -> f64 {
    running_hours.last().copied().unwrap_or(0.0) * hourly_rate
}
