//! Compound growth projection
//!
//! Shared by the revenue, cost and valuation projections. Rates are
//! periodic decimals (0.05 = 5% per period).

use crate::error::{ensure_finite, ModelError, Result};

fn validate_rate(rate: f64) -> Result<f64> {
    ensure_finite("periodic_growth_rate", rate)?;
    if rate <= -1.0 {
        return Err(ModelError::invalid(
            "periodic_growth_rate",
            format!("must be > -1 (a non-positive multiplier is meaningless), got {}", rate),
        ));
    }
    Ok(rate)
}

/// Growth multiplier `(1 + rate)^periods` for a whole number of periods
pub fn growth_factor(rate: f64, periods: u32) -> Result<f64> {
    let rate = validate_rate(rate)?;
    let periods = i32::try_from(periods)
        .map_err(|_| ModelError::invalid("periods", format!("{} periods is out of range", periods)))?;
    ensure_finite("growth_factor", (1.0 + rate).powi(periods))
}

/// `base * (1 + rate)^periods`; period 0 returns `base` unchanged
pub fn project(base: f64, rate: f64, periods: u32) -> Result<f64> {
    let base = ensure_finite("base", base)?;
    ensure_finite("projected_value", base * growth_factor(rate, periods)?)
}

/// Same as [`project`] for a fractional period count, e.g. annual growth
/// applied month by month with `periods = (month - 1) / 12`
pub fn project_fractional(base: f64, rate: f64, periods: f64) -> Result<f64> {
    let base = ensure_finite("base", base)?;
    let rate = validate_rate(rate)?;
    let periods = ensure_finite("periods", periods)?;
    if periods < 0.0 {
        return Err(ModelError::invalid("periods", format!("must be >= 0, got {}", periods)));
    }
    ensure_finite("projected_value", base * (1.0 + rate).powf(periods))
}

/// Values for periods `0..count`
pub fn growth_series(base: f64, rate: f64, count: u32) -> Result<Vec<f64>> {
    let base = ensure_finite("base", base)?;
    let rate = validate_rate(rate)?;

    let mut values = Vec::with_capacity(count as usize);
    let mut current = base;
    for _ in 0..count {
        values.push(ensure_finite("projected_value", current)?);
        current *= 1.0 + rate;
    }
    Ok(values)
}

/// Compound growth rate per period taking `start` to `end` over `periods`
pub fn compound_growth_rate(start: f64, end: f64, periods: u32) -> Result<f64> {
    let start = ensure_finite("start", start)?;
    let end = ensure_finite("end", end)?;
    if start <= 0.0 || end < 0.0 {
        return Err(ModelError::invalid(
            "start",
            "compound growth needs a positive start and non-negative end value",
        ));
    }
    if periods == 0 {
        return Err(ModelError::invalid("periods", "must be at least 1"));
    }
    Ok((end / start).powf(1.0 / periods as f64) - 1.0)
}
