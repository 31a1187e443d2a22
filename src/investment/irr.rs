//! Annualized investor returns
//!
//! The cap table here has one contribution (total invested across rounds)
//! and one exit, so the rate has a closed form: `(exit / invested)^(1/years) - 1`.

/// Present value of the exit proceeds net of the contribution at an annual `rate`
pub fn npv_at_rate(invested: f64, exit_value: f64, holding_years: u32, rate: f64) -> f64 {
    exit_value / (1.0 + rate).powf(holding_years as f64) - invested
}

/// Annual IRR of investing `invested` today and receiving `exit_value`
/// after `holding_years`.
///
/// `None` when the holding period is zero, nothing was invested, or either
/// amount is not a finite number. A zero exit is a total loss (-100%).
pub fn investor_irr(invested: f64, exit_value: f64, holding_years: u32) -> Option<f64> {
    if holding_years == 0 || !invested.is_finite() || !exit_value.is_finite() {
        return None;
    }
    if invested <= 0.0 || exit_value < 0.0 {
        return None;
    }
    let multiple = exit_value / invested;
    Some(multiple.powf(1.0 / holding_years as f64) - 1.0)
}
