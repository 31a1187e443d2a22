//! Monthly revenue projection for a revenue scenario

use super::scenario::ScenarioParameters;
use crate::error::{ModelError, Result};
use crate::growth;
use crate::ratio::Ratio;
use serde::{Deserialize, Serialize};

/// Default horizon: three planning years
pub const DEFAULT_HORIZON_MONTHS: u32 = 36;

/// One projected month of revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRevenuePoint {
    /// 1-based month
    pub month: u32,
    /// `ceil(month / 12)`
    pub year: u32,
    pub revenue: f64,
    pub customers: u64,
    /// Undefined when the month has no customers
    pub arpu: Ratio,
}

/// 1-based plan year containing a 1-based month
pub fn year_of_month(month: u32) -> u32 {
    month.div_ceil(12)
}

/// Validated revenue projection for one scenario
///
/// Points are derived on every call to [`RevenueProjection::iter`]; nothing is
/// cached besides the per-month growth factors.
#[derive(Debug, Clone)]
pub struct RevenueProjection<'a> {
    params: &'a ScenarioParameters,
    customer_lag_factor: f64,
    growth_factors: Vec<f64>,
}

impl<'a> RevenueProjection<'a> {
    pub fn new(
        params: &'a ScenarioParameters,
        horizon_months: u32,
        customer_lag_factor: f64,
    ) -> Result<Self> {
        params.validate()?;
        if horizon_months == 0 {
            return Err(ModelError::invalid("horizon_months", "must be at least 1"));
        }
        crate::error::ensure_non_negative("customer_lag_factor", customer_lag_factor)?;

        // Factor for month m sits at index m - 1
        let growth_factors = growth::growth_series(1.0, params.monthly_growth_rate(), horizon_months)?;

        Ok(Self {
            params,
            customer_lag_factor,
            growth_factors,
        })
    }

    pub fn horizon_months(&self) -> u32 {
        self.growth_factors.len() as u32
    }

    pub fn scenario(&self) -> &ScenarioParameters {
        self.params
    }

    /// Restartable iterator over the projected months
    pub fn iter(&self) -> impl Iterator<Item = MonthlyRevenuePoint> + '_ {
        self.growth_factors
            .iter()
            .enumerate()
            .map(move |(idx, &factor)| self.point(idx as u32 + 1, factor))
    }

    pub fn to_vec(&self) -> Vec<MonthlyRevenuePoint> {
        self.iter().collect()
    }

    fn point(&self, month: u32, growth_factor: f64) -> MonthlyRevenuePoint {
        let year = year_of_month(month);
        let base_revenue = self.params.revenue_for_year(year) / 12.0;
        let revenue = base_revenue * growth_factor;

        // Customer growth lags revenue growth
        let customers = (self.params.customers_for_year(year) as f64
            * growth_factor
            * self.customer_lag_factor)
            .round() as u64;

        MonthlyRevenuePoint {
            month,
            year,
            revenue,
            customers,
            arpu: Ratio::of(revenue, customers as f64),
        }
    }
}

/// Project `horizon_months` of revenue for a scenario
pub fn project_monthly_revenue(
    params: &ScenarioParameters,
    horizon_months: u32,
    customer_lag_factor: f64,
) -> Result<Vec<MonthlyRevenuePoint>> {
    let projection = RevenueProjection::new(params, horizon_months, customer_lag_factor)?;
    let points = projection.to_vec();
    log::debug!(
        "projected {} months of revenue for scenario '{}'",
        points.len(),
        params.name
    );
    Ok(points)
}

/// Revenue summed by plan year, in year order
pub fn annual_revenue_totals(points: &[MonthlyRevenuePoint]) -> Vec<(u32, f64)> {
    let mut totals: Vec<(u32, f64)> = Vec::new();
    for point in points {
        match totals.last_mut() {
            Some((year, total)) if *year == point.year => *total += point.revenue,
            _ => totals.push((point.year, point.revenue)),
        }
    }
    totals
}
