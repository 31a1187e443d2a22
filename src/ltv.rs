//! Customer lifetime value and unit economics

use crate::error::{ensure_non_negative, ModelError, Result};
use crate::ratio::Ratio;
use serde::{Deserialize, Serialize};

/// Inputs for a lifetime value calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtvInputs {
    pub monthly_fee: f64,
    /// Retention in percent, within (0, 100]
    pub retention_rate_pct: f64,
    /// Upsell rate in percent
    pub upsell_rate_pct: f64,
    pub average_lifespan_months: u32,
}

impl LtvInputs {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("monthly_fee", self.monthly_fee)?;
        if self.monthly_fee == 0.0 {
            return Err(ModelError::invalid("monthly_fee", "must be > 0"));
        }
        ensure_non_negative("retention_rate_pct", self.retention_rate_pct)?;
        if self.retention_rate_pct == 0.0 || self.retention_rate_pct > 100.0 {
            return Err(ModelError::invalid(
                "retention_rate_pct",
                format!("must be within (0, 100], got {}", self.retention_rate_pct),
            ));
        }
        ensure_non_negative("upsell_rate_pct", self.upsell_rate_pct)?;
        if self.average_lifespan_months == 0 {
            return Err(ModelError::invalid("average_lifespan_months", "must be at least 1"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LtvResult {
    /// `monthly_fee * 12 * lifespan * retention`
    pub base_ltv: f64,
    /// `base_ltv * upsell_rate * upsell_uplift_factor`
    pub upsell_ltv: f64,
    pub total_ltv: f64,
    /// `total_ltv / acquisition_cost`
    pub ltv_cac_ratio: Ratio,
    /// Months of fees needed to recover the acquisition cost
    pub payback_months: Ratio,
}

/// Lifetime value for one customer profile against an acquisition cost
pub fn calculate_ltv(inputs: &LtvInputs, acquisition_cost: f64, upsell_uplift_factor: f64) -> Result<LtvResult> {
    ensure_non_negative("acquisition_cost", acquisition_cost)?;
    calculate_ltv_with_cac(inputs, Ratio::Defined(acquisition_cost), upsell_uplift_factor)
}

/// Same as [`calculate_ltv`] for a CAC that may itself be undefined, e.g. the
/// output of [`crate::costs::blended_cac`] with no customers acquired. An
/// undefined CAC leaves the LTV:CAC ratio and the payback period undefined.
pub fn calculate_ltv_with_cac(inputs: &LtvInputs, cac: Ratio, upsell_uplift_factor: f64) -> Result<LtvResult> {
    inputs.validate()?;
    if let Ratio::Defined(cost) = cac {
        ensure_non_negative("acquisition_cost", cost)?;
    }
    ensure_non_negative("upsell_uplift_factor", upsell_uplift_factor)?;

    let base_ltv = inputs.monthly_fee
        * 12.0
        * inputs.average_lifespan_months as f64
        * (inputs.retention_rate_pct / 100.0);
    let upsell_ltv = base_ltv * (inputs.upsell_rate_pct / 100.0) * upsell_uplift_factor;
    let total_ltv = base_ltv + upsell_ltv;

    Ok(LtvResult {
        base_ltv,
        upsell_ltv,
        total_ltv,
        ltv_cac_ratio: match cac {
            Ratio::Defined(cost) => Ratio::of(total_ltv, cost),
            Ratio::Undefined => Ratio::Undefined,
        },
        payback_months: match cac {
            Ratio::Defined(cost) => Ratio::of(cost, inputs.monthly_fee),
            Ratio::Undefined => Ratio::Undefined,
        },
    })
}
