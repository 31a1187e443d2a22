//! Modeling assumptions and input data loading
//!
//! The three heuristic factors below have no documented derivation in the
//! reference dashboard. They are kept as overridable settings and should be
//! confirmed with the product owner before figures are published.

pub mod loader;

pub use loader::LoadedModelData;

use crate::error::{ensure_non_negative, ModelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Revenue uplift per upsell point used by the LTV calculation
pub const DEFAULT_UPSELL_UPLIFT_FACTOR: f64 = 0.3;

/// Customer growth relative to revenue growth
pub const DEFAULT_CUSTOMER_LAG_FACTOR: f64 = 0.8;

/// Proportionality of the placeholder cash balance to `revenue * month`
pub const DEFAULT_CASH_BALANCE_FACTOR: f64 = 0.15;

/// Tunable constants shared by the models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelAssumptions {
    pub upsell_uplift_factor: f64,
    pub customer_lag_factor: f64,
    pub cash_balance_factor: f64,
    /// Months projected by the scenario engine
    pub horizon_months: u32,
}

impl Default for ModelAssumptions {
    fn default() -> Self {
        Self {
            upsell_uplift_factor: DEFAULT_UPSELL_UPLIFT_FACTOR,
            customer_lag_factor: DEFAULT_CUSTOMER_LAG_FACTOR,
            cash_balance_factor: DEFAULT_CASH_BALANCE_FACTOR,
            horizon_months: crate::revenue::DEFAULT_HORIZON_MONTHS,
        }
    }
}

impl ModelAssumptions {
    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("upsell_uplift_factor", self.upsell_uplift_factor)?;
        ensure_non_negative("customer_lag_factor", self.customer_lag_factor)?;
        ensure_non_negative("cash_balance_factor", self.cash_balance_factor)?;
        if self.horizon_months == 0 {
            return Err(ModelError::invalid("horizon_months", "must be at least 1"));
        }
        Ok(())
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let assumptions: Self = serde_json::from_str(json)?;
        assumptions.validate()?;
        Ok(assumptions)
    }

    /// Load from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let assumptions = Self::from_json_str(&json)?;
        log::info!("loaded model assumptions from {}", path.display());
        Ok(assumptions)
    }

    pub fn with_horizon(mut self, horizon_months: u32) -> Self {
        self.horizon_months = horizon_months;
        self
    }
}
