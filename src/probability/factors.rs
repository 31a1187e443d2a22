//! Success factors combined under an independence assumption
//!
//! Every factor must succeed, so the overall probability is the product of
//! the individual probabilities, not their average.

use crate::error::{ensure_percent, ModelError, Result};
use serde::{Deserialize, Serialize};

/// A qualitative success factor with baseline and range estimates (percent)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityFactor {
    pub name: String,
    pub baseline_probability_pct: f64,
    pub best_case_pct: f64,
    pub worst_case_pct: f64,
}

impl ProbabilityFactor {
    pub fn new(name: impl Into<String>, baseline: f64, best_case: f64, worst_case: f64) -> Self {
        Self {
            name: name.into(),
            baseline_probability_pct: baseline,
            best_case_pct: best_case,
            worst_case_pct: worst_case,
        }
    }

    fn validate(&self) -> Result<()> {
        ensure_percent("baseline_probability_pct", self.baseline_probability_pct)?;
        ensure_percent("best_case_pct", self.best_case_pct)?;
        ensure_percent("worst_case_pct", self.worst_case_pct)?;
        if !(self.worst_case_pct <= self.baseline_probability_pct
            && self.baseline_probability_pct <= self.best_case_pct)
        {
            log::warn!(
                "factor '{}': baseline {} is outside its worst/best range [{}, {}]",
                self.name,
                self.baseline_probability_pct,
                self.worst_case_pct,
                self.best_case_pct
            );
        }
        Ok(())
    }
}

/// Which estimate of each factor to combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estimate {
    Baseline,
    BestCase,
    WorstCase,
}

/// Ordered set of independent success factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FactorList")]
pub struct SuccessProbabilityModel {
    factors: Vec<ProbabilityFactor>,
}

#[derive(Deserialize)]
struct FactorList {
    factors: Vec<ProbabilityFactor>,
}

impl TryFrom<FactorList> for SuccessProbabilityModel {
    type Error = ModelError;

    fn try_from(list: FactorList) -> Result<Self> {
        Self::new(list.factors)
    }
}

impl SuccessProbabilityModel {
    pub fn new(factors: Vec<ProbabilityFactor>) -> Result<Self> {
        if factors.is_empty() {
            return Err(ModelError::EmptyHistory("success probability model"));
        }
        for factor in &factors {
            factor.validate()?;
        }
        Ok(Self { factors })
    }

    pub fn factors(&self) -> &[ProbabilityFactor] {
        &self.factors
    }

    /// `prod(p_i / 100) * 100` over the chosen estimate
    pub fn combined(&self, estimate: Estimate) -> f64 {
        self.factors
            .iter()
            .map(|f| match estimate {
                Estimate::Baseline => f.baseline_probability_pct,
                Estimate::BestCase => f.best_case_pct,
                Estimate::WorstCase => f.worst_case_pct,
            })
            .map(|pct| pct / 100.0)
            .product::<f64>()
            * 100.0
    }

    /// Factor whose baseline drags the product down the most
    pub fn weakest_factor(&self) -> Option<&ProbabilityFactor> {
        self.factors
            .iter()
            .min_by(|a, b| a.baseline_probability_pct.total_cmp(&b.baseline_probability_pct))
    }
}

/// Overall success probability in percent from the factors' baselines
pub fn overall_success_probability(model: &SuccessProbabilityModel) -> f64 {
    model.combined(Estimate::Baseline)
}
