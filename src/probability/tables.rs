//! Discrete probability tables and the deterministic outcome summary
//!
//! Tables are fixed discretized distributions; nothing here samples randomly.

use super::factors::{Estimate, SuccessProbabilityModel};
use crate::error::{ensure_finite, Result};
use serde::{Deserialize, Serialize};

/// Allowed deviation of a table's total from 100%
pub const DISTRIBUTION_TOLERANCE_PCT: f64 = 0.5;

/// A value and its probability in percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedOutcome {
    #[serde(default)]
    pub label: String,
    pub value: f64,
    pub probability_pct: f64,
}

impl WeightedOutcome {
    pub fn new(value: f64, probability_pct: f64) -> Self {
        Self {
            label: String::new(),
            value,
            probability_pct,
        }
    }

    pub fn labeled(label: impl Into<String>, value: f64, probability_pct: f64) -> Self {
        Self {
            label: label.into(),
            value,
            probability_pct,
        }
    }
}

/// `sum(value * probability_pct / 100)`.
///
/// Probabilities are expected to form a distribution summing to 100; a table
/// that does not is still evaluated (and logged) so the result is skewed.
pub fn expected_value(outcomes: &[WeightedOutcome]) -> Result<f64> {
    for outcome in outcomes {
        ensure_finite("value", outcome.value)?;
        ensure_finite("probability_pct", outcome.probability_pct)?;
    }

    let total_pct: f64 = outcomes.iter().map(|o| o.probability_pct).sum();
    if (total_pct - 100.0).abs() > DISTRIBUTION_TOLERANCE_PCT {
        log::warn!(
            "probabilities sum to {:.2}% instead of 100%; expectation will be skewed",
            total_pct
        );
    }

    Ok(outcomes
        .iter()
        .map(|o| o.value * o.probability_pct / 100.0)
        .sum())
}

/// Named discrete distribution, e.g. completion month or budget outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTable {
    pub name: String,
    pub outcomes: Vec<WeightedOutcome>,
}

impl ProbabilityTable {
    pub fn new(name: impl Into<String>, outcomes: Vec<WeightedOutcome>) -> Self {
        Self {
            name: name.into(),
            outcomes,
        }
    }

    pub fn total_probability_pct(&self) -> f64 {
        self.outcomes.iter().map(|o| o.probability_pct).sum()
    }

    /// Whether probabilities sum to 100 within [`DISTRIBUTION_TOLERANCE_PCT`]
    pub fn is_valid_distribution(&self) -> bool {
        self.outcomes.iter().all(|o| o.probability_pct >= 0.0)
            && (self.total_probability_pct() - 100.0).abs() <= DISTRIBUTION_TOLERANCE_PCT
    }

    pub fn expected_value(&self) -> Result<f64> {
        expected_value(&self.outcomes)
    }

    /// Probability (percent) that the outcome is at most `threshold`
    pub fn probability_at_most(&self, threshold: f64) -> f64 {
        self.outcomes
            .iter()
            .filter(|o| o.value <= threshold)
            .map(|o| o.probability_pct)
            .sum()
    }

    /// Outcome with the highest probability
    pub fn most_likely(&self) -> Option<&WeightedOutcome> {
        self.outcomes
            .iter()
            .max_by(|a, b| a.probability_pct.total_cmp(&b.probability_pct))
    }
}

/// Inputs to the project outcome panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeModel {
    /// Completion month outcomes
    pub completion_timing: ProbabilityTable,
    /// Final budget outcomes
    pub budget: ProbabilityTable,
    /// Revenue outcomes by scenario
    pub revenue: ProbabilityTable,
    pub success_factors: SuccessProbabilityModel,
}

/// Expectation values and combined success probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub expected_completion_month: f64,
    pub expected_budget: f64,
    pub expected_revenue: f64,
    pub success_probability_pct: f64,
    pub best_case_success_pct: f64,
    pub worst_case_success_pct: f64,
}

impl OutcomeModel {
    pub fn summarize(&self) -> Result<OutcomeSummary> {
        Ok(OutcomeSummary {
            expected_completion_month: self.completion_timing.expected_value()?,
            expected_budget: self.budget.expected_value()?,
            expected_revenue: self.revenue.expected_value()?,
            success_probability_pct: self.success_factors.combined(Estimate::Baseline),
            best_case_success_pct: self.success_factors.combined(Estimate::BestCase),
            worst_case_success_pct: self.success_factors.combined(Estimate::WorstCase),
        })
    }
}
