//! Exit scenarios and investor return evaluation

use super::irr::investor_irr;
use super::rounds::FundingHistory;
use crate::error::{ensure_non_negative, ensure_percent, ModelError, Result};
use crate::probability::{expected_value, WeightedOutcome};
use crate::ratio::Ratio;
use serde::{Deserialize, Serialize};

/// A named exit outcome, e.g. "Strategic Acquisition"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitScenario {
    pub name: String,
    pub exit_valuation: f64,
    /// Likelihood in percent
    pub probability_pct: f64,
    /// Free-form display label, e.g. "5-7 years"
    pub timeframe: String,
    /// Whole years from the last round to exit, when known
    #[serde(default)]
    pub holding_years: Option<u32>,
}

impl ExitScenario {
    pub fn new(name: impl Into<String>, exit_valuation: f64, probability_pct: f64, timeframe: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exit_valuation,
            probability_pct,
            timeframe: timeframe.into(),
            holding_years: None,
        }
    }

    pub fn with_holding_years(mut self, years: u32) -> Self {
        self.holding_years = Some(years);
        self
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("exit_valuation", self.exit_valuation)?;
        if self.exit_valuation == 0.0 {
            return Err(ModelError::invalid("exit_valuation", "must be > 0"));
        }
        ensure_percent("probability_pct", self.probability_pct)?;
        Ok(())
    }
}

/// Returns for one exit scenario against the funding history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitEvaluation {
    pub scenario: String,
    pub exit_valuation: f64,
    pub probability_pct: f64,
    /// `exit_valuation - total_invested`
    pub investor_returns: f64,
    /// `exit_valuation / total_invested`, undefined with nothing invested
    pub return_multiple: Ratio,
    /// Annualized return when the holding period is known
    pub annualized_irr: Option<f64>,
}

/// Evaluate each exit scenario against the total invested across all rounds
pub fn evaluate_exit_scenarios(history: &FundingHistory, scenarios: &[ExitScenario]) -> Result<Vec<ExitEvaluation>> {
    let total_invested = history.total_invested();

    scenarios
        .iter()
        .map(|s| -> Result<ExitEvaluation> {
            s.validate()?;
            Ok(ExitEvaluation {
                scenario: s.name.clone(),
                exit_valuation: s.exit_valuation,
                probability_pct: s.probability_pct,
                investor_returns: s.exit_valuation - total_invested,
                return_multiple: Ratio::of(s.exit_valuation, total_invested),
                annualized_irr: s
                    .holding_years
                    .and_then(|years| investor_irr(total_invested, s.exit_valuation, years)),
            })
        })
        .collect()
}

/// Probability-weighted exit valuation across scenarios
pub fn expected_exit_valuation(scenarios: &[ExitScenario]) -> Result<f64> {
    for s in scenarios {
        s.validate()?;
    }
    let outcomes: Vec<WeightedOutcome> = scenarios
        .iter()
        .map(|s| WeightedOutcome::new(s.exit_valuation, s.probability_pct))
        .collect();
    expected_value(&outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::investment::InvestmentRound;
    use approx::assert_relative_eq;

    fn history() -> FundingHistory {
        FundingHistory::new(vec![
            InvestmentRound::new("Seed", 650_000.0, 2_000_000.0, "Angels").unwrap(),
            InvestmentRound::new("Series A", 1_000_000.0, 5_000_000.0, "Growth Capital").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_return_multiple_and_investor_returns() {
        let scenarios = vec![ExitScenario::new("Strategic Acquisition", 9_900_000.0, 40.0, "5-7 years")];
        let results = evaluate_exit_scenarios(&history(), &scenarios).unwrap();
        assert_eq!(results.len(), 1);
        assert_relative_eq!(results[0].return_multiple.value().unwrap(), 6.0, epsilon = 1e-12);
        assert_relative_eq!(results[0].investor_returns, 8_250_000.0, epsilon = 1e-6);
        assert_eq!(results[0].annualized_irr, None);
    }

    #[test]
    fn test_no_investment_signals_undefined_multiple() {
        let scenarios = vec![ExitScenario::new("IPO", 50_000_000.0, 10.0, "7-10 years")];
        let results = evaluate_exit_scenarios(&FundingHistory::default(), &scenarios).unwrap();
        assert_eq!(results[0].return_multiple, Ratio::Undefined);
        assert_eq!(results[0].investor_returns, 50_000_000.0);
    }

    #[test]
    fn test_irr_with_holding_period() {
        let scenarios = vec![ExitScenario::new("Acquisition", 9_900_000.0, 40.0, "5 years").with_holding_years(5)];
        let results = evaluate_exit_scenarios(&history(), &scenarios).unwrap();
        let irr = results[0].annualized_irr.unwrap();
        assert_relative_eq!(irr, 6.0_f64.powf(0.2) - 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_invalid_scenarios_rejected() {
        let bad_prob = vec![ExitScenario::new("x", 1.0, 120.0, "")];
        assert!(evaluate_exit_scenarios(&history(), &bad_prob).is_err());
        let bad_value = vec![ExitScenario::new("x", 0.0, 10.0, "")];
        assert!(evaluate_exit_scenarios(&history(), &bad_value).is_err());
    }

    #[test]
    fn test_expected_exit_valuation() {
        let scenarios = vec![
            ExitScenario::new("Acquisition", 10_000_000.0, 60.0, ""),
            ExitScenario::new("IPO", 50_000_000.0, 10.0, ""),
            ExitScenario::new("Acqui-hire", 2_000_000.0, 30.0, ""),
        ];
        assert_relative_eq!(expected_exit_valuation(&scenarios).unwrap(), 11_600_000.0, epsilon = 1e-6);
    }
}
