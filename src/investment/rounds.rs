//! Funding rounds and funding history

use crate::error::{ensure_non_negative, ModelError, Result};
use serde::{Deserialize, Serialize};

/// One priced funding round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRound {
    pub stage: String,
    pub amount: f64,
    pub pre_money_valuation: f64,
    pub lead_investor: String,
}

impl InvestmentRound {
    pub fn new(
        stage: impl Into<String>,
        amount: f64,
        pre_money_valuation: f64,
        lead_investor: impl Into<String>,
    ) -> Result<Self> {
        let round = Self {
            stage: stage.into(),
            amount,
            pre_money_valuation,
            lead_investor: lead_investor.into(),
        };
        round.validate()?;
        Ok(round)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_non_negative("amount", self.amount)?;
        if self.amount == 0.0 {
            return Err(ModelError::invalid("amount", "round amount must be > 0"));
        }
        ensure_non_negative("pre_money_valuation", self.pre_money_valuation)?;
        Ok(())
    }

    /// Pre-money valuation plus the new capital
    pub fn post_money_valuation(&self) -> f64 {
        self.pre_money_valuation + self.amount
    }

    /// Share of the company bought in this round, in percent
    pub fn equity_pct(&self) -> f64 {
        self.amount / self.post_money_valuation() * 100.0
    }
}

/// Running totals after a round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub stage: String,
    pub amount: f64,
    pub cumulative_investment: f64,
    pub post_money_valuation: f64,
    pub equity_pct: f64,
}

/// Funding rounds in chronological order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RoundList")]
pub struct FundingHistory {
    rounds: Vec<InvestmentRound>,
}

#[derive(Deserialize)]
struct RoundList {
    rounds: Vec<InvestmentRound>,
}

impl TryFrom<RoundList> for FundingHistory {
    type Error = ModelError;

    fn try_from(list: RoundList) -> Result<Self> {
        Self::new(list.rounds)
    }
}

impl FundingHistory {
    pub fn new(rounds: Vec<InvestmentRound>) -> Result<Self> {
        for round in &rounds {
            round.validate()?;
        }
        Ok(Self { rounds })
    }

    pub fn rounds(&self) -> &[InvestmentRound] {
        &self.rounds
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn total_invested(&self) -> f64 {
        self.rounds.iter().map(|r| r.amount).sum()
    }

    /// Post-money valuation of the latest round
    pub fn current_valuation(&self) -> Result<f64> {
        self.rounds
            .last()
            .map(InvestmentRound::post_money_valuation)
            .ok_or(ModelError::EmptyHistory("funding history"))
    }

    /// Per-round cumulative investment, valuation and equity sold
    pub fn snapshots(&self) -> Vec<RoundSnapshot> {
        let mut cumulative = 0.0;
        self.rounds
            .iter()
            .map(|r| {
                cumulative += r.amount;
                RoundSnapshot {
                    stage: r.stage.clone(),
                    amount: r.amount,
                    cumulative_investment: cumulative,
                    post_money_valuation: r.post_money_valuation(),
                    equity_pct: r.equity_pct(),
                }
            })
            .collect()
    }

    /// Valuation step-up from the previous round's post-money to this round's pre-money
    pub fn valuation_step_ups(&self) -> Vec<(String, f64)> {
        self.rounds
            .windows(2)
            .map(|w| (w[1].stage.clone(), w[1].pre_money_valuation / w[0].post_money_valuation()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn history() -> FundingHistory {
        FundingHistory::new(vec![
            InvestmentRound::new("Pre-Seed", 150_000.0, 850_000.0, "Founders Fund").unwrap(),
            InvestmentRound::new("Seed", 500_000.0, 2_000_000.0, "Angel Syndicate").unwrap(),
            InvestmentRound::new("Series A", 1_000_000.0, 5_000_000.0, "Growth Capital").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_post_money_and_equity() {
        let round = InvestmentRound::new("Seed", 500_000.0, 2_000_000.0, "Angel").unwrap();
        assert_eq!(round.post_money_valuation(), 2_500_000.0);
        assert_relative_eq!(round.equity_pct(), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_non_positive_amount() {
        assert!(InvestmentRound::new("Seed", 0.0, 1.0, "x").is_err());
        assert!(InvestmentRound::new("Seed", -5.0, 1.0, "x").is_err());
        assert!(InvestmentRound::new("Seed", 5.0, f64::NAN, "x").is_err());
    }

    #[test]
    fn test_deserialize_validates_rounds() {
        let back: FundingHistory = serde_json::from_str(&serde_json::to_string(&history()).unwrap()).unwrap();
        assert_eq!(back, history());

        let zero_amount = r#"{"rounds":[{"stage":"Seed","amount":0.0,"pre_money_valuation":1.0,"lead_investor":"x"}]}"#;
        assert!(serde_json::from_str::<FundingHistory>(zero_amount).is_err());
        assert!(serde_json::from_str::<FundingHistory>(r#"{"rounds":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn test_cumulative_investment() {
        let snapshots = history().snapshots();
        let cumulative: Vec<f64> = snapshots.iter().map(|s| s.cumulative_investment).collect();
        assert_eq!(cumulative, vec![150_000.0, 650_000.0, 1_650_000.0]);
        assert_eq!(history().total_invested(), 1_650_000.0);
    }

    #[test]
    fn test_current_valuation() {
        assert_eq!(history().current_valuation().unwrap(), 6_000_000.0);
        let empty = FundingHistory::default();
        assert!(matches!(empty.current_valuation(), Err(ModelError::EmptyHistory(_))));
    }

    #[test]
    fn test_step_ups() {
        let steps = history().valuation_step_ups();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].0, "Seed");
        assert_relative_eq!(steps[0].1, 2.0, epsilon = 1e-12);
    }
}
