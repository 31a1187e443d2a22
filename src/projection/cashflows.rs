//! Cash-flow output structures and derived summaries

use crate::ratio::Ratio;
use serde::{Deserialize, Serialize};

/// A single month of projected cash flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCashFlowPoint {
    pub month: u32,
    pub revenue: f64,
    pub operating_costs: f64,
    /// `revenue - operating_costs`
    pub net_cash_flow: f64,
    /// Running sum of net cash flow from month 1
    pub cumulative_cash_flow: f64,
    /// Proportional placeholder balance: `revenue * month * cash_balance_factor`
    pub cash_balance: f64,
}

/// Month in which cumulative cash flow first turns positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakeven {
    Month(u32),
    /// Not reached within the projected horizon
    Never,
}

impl Breakeven {
    pub fn month(self) -> Option<u32> {
        match self {
            Breakeven::Month(m) => Some(m),
            Breakeven::Never => None,
        }
    }
}

/// Months of cash left at a burn rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Runway {
    Months(f64),
    /// Cash never runs out (not burning, or horizon ends first)
    Indefinite,
}

/// Months of runway for `cash_on_hand` at a constant `monthly_net_burn`
pub fn runway_months(cash_on_hand: f64, monthly_net_burn: f64) -> Runway {
    if monthly_net_burn <= 0.0 {
        return Runway::Indefinite;
    }
    Runway::Months((cash_on_hand / monthly_net_burn).max(0.0))
}

/// Rule of 40 score: growth percent plus profit margin percent
pub fn rule_of_40(growth_rate_pct: f64, profit_margin_pct: f64) -> f64 {
    growth_rate_pct + profit_margin_pct
}

/// Three consecutive months rolled up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterlyCashFlow {
    /// 1-based quarter index
    pub quarter: u32,
    /// Months in the window (3, or fewer for a trailing partial quarter)
    pub months: u32,
    pub revenue: f64,
    pub operating_costs: f64,
    pub net_cash_flow: f64,
    /// Cash balance of the last month in the window
    pub cash_balance: f64,
}

/// Complete cash-flow projection for one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    /// Scenario identifier
    pub scenario: String,

    /// Monthly points, month 1 first
    pub points: Vec<MonthlyCashFlowPoint>,

    breakeven: Breakeven,
}

impl CashFlowProjection {
    pub(crate) fn new(scenario: impl Into<String>, points: Vec<MonthlyCashFlowPoint>, breakeven: Breakeven) -> Self {
        Self {
            scenario: scenario.into(),
            points,
            breakeven,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn months_to_breakeven(&self) -> Breakeven {
        self.breakeven
    }

    /// Lowest cash balance over the horizon; `None` for an empty projection
    pub fn minimum_cash_balance(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|p| p.cash_balance)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Mean monthly operating costs
    pub fn average_monthly_burn(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points.iter().map(|p| p.operating_costs).sum::<f64>() / self.points.len() as f64
    }

    /// Mean of `operating_costs - revenue` over the months that lose money
    pub fn average_net_burn(&self) -> f64 {
        let burning: Vec<f64> = self
            .points
            .iter()
            .filter(|p| p.net_cash_flow < 0.0)
            .map(|p| -p.net_cash_flow)
            .collect();
        if burning.is_empty() {
            0.0
        } else {
            burning.iter().sum::<f64>() / burning.len() as f64
        }
    }

    /// Months until `starting_cash` plus cumulative net cash flow drops below
    /// zero, interpolated within the month it runs out
    pub fn runway_from(&self, starting_cash: f64) -> Runway {
        let mut cash = starting_cash;
        for point in &self.points {
            let next = cash + point.net_cash_flow;
            if next < 0.0 {
                let fraction = if point.net_cash_flow < 0.0 {
                    (cash / -point.net_cash_flow).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                return Runway::Months((point.month - 1) as f64 + fraction);
            }
            cash = next;
        }
        Runway::Indefinite
    }

    /// Roll up consecutive 3-month windows. A trailing partial window is kept.
    pub fn quarterly(&self) -> Vec<QuarterlyCashFlow> {
        if self.points.len() % 3 != 0 {
            log::warn!(
                "scenario '{}': {} months do not divide into whole quarters; last quarter is partial",
                self.scenario,
                self.points.len()
            );
        }

        self.points
            .chunks(3)
            .enumerate()
            .map(|(idx, window)| QuarterlyCashFlow {
                quarter: idx as u32 + 1,
                months: window.len() as u32,
                revenue: window.iter().map(|p| p.revenue).sum(),
                operating_costs: window.iter().map(|p| p.operating_costs).sum(),
                net_cash_flow: window.iter().map(|p| p.net_cash_flow).sum(),
                cash_balance: window.last().map(|p| p.cash_balance).unwrap_or(0.0),
            })
            .collect()
    }

    /// Rule of 40 over the last twelve months: year-over-year revenue growth
    /// plus net margin. Needs at least 24 months and prior-year revenue.
    pub fn rule_of_40_score(&self) -> Ratio {
        let n = self.points.len();
        if n < 24 {
            return Ratio::Undefined;
        }
        let trailing = &self.points[n - 12..];
        let prior = &self.points[n - 24..n - 12];

        let trailing_revenue: f64 = trailing.iter().map(|p| p.revenue).sum();
        let prior_revenue: f64 = prior.iter().map(|p| p.revenue).sum();
        let trailing_net: f64 = trailing.iter().map(|p| p.net_cash_flow).sum();

        let growth_pct = Ratio::of(trailing_revenue - prior_revenue, prior_revenue).map(|g| g * 100.0);
        let margin_pct = Ratio::of(trailing_net, trailing_revenue).map(|m| m * 100.0);

        match (growth_pct, margin_pct) {
            (Ratio::Defined(g), Ratio::Defined(m)) => Ratio::Defined(rule_of_40(g, m)),
            _ => Ratio::Undefined,
        }
    }

    /// Get summary statistics
    pub fn summary(&self) -> CashFlowSummary {
        let total_revenue: f64 = self.points.iter().map(|p| p.revenue).sum();
        let total_costs: f64 = self.points.iter().map(|p| p.operating_costs).sum();
        let total_net_cash_flow: f64 = self.points.iter().map(|p| p.net_cash_flow).sum();
        let final_cumulative_cash_flow = self.points.last().map(|p| p.cumulative_cash_flow).unwrap_or(0.0);

        CashFlowSummary {
            total_months: self.points.len() as u32,
            total_revenue,
            total_costs,
            total_net_cash_flow,
            final_cumulative_cash_flow,
            breakeven: self.breakeven,
            minimum_cash_balance: self.minimum_cash_balance(),
            average_monthly_burn: self.average_monthly_burn(),
            rule_of_40: self.rule_of_40_score(),
        }
    }
}

/// Summary statistics for a cash-flow projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSummary {
    pub total_months: u32,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub total_net_cash_flow: f64,
    pub final_cumulative_cash_flow: f64,
    pub breakeven: Breakeven,
    pub minimum_cash_balance: Option<f64>,
    pub average_monthly_burn: f64,
    pub rule_of_40: Ratio,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(month: u32, revenue: f64, costs: f64, cumulative: f64) -> MonthlyCashFlowPoint {
        MonthlyCashFlowPoint {
            month,
            revenue,
            operating_costs: costs,
            net_cash_flow: revenue - costs,
            cumulative_cash_flow: cumulative,
            cash_balance: revenue * month as f64 * 0.15,
        }
    }

    fn sample() -> CashFlowProjection {
        let points = vec![
            point(1, 100.0, 300.0, -200.0),
            point(2, 200.0, 300.0, -300.0),
            point(3, 400.0, 300.0, -200.0),
            point(4, 600.0, 300.0, 100.0),
            point(5, 700.0, 300.0, 500.0),
        ];
        CashFlowProjection::new("test", points, Breakeven::Month(4))
    }

    #[test]
    fn test_runway_months() {
        assert_eq!(runway_months(120_000.0, 10_000.0), Runway::Months(12.0));
        assert_eq!(runway_months(120_000.0, 0.0), Runway::Indefinite);
        assert_eq!(runway_months(120_000.0, -5_000.0), Runway::Indefinite);
    }

    #[test]
    fn test_runway_from_starting_cash() {
        let projection = sample();
        // 250 covers month 1 (-200) and half of month 2 (-100)
        match projection.runway_from(250.0) {
            Runway::Months(m) => assert_relative_eq!(m, 1.5, epsilon = 1e-12),
            other => panic!("unexpected runway {:?}", other),
        }
        assert_eq!(projection.runway_from(1_000.0), Runway::Indefinite);
    }

    #[test]
    fn test_quarterly_rollup_keeps_partial_quarter() {
        let quarters = sample().quarterly();
        assert_eq!(quarters.len(), 2);
        assert_eq!(quarters[0].months, 3);
        assert_relative_eq!(quarters[0].revenue, 700.0);
        assert_relative_eq!(quarters[0].net_cash_flow, -200.0);
        assert_relative_eq!(quarters[0].cash_balance, 400.0 * 3.0 * 0.15, epsilon = 1e-9);
        assert_eq!(quarters[1].months, 2);
        assert_relative_eq!(quarters[1].operating_costs, 600.0);
    }

    #[test]
    fn test_summary_statistics() {
        let projection = sample();
        let summary = projection.summary();
        assert_eq!(summary.total_months, 5);
        assert_relative_eq!(summary.total_net_cash_flow, 500.0);
        assert_relative_eq!(summary.final_cumulative_cash_flow, 500.0);
        assert_relative_eq!(summary.average_monthly_burn, 300.0);
        assert_relative_eq!(summary.minimum_cash_balance.unwrap(), 15.0, epsilon = 1e-9);
        assert_eq!(summary.breakeven.month(), Some(4));
        assert_eq!(summary.rule_of_40, Ratio::Undefined);
        assert_relative_eq!(projection.average_net_burn(), 150.0);
    }

    #[test]
    fn test_empty_projection_has_no_minimum_balance() {
        let json = r#"{"scenario":"empty","points":[],"breakeven":"never"}"#;
        let projection: CashFlowProjection = serde_json::from_str(json).unwrap();
        assert!(projection.is_empty());
        assert_eq!(projection.minimum_cash_balance(), None);
        assert_eq!(projection.summary().minimum_cash_balance, None);
    }

    #[test]
    fn test_breakeven_serializes_as_tagged_value() {
        assert_eq!(serde_json::to_string(&Breakeven::Never).unwrap(), "\"never\"");
        assert_eq!(serde_json::to_string(&Breakeven::Month(7)).unwrap(), "{\"month\":7}");
    }
}
