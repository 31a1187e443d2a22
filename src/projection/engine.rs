//! Cash-flow projection and the scenario engine facade

use super::cashflows::{Breakeven, CashFlowProjection, CashFlowSummary, MonthlyCashFlowPoint, QuarterlyCashFlow};
use super::state::CashFlowState;
use crate::assumptions::ModelAssumptions;
use crate::costs::{project_monthly_costs, CostStructure, MonthlyCostPoint};
use crate::error::{ensure_finite, ensure_non_negative, ModelError, Result};
use crate::revenue::{project_monthly_revenue, MonthlyRevenuePoint, ScenarioParameters};
use serde::{Deserialize, Serialize};

/// A monthly amount that can feed the cash-flow projector
pub trait MonthlyAmount {
    fn month(&self) -> u32;
    fn amount(&self) -> f64;
}

impl MonthlyAmount for MonthlyRevenuePoint {
    fn month(&self) -> u32 {
        self.month
    }
    fn amount(&self) -> f64 {
        self.revenue
    }
}

impl MonthlyAmount for MonthlyCostPoint {
    fn month(&self) -> u32 {
        self.month
    }
    fn amount(&self) -> f64 {
        self.total_costs
    }
}

impl MonthlyAmount for (u32, f64) {
    fn month(&self) -> u32 {
        self.0
    }
    fn amount(&self) -> f64 {
        self.1
    }
}

/// Combine aligned revenue and cost series into monthly cash flow.
///
/// Both series must have the same length and the same month at every index.
pub fn project_cash_flow<R: MonthlyAmount, C: MonthlyAmount>(
    scenario: &str,
    revenue: &[R],
    costs: &[C],
    cash_balance_factor: f64,
) -> Result<CashFlowProjection> {
    if revenue.is_empty() {
        return Err(ModelError::EmptyHistory("revenue series"));
    }
    let cash_balance_factor = ensure_non_negative("cash_balance_factor", cash_balance_factor)?;
    if revenue.len() != costs.len() {
        return Err(ModelError::MisalignedSeries {
            reason: format!(
                "revenue has {} months but costs have {}",
                revenue.len(),
                costs.len()
            ),
        });
    }
    if let Some((r, c)) = revenue.iter().zip(costs).find(|(r, c)| r.month() != c.month()) {
        return Err(ModelError::MisalignedSeries {
            reason: format!("revenue month {} paired with cost month {}", r.month(), c.month()),
        });
    }

    let mut state = CashFlowState::new();
    let mut points = Vec::with_capacity(revenue.len());

    for (r, c) in revenue.iter().zip(costs) {
        let revenue = ensure_finite("revenue", r.amount())?;
        let operating_costs = ensure_finite("operating_costs", c.amount())?;
        let net_cash_flow = revenue - operating_costs;

        state.advance_month(net_cash_flow);

        points.push(MonthlyCashFlowPoint {
            month: r.month(),
            revenue,
            operating_costs,
            net_cash_flow,
            cumulative_cash_flow: state.cumulative_cash_flow,
            cash_balance: revenue * r.month() as f64 * cash_balance_factor,
        });
    }

    let breakeven = state
        .breakeven_month
        .and_then(|idx| points.get(idx as usize - 1))
        .map(|p| Breakeven::Month(p.month))
        .unwrap_or(Breakeven::Never);

    log::debug!(
        "scenario '{}': {} months, breakeven {:?}, final cumulative {:.2}",
        scenario,
        points.len(),
        breakeven,
        state.cumulative_cash_flow
    );

    Ok(CashFlowProjection::new(scenario, points, breakeven))
}

/// Everything the dashboard needs for one revenue scenario
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: String,
    pub revenue: Vec<MonthlyRevenuePoint>,
    pub costs: Vec<MonthlyCostPoint>,
    pub cash_flow: CashFlowProjection,
    pub quarterly: Vec<QuarterlyCashFlow>,
    pub summary: CashFlowSummary,
}

/// Main modeling engine
#[derive(Debug, Clone, Default)]
pub struct ScenarioEngine {
    assumptions: ModelAssumptions,
}

impl ScenarioEngine {
    /// Create a new engine; assumptions are checked up front
    pub fn new(assumptions: ModelAssumptions) -> Result<Self> {
        assumptions.validate()?;
        Ok(Self { assumptions })
    }

    pub fn assumptions(&self) -> &ModelAssumptions {
        &self.assumptions
    }

    pub fn revenue_series(&self, params: &ScenarioParameters) -> Result<Vec<MonthlyRevenuePoint>> {
        project_monthly_revenue(
            params,
            self.assumptions.horizon_months,
            self.assumptions.customer_lag_factor,
        )
    }

    pub fn cost_series(&self, structure: &CostStructure) -> Result<Vec<MonthlyCostPoint>> {
        project_monthly_costs(structure, self.assumptions.horizon_months)
    }

    pub fn cash_flow(&self, params: &ScenarioParameters, structure: &CostStructure) -> Result<CashFlowProjection> {
        let revenue = self.revenue_series(params)?;
        let costs = self.cost_series(structure)?;
        project_cash_flow(&params.name, &revenue, &costs, self.assumptions.cash_balance_factor)
    }

    /// Run the full monthly model for one scenario
    pub fn report(&self, params: &ScenarioParameters, structure: &CostStructure) -> Result<ScenarioReport> {
        let revenue = self.revenue_series(params)?;
        let costs = self.cost_series(structure)?;
        let cash_flow = project_cash_flow(&params.name, &revenue, &costs, self.assumptions.cash_balance_factor)?;

        Ok(ScenarioReport {
            scenario: params.name.clone(),
            quarterly: cash_flow.quarterly(),
            summary: cash_flow.summary(),
            revenue,
            costs,
            cash_flow,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costs::CostCategory;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> Vec<(u32, f64)> {
        values.iter().enumerate().map(|(i, &v)| (i as u32 + 1, v)).collect()
    }

    fn params() -> ScenarioParameters {
        ScenarioParameters::new(
            "Realistic",
            5.0,
            [180_000.0, 420_000.0, 850_000.0],
            [15, 35, 65],
            [12_000.0, 12_000.0, 13_076.0],
        )
    }

    fn structure() -> CostStructure {
        CostStructure::new(vec![
            CostCategory::new("Personnel", 300_000.0, 20.0),
            CostCategory::new("Operations", 60_000.0, 10.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_cumulative_identity() {
        let engine = ScenarioEngine::default();
        let projection = engine.cash_flow(&params(), &structure()).unwrap();

        let mut previous = 0.0;
        for p in &projection.points {
            assert_relative_eq!(p.cumulative_cash_flow, previous + p.net_cash_flow, epsilon = 1e-6);
            assert_relative_eq!(p.net_cash_flow, p.revenue - p.operating_costs, epsilon = 1e-9);
            previous = p.cumulative_cash_flow;
        }
    }

    #[test]
    fn test_cash_balance_placeholder() {
        let projection = project_cash_flow("t", &series(&[1_000.0, 2_000.0]), &series(&[500.0, 500.0]), 0.15).unwrap();
        assert_relative_eq!(projection.points[0].cash_balance, 150.0, epsilon = 1e-9);
        assert_relative_eq!(projection.points[1].cash_balance, 600.0, epsilon = 1e-9);
    }

    #[test]
    fn test_breakeven_month() {
        let revenue = series(&[100.0, 100.0, 400.0, 400.0]);
        let costs = series(&[200.0; 4]);
        let projection = project_cash_flow("t", &revenue, &costs, 0.15).unwrap();
        // cumulative: -100, -200, 0, 200 -> strictly positive at month 4
        assert_eq!(projection.months_to_breakeven(), Breakeven::Month(4));

        let never = project_cash_flow("t", &series(&[1.0]), &series(&[2.0]), 0.15).unwrap();
        assert_eq!(never.months_to_breakeven(), Breakeven::Never);
    }

    #[test]
    fn test_length_mismatch_fails() {
        let result = project_cash_flow("t", &series(&[1.0, 1.0]), &series(&[1.0]), 0.15);
        assert!(matches!(result, Err(ModelError::MisalignedSeries { .. })));
    }

    #[test]
    fn test_month_mismatch_fails() {
        let costs: Vec<(u32, f64)> = vec![(1, 1.0), (3, 1.0)];
        let result = project_cash_flow("t", &series(&[1.0, 1.0]), &costs, 0.15);
        assert!(matches!(result, Err(ModelError::MisalignedSeries { .. })));
    }

    #[test]
    fn test_non_finite_amounts_rejected() {
        let revenue: Vec<(u32, f64)> = vec![(1, 1_000.0), (2, f64::NAN)];
        let result = project_cash_flow("t", &revenue, &series(&[500.0, 500.0]), 0.15);
        assert!(matches!(result, Err(ModelError::InvalidInput { field: "revenue", .. })));

        let costs: Vec<(u32, f64)> = vec![(1, f64::INFINITY), (2, 500.0)];
        let result = project_cash_flow("t", &series(&[1_000.0, 1_000.0]), &costs, 0.15);
        assert!(matches!(result, Err(ModelError::InvalidInput { field: "operating_costs", .. })));
    }

    #[test]
    fn test_bad_cash_balance_factor_rejected() {
        for factor in [f64::NAN, -0.15, f64::INFINITY] {
            let result = project_cash_flow("t", &series(&[1.0]), &series(&[1.0]), factor);
            assert!(matches!(
                result,
                Err(ModelError::InvalidInput { field: "cash_balance_factor", .. })
            ));
        }
    }

    #[test]
    fn test_engine_rejects_invalid_assumptions() {
        let nan_factor = ModelAssumptions {
            cash_balance_factor: f64::NAN,
            ..ModelAssumptions::default()
        };
        assert!(matches!(ScenarioEngine::new(nan_factor), Err(ModelError::InvalidInput { .. })));

        let negative_factor = ModelAssumptions {
            cash_balance_factor: -0.15,
            ..ModelAssumptions::default()
        };
        assert!(ScenarioEngine::new(negative_factor).is_err());
        assert!(ScenarioEngine::new(ModelAssumptions::default().with_horizon(0)).is_err());
    }

    #[test]
    fn test_empty_series_fails() {
        let empty: [(u32, f64); 0] = [];
        assert!(matches!(
            project_cash_flow("t", &empty, &empty, 0.15),
            Err(ModelError::EmptyHistory(_))
        ));
    }

    #[test]
    fn test_report_is_consistent() {
        let engine = ScenarioEngine::default();
        let report = engine.report(&params(), &structure()).unwrap();
        assert_eq!(report.revenue.len(), 36);
        assert_eq!(report.costs.len(), 36);
        assert_eq!(report.quarterly.len(), 12);
        assert_eq!(report.summary.total_months, 36);
        assert!(report.summary.rule_of_40.is_defined());
    }

    #[test]
    fn test_assumption_overrides_flow_through() {
        let assumptions = ModelAssumptions {
            horizon_months: 12,
            cash_balance_factor: 0.5,
            ..ModelAssumptions::default()
        };
        let engine = ScenarioEngine::new(assumptions).unwrap();
        let projection = engine.cash_flow(&params(), &structure()).unwrap();
        assert_eq!(projection.len(), 12);
        let first = &projection.points[0];
        assert_relative_eq!(first.cash_balance, first.revenue * 0.5, epsilon = 1e-9);
    }
}
