//! Scenario runner for batch projections
//!
//! Holds the assumptions and cost structure once, then runs any number of
//! revenue scenarios against them. Every run is pure, so batches can fan out
//! across threads without coordination.

use crate::assumptions::ModelAssumptions;
use crate::costs::CostStructure;
use crate::error::Result;
use crate::projection::{Breakeven, ScenarioEngine, ScenarioReport};
use crate::ratio::Ratio;
use crate::revenue::{ScenarioParameters, ScenarioSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Pre-configured runner for many scenarios
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(ModelAssumptions::default(), presets::cost_structure()?)?;
/// let reports = runner.run_parallel(presets::revenue_scenarios()?.as_slice())?;
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ScenarioEngine,
    cost_structure: CostStructure,
}

/// Headline KPIs for side-by-side comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub scenario: String,
    pub total_revenue: f64,
    pub total_costs: f64,
    pub final_cumulative_cash_flow: f64,
    pub breakeven: Breakeven,
    pub minimum_cash_balance: Option<f64>,
    pub rule_of_40: Ratio,
}

impl From<&ScenarioReport> for ScenarioComparison {
    fn from(report: &ScenarioReport) -> Self {
        Self {
            scenario: report.scenario.clone(),
            total_revenue: report.summary.total_revenue,
            total_costs: report.summary.total_costs,
            final_cumulative_cash_flow: report.summary.final_cumulative_cash_flow,
            breakeven: report.summary.breakeven,
            minimum_cash_balance: report.summary.minimum_cash_balance,
            rule_of_40: report.summary.rule_of_40,
        }
    }
}

impl ScenarioRunner {
    /// Fails when the assumptions are out of range
    pub fn new(assumptions: ModelAssumptions, cost_structure: CostStructure) -> Result<Self> {
        Ok(Self {
            engine: ScenarioEngine::new(assumptions)?,
            cost_structure,
        })
    }

    /// Run a single scenario
    pub fn run(&self, params: &ScenarioParameters) -> Result<ScenarioReport> {
        self.engine.report(params, &self.cost_structure)
    }

    /// Run a named scenario from a set; `None` when the name is unknown
    pub fn run_named(&self, set: &ScenarioSet, name: &str) -> Option<Result<ScenarioReport>> {
        set.get(name).map(|params| self.run(params))
    }

    /// Run scenarios one after another, in input order
    pub fn run_batch(&self, scenarios: &[ScenarioParameters]) -> Result<Vec<ScenarioReport>> {
        scenarios
            .iter()
            .map(|p| self.engine.report(p, &self.cost_structure))
            .collect()
    }

    /// Run scenarios across the rayon pool; output order matches input order
    pub fn run_parallel(&self, scenarios: &[ScenarioParameters]) -> Result<Vec<ScenarioReport>> {
        scenarios
            .par_iter()
            .map(|p| self.engine.report(p, &self.cost_structure))
            .collect()
    }

    /// Run one scenario under several assumption sets; the first invalid
    /// set fails the whole batch
    pub fn run_sensitivities(
        &self,
        params: &ScenarioParameters,
        assumption_sets: &[ModelAssumptions],
    ) -> Result<Vec<ScenarioReport>> {
        assumption_sets
            .par_iter()
            .map(|assumptions| -> Result<ScenarioReport> {
                ScenarioEngine::new(assumptions.clone())?.report(params, &self.cost_structure)
            })
            .collect()
    }

    /// Headline KPIs for every scenario in the set
    pub fn compare(&self, set: &ScenarioSet) -> Result<Vec<ScenarioComparison>> {
        let reports = self.run_parallel(set.as_slice())?;
        Ok(reports.iter().map(ScenarioComparison::from).collect())
    }

    pub fn assumptions(&self) -> &ModelAssumptions {
        self.engine.assumptions()
    }

    pub fn cost_structure(&self) -> &CostStructure {
        &self.cost_structure
    }
}
