//! Cash-flow projection combining revenue and cost series

mod state;
mod engine;
mod cashflows;

pub use state::CashFlowState;
pub use engine::{project_cash_flow, MonthlyAmount, ScenarioEngine, ScenarioReport};
pub use cashflows::{
    rule_of_40, runway_months, Breakeven, CashFlowProjection, CashFlowSummary,
    MonthlyCashFlowPoint, QuarterlyCashFlow, Runway,
};
