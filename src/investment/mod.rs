//! Funding history, exit scenarios and investor returns

mod rounds;
mod exits;
mod irr;

pub use rounds::{FundingHistory, InvestmentRound, RoundSnapshot};
pub use exits::{evaluate_exit_scenarios, expected_exit_valuation, ExitEvaluation, ExitScenario};
pub use irr::{investor_irr, npv_at_rate};
