//! Scenario Finance - Financial and probabilistic modeling engine for SaaS dashboards
//!
//! This library provides:
//! - Compound growth projection shared by all time-series models
//! - Multi-scenario monthly revenue, customer and ARPU projection
//! - Operating cost projection by category and customer acquisition cost
//! - Cash-flow projection with breakeven, runway and quarterly roll-ups
//! - Funding history, exit scenario returns and investor IRR
//! - Customer lifetime value and LTV:CAC
//! - Deterministic outcome probability aggregation for project risk panels
//!
//! Every computation is pure: results depend only on the inputs passed in.

pub mod error;
pub mod ratio;
pub mod growth;
pub mod assumptions;
pub mod revenue;
pub mod costs;
pub mod projection;
pub mod investment;
pub mod ltv;
pub mod probability;
pub mod presets;
pub mod scenario;

// Re-export commonly used types
pub use error::{ModelError, Result};
pub use ratio::Ratio;
pub use assumptions::ModelAssumptions;
pub use revenue::{ScenarioParameters, ScenarioSet, MonthlyRevenuePoint};
pub use costs::{CostCategory, CostStructure, ChannelCost};
pub use projection::{ScenarioEngine, ScenarioReport, CashFlowProjection, MonthlyCashFlowPoint};
pub use investment::{FundingHistory, InvestmentRound, ExitScenario};
pub use ltv::{LtvInputs, LtvResult};
pub use probability::{ProbabilityFactor, SuccessProbabilityModel};
pub use scenario::ScenarioRunner;
