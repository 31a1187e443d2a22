//! Outcome probability aggregation for project risk panels

mod factors;
mod tables;

pub use factors::{overall_success_probability, Estimate, ProbabilityFactor, SuccessProbabilityModel};
pub use tables::{
    expected_value, OutcomeModel, OutcomeSummary, ProbabilityTable, WeightedOutcome,
    DISTRIBUTION_TOLERANCE_PCT,
};
