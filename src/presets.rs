//! Reference dashboard dataset as an explicit configuration
//!
//! Mirrors the CSV files under data/. Useful as a starting point and in tests.

use crate::costs::{ChannelCost, CostCategory, CostStructure};
use crate::error::Result;
use crate::investment::{ExitScenario, FundingHistory, InvestmentRound};
use crate::ltv::LtvInputs;
use crate::probability::{ProbabilityFactor, ProbabilityTable, OutcomeModel, SuccessProbabilityModel, WeightedOutcome};
use crate::revenue::{ScenarioParameters, ScenarioSet};

/// Conservative, Realistic and Optimistic revenue scenarios
pub fn revenue_scenarios() -> Result<ScenarioSet> {
    ScenarioSet::new(vec![
        ScenarioParameters::new(
            "Conservative",
            3.0,
            [120_000.0, 280_000.0, 520_000.0],
            [10, 25, 45],
            [12_000.0, 11_200.0, 11_556.0],
        ),
        ScenarioParameters::new(
            "Realistic",
            5.0,
            [180_000.0, 420_000.0, 850_000.0],
            [15, 35, 65],
            [12_000.0, 12_000.0, 13_077.0],
        ),
        ScenarioParameters::new(
            "Optimistic",
            8.0,
            [300_000.0, 750_000.0, 1_600_000.0],
            [25, 60, 120],
            [12_000.0, 12_500.0, 13_333.0],
        ),
    ])
}

pub fn cost_structure() -> Result<CostStructure> {
    CostStructure::new(vec![
        CostCategory::new("Personnel", 420_000.0, 15.0),
        CostCategory::new("Infrastructure", 60_000.0, 20.0),
        CostCategory::new("Sales & Marketing", 150_000.0, 25.0),
        CostCategory::new("Research & Development", 90_000.0, 10.0),
        CostCategory::new("General & Admin", 48_000.0, 5.0),
    ])
}

/// Acquisition spend by channel; blends to a CAC of 22,000
pub fn acquisition_channels() -> Vec<ChannelCost> {
    vec![
        ChannelCost::new("Direct Sales", 180_000.0, 8),
        ChannelCost::new("Partnerships", 66_000.0, 4),
        ChannelCost::new("Digital Marketing", 48_000.0, 2),
        ChannelCost::new("Events", 36_000.0, 1),
    ]
}

/// Pre-Seed through Series A, 1.65M invested in total
pub fn funding_history() -> Result<FundingHistory> {
    FundingHistory::new(vec![
        InvestmentRound::new("Pre-Seed", 150_000.0, 850_000.0, "Founder Network")?,
        InvestmentRound::new("Seed", 500_000.0, 2_500_000.0, "Angel Syndicate")?,
        InvestmentRound::new("Series A", 1_000_000.0, 6_000_000.0, "Growth Partners")?,
    ])
}

pub fn exit_scenarios() -> Vec<ExitScenario> {
    vec![
        ExitScenario::new("Strategic Acquisition", 9_900_000.0, 45.0, "3-5 years").with_holding_years(4),
        ExitScenario::new("Private Equity Buyout", 16_500_000.0, 25.0, "5-7 years").with_holding_years(6),
        ExitScenario::new("IPO", 49_500_000.0, 10.0, "7-10 years").with_holding_years(8),
        ExitScenario::new("Acqui-hire", 3_300_000.0, 20.0, "2-3 years").with_holding_years(3),
    ]
}

pub fn ltv_inputs() -> LtvInputs {
    LtvInputs {
        monthly_fee: 500.0,
        retention_rate_pct: 85.0,
        upsell_rate_pct: 15.0,
        average_lifespan_months: 24,
    }
}

pub fn success_factors() -> Result<SuccessProbabilityModel> {
    SuccessProbabilityModel::new(vec![
        ProbabilityFactor::new("Technical Feasibility", 75.0, 90.0, 60.0),
        ProbabilityFactor::new("Team Capability", 80.0, 92.0, 65.0),
        ProbabilityFactor::new("Market Demand", 85.0, 95.0, 70.0),
        ProbabilityFactor::new("Regulatory Approval", 90.0, 98.0, 80.0),
        ProbabilityFactor::new("Funding Availability", 70.0, 85.0, 50.0),
    ])
}

/// Project outcome panel: completion timing, budget and revenue tables
pub fn outcome_model() -> Result<OutcomeModel> {
    Ok(OutcomeModel {
        completion_timing: ProbabilityTable::new(
            "Completion Month",
            vec![
                WeightedOutcome::labeled("Month 10", 10.0, 15.0),
                WeightedOutcome::labeled("Month 12", 12.0, 45.0),
                WeightedOutcome::labeled("Month 14", 14.0, 30.0),
                WeightedOutcome::labeled("Month 16", 16.0, 10.0),
            ],
        ),
        budget: ProbabilityTable::new(
            "Final Budget",
            vec![
                WeightedOutcome::labeled("Under budget", 850_000.0, 20.0),
                WeightedOutcome::labeled("On budget", 1_000_000.0, 50.0),
                WeightedOutcome::labeled("20% over", 1_200_000.0, 25.0),
                WeightedOutcome::labeled("50% over", 1_500_000.0, 5.0),
            ],
        ),
        revenue: ProbabilityTable::new(
            "Year 3 Revenue",
            vec![
                WeightedOutcome::labeled("Conservative", 520_000.0, 25.0),
                WeightedOutcome::labeled("Realistic", 850_000.0, 50.0),
                WeightedOutcome::labeled("Optimistic", 1_600_000.0, 25.0),
            ],
        ),
        success_factors: success_factors()?,
    })
}
