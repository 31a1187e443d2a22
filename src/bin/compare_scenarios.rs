//! Run every revenue scenario in parallel and print a KPI comparison
//!
//! Usage: cargo run --bin compare_scenarios -- [--data-dir data] [--json]

use anyhow::{Context, Result};
use clap::Parser;
use scenario_finance::{
    assumptions::{loader::LoadedModelData, ModelAssumptions},
    presets,
    scenario::ScenarioComparison,
    ScenarioRunner,
};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "compare_scenarios", about = "Side-by-side comparison of revenue scenarios")]
struct Args {
    /// Data directory (built-in reference data when omitted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Projection horizon in months
    #[arg(long, default_value_t = 36)]
    months: u32,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (scenarios, cost_structure) = match &args.data_dir {
        Some(dir) => {
            let data = LoadedModelData::load_from(dir)
                .with_context(|| format!("loading model data from {}", dir.display()))?;
            (data.scenarios, data.cost_structure)
        }
        None => (presets::revenue_scenarios()?, presets::cost_structure()?),
    };

    let assumptions = ModelAssumptions::default().with_horizon(args.months);
    let runner = ScenarioRunner::new(assumptions, cost_structure).context("invalid model assumptions")?;

    let start = Instant::now();
    let comparison: Vec<ScenarioComparison> = runner.compare(&scenarios).context("running scenarios")?;
    log::info!("ran {} scenarios in {:?}", comparison.len(), start.elapsed());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    println!("{:<14} {:>16} {:>16} {:>16} {:>10} {:>14} {:>8}",
        "Scenario", "Revenue", "Costs", "Cumulative CF", "Breakeven", "Min Balance", "Rule40");
    println!("{}", "-".repeat(100));
    for row in &comparison {
        let breakeven = row
            .breakeven
            .month()
            .map(|m| m.to_string())
            .unwrap_or_else(|| "never".to_string());
        let min_balance = row
            .minimum_cash_balance
            .map(|b| format!("{:.2}", b))
            .unwrap_or_else(|| "N/A".to_string());
        println!("{:<14} {:>16.2} {:>16.2} {:>16.2} {:>10} {:>14} {:>8.1}",
            row.scenario,
            row.total_revenue,
            row.total_costs,
            row.final_cumulative_cash_flow,
            breakeven,
            min_balance,
            row.rule_of_40,
        );
    }

    Ok(())
}
