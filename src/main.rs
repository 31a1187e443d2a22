//! Scenario Finance CLI
//!
//! Runs one revenue scenario through the cash-flow model and prints the
//! dashboard KPIs: monthly table head, summary, unit economics, exit returns
//! and project outcome probabilities.

use anyhow::{bail, Context, Result};
use clap::Parser;
use scenario_finance::{
    assumptions::{loader::LoadedModelData, ModelAssumptions},
    costs::blended_cac,
    investment::{evaluate_exit_scenarios, expected_exit_valuation},
    ltv::calculate_ltv_with_cac,
    presets,
    projection::Runway,
    ScenarioRunner,
};
use serde::Serialize;
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scenario_finance", version, about = "Scenario-based financial projections")]
struct Args {
    /// Revenue scenario to project
    #[arg(long, default_value = "Realistic")]
    scenario: String,

    /// Override the projection horizon in months
    #[arg(long)]
    months: Option<u32>,

    /// Directory with scenarios.csv, cost_structure.csv, funding_rounds.csv
    /// and exit_scenarios.csv (built-in reference data when omitted)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// JSON file overriding model assumptions
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Starting cash used for the runway figure
    #[arg(long, default_value_t = 1_650_000.0)]
    starting_cash: f64,

    /// Print the full report as JSON instead of tables
    #[arg(long)]
    json: bool,

    /// Write the monthly cash-flow series to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    report: &'a scenario_finance::ScenarioReport,
    ltv: &'a scenario_finance::LtvResult,
    exits: &'a [scenario_finance::investment::ExitEvaluation],
    outcomes: &'a scenario_finance::probability::OutcomeSummary,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut assumptions = match &args.assumptions {
        Some(path) => ModelAssumptions::from_json_path(path)
            .with_context(|| format!("loading assumptions from {}", path.display()))?,
        None => ModelAssumptions::default(),
    };
    if let Some(months) = args.months {
        assumptions = assumptions.with_horizon(months);
    }

    let data = match &args.data_dir {
        Some(dir) => LoadedModelData::load_from(dir)
            .with_context(|| format!("loading model data from {}", dir.display()))?,
        None => LoadedModelData {
            scenarios: presets::revenue_scenarios()?,
            cost_structure: presets::cost_structure()?,
            funding_history: presets::funding_history()?,
            exit_scenarios: presets::exit_scenarios(),
        },
    };

    let runner = ScenarioRunner::new(assumptions.clone(), data.cost_structure.clone())
        .context("invalid model assumptions")?;
    let report = match runner.run_named(&data.scenarios, &args.scenario) {
        Some(report) => report.with_context(|| format!("projecting scenario '{}'", args.scenario))?,
        None => bail!(
            "unknown scenario '{}'; available: {}",
            args.scenario,
            data.scenarios.names().join(", ")
        ),
    };

    let cac = blended_cac(&presets::acquisition_channels())?;
    let ltv = calculate_ltv_with_cac(&presets::ltv_inputs(), cac, assumptions.upsell_uplift_factor)?;
    let exits = evaluate_exit_scenarios(&data.funding_history, &data.exit_scenarios)?;
    let outcomes = presets::outcome_model()?.summarize()?;

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        let mut writer = csv::Writer::from_writer(file);
        for point in &report.cash_flow.points {
            writer.serialize(point)?;
        }
        writer.flush()?;
        log::info!("wrote {} months to {}", report.cash_flow.len(), path.display());
    }

    if args.json {
        let output = JsonOutput {
            report: &report,
            ltv: &ltv,
            exits: &exits,
            outcomes: &outcomes,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Scenario Finance v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");
    println!("Scenario: {} ({} months)", report.scenario, report.cash_flow.len());
    println!();

    println!("{:>5} {:>4} {:>14} {:>10} {:>10} {:>14} {:>14} {:>14}",
        "Month", "Year", "Revenue", "Customers", "ARPU", "Costs", "Net CF", "Cumulative");
    println!("{}", "-".repeat(92));
    for (rev, cf) in report.revenue.iter().zip(&report.cash_flow.points).take(12) {
        println!("{:>5} {:>4} {:>14.2} {:>10} {:>10.2} {:>14.2} {:>14.2} {:>14.2}",
            cf.month,
            rev.year,
            cf.revenue,
            rev.customers,
            rev.arpu,
            cf.operating_costs,
            cf.net_cash_flow,
            cf.cumulative_cash_flow,
        );
    }
    if report.cash_flow.len() > 12 {
        println!("... ({} more months)", report.cash_flow.len() - 12);
    }

    let summary = &report.summary;
    println!("\nSummary:");
    println!("  Total Revenue: ${:.2}", summary.total_revenue);
    println!("  Total Costs: ${:.2}", summary.total_costs);
    println!("  Final Cumulative Cash Flow: ${:.2}", summary.final_cumulative_cash_flow);
    match summary.breakeven.month() {
        Some(m) => println!("  Breakeven: month {}", m),
        None => println!("  Breakeven: not within horizon"),
    }
    if let Some(balance) = summary.minimum_cash_balance {
        println!("  Minimum Cash Balance: ${:.2}", balance);
    }
    println!("  Average Monthly Burn: ${:.2}", summary.average_monthly_burn);
    println!("  Rule of 40: {:.1}", summary.rule_of_40);
    match report.cash_flow.runway_from(args.starting_cash) {
        Runway::Months(m) => println!("  Runway from ${:.0}: {:.1} months", args.starting_cash, m),
        Runway::Indefinite => println!("  Runway from ${:.0}: beyond horizon", args.starting_cash),
    }

    println!("\nQuarterly:");
    for q in &report.quarterly {
        println!("  Q{:<3} revenue ${:>14.2}  costs ${:>14.2}  net ${:>14.2}",
            q.quarter, q.revenue, q.operating_costs, q.net_cash_flow);
    }

    println!("\nUnit Economics:");
    println!("  Blended CAC: ${:.2}", cac);
    println!("  Total LTV: ${:.2} (base ${:.2}, upsell ${:.2})", ltv.total_ltv, ltv.base_ltv, ltv.upsell_ltv);
    println!("  LTV:CAC: {:.2}", ltv.ltv_cac_ratio);
    match ltv.payback_months.value() {
        Some(months) => println!("  CAC Payback: {:.1} months", months),
        None => println!("  CAC Payback: N/A"),
    }

    println!("\nExit Scenarios (invested ${:.0}):", data.funding_history.total_invested());
    for exit in &exits {
        let irr = exit
            .annualized_irr
            .map(|r| format!("{:.1}%", r * 100.0))
            .unwrap_or_else(|| "N/A".to_string());
        println!("  {:<24} {:>5.1}%  multiple {:>6.2}x  returns ${:>14.2}  IRR {}",
            exit.scenario, exit.probability_pct, exit.return_multiple, exit.investor_returns, irr);
    }
    println!("  Expected exit valuation: ${:.2}", expected_exit_valuation(&data.exit_scenarios)?);
    if let Ok(valuation) = data.funding_history.current_valuation() {
        println!("  Current valuation: ${:.2}", valuation);
    }

    println!("\nProject Outcomes:");
    println!("  Expected completion: month {:.1}", outcomes.expected_completion_month);
    println!("  Expected budget: ${:.2}", outcomes.expected_budget);
    println!("  Expected revenue: ${:.2}", outcomes.expected_revenue);
    println!("  Success probability: {:.2}% (best {:.2}%, worst {:.2}%)",
        outcomes.success_probability_pct, outcomes.best_case_success_pct, outcomes.worst_case_success_pct);

    if let Some(path) = &args.output {
        println!("\nFull monthly series written to: {}", path.display());
    }

    Ok(())
}
