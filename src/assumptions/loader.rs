//! CSV-based input loader
//!
//! Loads scenario, cost, funding and exit data from CSV files in data/

use crate::costs::{CostCategory, CostStructure};
use crate::error::{ModelError, Result};
use crate::investment::{ExitScenario, FundingHistory, InvestmentRound};
use crate::revenue::{ScenarioParameters, ScenarioSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to the input data directory
pub const DEFAULT_DATA_PATH: &str = "data";

/// Raw CSV row matching scenarios.csv columns
#[derive(Debug, serde::Deserialize)]
struct ScenarioRow {
    #[serde(rename = "Scenario")]
    name: String,
    #[serde(rename = "MonthlyGrowthPct")]
    monthly_growth_rate_pct: f64,
    #[serde(rename = "Year1Revenue")]
    year1_revenue: f64,
    #[serde(rename = "Year2Revenue")]
    year2_revenue: f64,
    #[serde(rename = "Year3Revenue")]
    year3_revenue: f64,
    #[serde(rename = "Year1Customers")]
    year1_customers: u64,
    #[serde(rename = "Year2Customers")]
    year2_customers: u64,
    #[serde(rename = "Year3Customers")]
    year3_customers: u64,
    #[serde(rename = "Year1ARPU")]
    year1_arpu: f64,
    #[serde(rename = "Year2ARPU")]
    year2_arpu: f64,
    #[serde(rename = "Year3ARPU")]
    year3_arpu: f64,
}

impl From<ScenarioRow> for ScenarioParameters {
    fn from(row: ScenarioRow) -> Self {
        ScenarioParameters::new(
            row.name,
            row.monthly_growth_rate_pct,
            [row.year1_revenue, row.year2_revenue, row.year3_revenue],
            [row.year1_customers, row.year2_customers, row.year3_customers],
            [row.year1_arpu, row.year2_arpu, row.year3_arpu],
        )
    }
}

#[derive(Debug, serde::Deserialize)]
struct CostRow {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "AnnualBase")]
    annual_base_amount: f64,
    #[serde(rename = "AnnualGrowthPct")]
    annual_growth_rate_pct: f64,
}

#[derive(Debug, serde::Deserialize)]
struct RoundRow {
    #[serde(rename = "Stage")]
    stage: String,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "PreMoneyValuation")]
    pre_money_valuation: f64,
    #[serde(rename = "LeadInvestor")]
    lead_investor: String,
}

#[derive(Debug, serde::Deserialize)]
struct ExitRow {
    #[serde(rename = "Scenario")]
    name: String,
    #[serde(rename = "ExitValuation")]
    exit_valuation: f64,
    #[serde(rename = "ProbabilityPct")]
    probability_pct: f64,
    #[serde(rename = "Timeframe")]
    timeframe: String,
    #[serde(rename = "HoldingYears", default)]
    holding_years: Option<u32>,
}

fn read_rows<T: serde::de::DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

fn open(path: &Path, file_name: &str) -> Result<File> {
    let full = path.join(file_name);
    File::open(&full).map_err(|e| ModelError::Config(format!("cannot open {}: {}", full.display(), e)))
}

/// Parse a scenario set from CSV text
pub fn read_scenarios<R: Read>(reader: R) -> Result<ScenarioSet> {
    let rows: Vec<ScenarioRow> = read_rows(reader)?;
    ScenarioSet::new(rows.into_iter().map(ScenarioParameters::from).collect())
}

/// Parse a cost structure from CSV text
pub fn read_cost_structure<R: Read>(reader: R) -> Result<CostStructure> {
    let rows: Vec<CostRow> = read_rows(reader)?;
    CostStructure::new(
        rows.into_iter()
            .map(|r| CostCategory::new(r.category, r.annual_base_amount, r.annual_growth_rate_pct))
            .collect(),
    )
}

/// Parse funding rounds from CSV text, in file order
pub fn read_funding_history<R: Read>(reader: R) -> Result<FundingHistory> {
    let rows: Vec<RoundRow> = read_rows(reader)?;
    let rounds = rows
        .into_iter()
        .map(|r| InvestmentRound::new(r.stage, r.amount, r.pre_money_valuation, r.lead_investor))
        .collect::<Result<Vec<_>>>()?;
    FundingHistory::new(rounds)
}

/// Parse exit scenarios from CSV text
pub fn read_exit_scenarios<R: Read>(reader: R) -> Result<Vec<ExitScenario>> {
    let rows: Vec<ExitRow> = read_rows(reader)?;
    rows.into_iter()
        .map(|r| -> Result<ExitScenario> {
            let scenario = ExitScenario {
                name: r.name,
                exit_valuation: r.exit_valuation,
                probability_pct: r.probability_pct,
                timeframe: r.timeframe,
                holding_years: r.holding_years,
            };
            scenario.validate()?;
            Ok(scenario)
        })
        .collect()
}

/// Load scenarios.csv
pub fn load_scenarios(path: &Path) -> Result<ScenarioSet> {
    read_scenarios(open(path, "scenarios.csv")?)
}

/// Load cost_structure.csv
pub fn load_cost_structure(path: &Path) -> Result<CostStructure> {
    read_cost_structure(open(path, "cost_structure.csv")?)
}

/// Load funding_rounds.csv
pub fn load_funding_history(path: &Path) -> Result<FundingHistory> {
    read_funding_history(open(path, "funding_rounds.csv")?)
}

/// Load exit_scenarios.csv
pub fn load_exit_scenarios(path: &Path) -> Result<Vec<ExitScenario>> {
    read_exit_scenarios(open(path, "exit_scenarios.csv")?)
}

/// All CSV inputs from one data directory
#[derive(Debug, Clone)]
pub struct LoadedModelData {
    pub scenarios: ScenarioSet,
    pub cost_structure: CostStructure,
    pub funding_history: FundingHistory,
    pub exit_scenarios: Vec<ExitScenario>,
}

impl LoadedModelData {
    /// Load all inputs from the default path
    pub fn load_default() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_DATA_PATH))
    }

    /// Load all inputs from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = Self {
            scenarios: load_scenarios(path)?,
            cost_structure: load_cost_structure(path)?,
            funding_history: load_funding_history(path)?,
            exit_scenarios: load_exit_scenarios(path)?,
        };
        log::info!(
            "loaded {} scenarios, {} cost categories, {} funding rounds, {} exit scenarios from {}",
            data.scenarios.len(),
            data.cost_structure.categories().len(),
            data.funding_history.rounds().len(),
            data.exit_scenarios.len(),
            path.display()
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_scenarios() {
        let csv = "\
Scenario,MonthlyGrowthPct,Year1Revenue,Year2Revenue,Year3Revenue,Year1Customers,Year2Customers,Year3Customers,Year1ARPU,Year2ARPU,Year3ARPU
Conservative,3,120000,280000,520000,10,25,45,12000,11200,11555
Optimistic,8,300000,750000,1600000,25,60,120,12000,12500,13333
";
        let set = read_scenarios(csv.as_bytes()).unwrap();
        assert_eq!(set.len(), 2);
        let optimistic = set.get("Optimistic").unwrap();
        assert_eq!(optimistic.customer_count_by_year, [25, 60, 120]);
        assert_eq!(optimistic.monthly_growth_rate_pct, 8.0);
    }

    #[test]
    fn test_read_rejects_bad_rows() {
        let csv = "Category,AnnualBase,AnnualGrowthPct\nPersonnel,abc,10\n";
        assert!(matches!(read_cost_structure(csv.as_bytes()), Err(ModelError::Csv(_))));

        let empty = "Category,AnnualBase,AnnualGrowthPct\n";
        assert!(matches!(read_cost_structure(empty.as_bytes()), Err(ModelError::EmptyHistory(_))));
    }

    #[test]
    fn test_read_exits_with_optional_holding_years() {
        let csv = "\
Scenario,ExitValuation,ProbabilityPct,Timeframe,HoldingYears
Acquisition,9900000,40,5-7 years,5
IPO,50000000,10,7-10 years,
";
        let exits = read_exit_scenarios(csv.as_bytes()).unwrap();
        assert_eq!(exits[0].holding_years, Some(5));
        assert_eq!(exits[1].holding_years, None);
    }

    #[test]
    fn test_load_default_data() {
        let result = LoadedModelData::load_default();
        assert!(result.is_ok(), "Failed to load data: {:?}", result.err());

        let data = result.unwrap();
        assert_eq!(data.scenarios.len(), 3);
        assert!(data.scenarios.get("Realistic").is_some());
        assert!(!data.cost_structure.categories().is_empty());
        assert_eq!(data.funding_history.total_invested(), 1_650_000.0);
        assert!(!data.exit_scenarios.is_empty());
    }

    #[test]
    fn test_missing_directory_is_config_error() {
        let result = load_scenarios(Path::new("does/not/exist"));
        assert!(matches!(result, Err(ModelError::Config(_))));
    }
}
