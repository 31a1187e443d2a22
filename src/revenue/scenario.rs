//! Revenue scenario parameters and named scenario sets

use crate::error::{ensure_non_negative, ModelError, Result};
use serde::{Deserialize, Serialize};

/// Number of planning years a scenario carries figures for
pub const PLAN_YEARS: usize = 3;

/// Inputs for one named revenue scenario (Conservative / Realistic / Optimistic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameters {
    /// Unique within a scenario set
    pub name: String,

    /// Monthly growth rate in percent (2.5 = 2.5% per month)
    pub monthly_growth_rate_pct: f64,

    /// Annual revenue for years 1..=3
    pub yearly_revenue: [f64; PLAN_YEARS],

    /// Customer count for years 1..=3
    pub customer_count_by_year: [u64; PLAN_YEARS],

    /// Planned average revenue per customer for years 1..=3
    pub avg_revenue_per_customer_by_year: [f64; PLAN_YEARS],
}

impl ScenarioParameters {
    pub fn new(
        name: impl Into<String>,
        monthly_growth_rate_pct: f64,
        yearly_revenue: [f64; PLAN_YEARS],
        customer_count_by_year: [u64; PLAN_YEARS],
        avg_revenue_per_customer_by_year: [f64; PLAN_YEARS],
    ) -> Self {
        Self {
            name: name.into(),
            monthly_growth_rate_pct,
            yearly_revenue,
            customer_count_by_year,
            avg_revenue_per_customer_by_year,
        }
    }

    /// Monthly growth rate as a decimal
    pub fn monthly_growth_rate(&self) -> f64 {
        self.monthly_growth_rate_pct / 100.0
    }

    /// Zero-based index into the yearly tables for a 1-based plan year.
    /// Years past the plan reuse the final year's figures.
    pub fn year_index(year: u32) -> usize {
        (year.max(1) as usize).min(PLAN_YEARS) - 1
    }

    pub fn revenue_for_year(&self, year: u32) -> f64 {
        self.yearly_revenue[Self::year_index(year)]
    }

    pub fn customers_for_year(&self, year: u32) -> u64 {
        self.customer_count_by_year[Self::year_index(year)]
    }

    pub fn planned_arpu(&self, year: u32) -> f64 {
        self.avg_revenue_per_customer_by_year[Self::year_index(year)]
    }

    /// Check ranges; declining year-over-year figures are accepted but logged
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::invalid("name", "scenario name must not be empty"));
        }
        ensure_non_negative("monthly_growth_rate_pct", self.monthly_growth_rate_pct)?;
        for &revenue in &self.yearly_revenue {
            ensure_non_negative("yearly_revenue", revenue)?;
        }
        for &arpu in &self.avg_revenue_per_customer_by_year {
            ensure_non_negative("avg_revenue_per_customer_by_year", arpu)?;
        }

        let revenue_declines = self.yearly_revenue.windows(2).any(|w| w[1] < w[0]);
        let customers_decline = self.customer_count_by_year.windows(2).any(|w| w[1] < w[0]);
        if revenue_declines || customers_decline {
            log::warn!(
                "scenario '{}' has declining year-over-year figures; projection will decline accordingly",
                self.name
            );
        }
        Ok(())
    }
}

/// Ordered collection of scenarios with unique names
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScenarioList")]
pub struct ScenarioSet {
    scenarios: Vec<ScenarioParameters>,
}

#[derive(Deserialize)]
struct ScenarioList {
    scenarios: Vec<ScenarioParameters>,
}

impl TryFrom<ScenarioList> for ScenarioSet {
    type Error = ModelError;

    fn try_from(list: ScenarioList) -> Result<Self> {
        Self::new(list.scenarios)
    }
}

impl ScenarioSet {
    /// Build a set, rejecting invalid or duplicate scenarios
    pub fn new(scenarios: Vec<ScenarioParameters>) -> Result<Self> {
        for (i, scenario) in scenarios.iter().enumerate() {
            scenario.validate()?;
            let duplicate = scenarios[..i]
                .iter()
                .any(|other| other.name.eq_ignore_ascii_case(&scenario.name));
            if duplicate {
                return Err(ModelError::invalid(
                    "name",
                    format!("duplicate scenario name '{}'", scenario.name),
                ));
            }
        }
        Ok(Self { scenarios })
    }

    /// Look up a scenario by name (case-insensitive)
    pub fn get(&self, name: &str) -> Option<&ScenarioParameters> {
        self.scenarios.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.scenarios.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScenarioParameters> {
        self.scenarios.iter()
    }

    pub fn as_slice(&self) -> &[ScenarioParameters] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(name: &str) -> ScenarioParameters {
        ScenarioParameters::new(
            name,
            3.0,
            [100_000.0, 250_000.0, 500_000.0],
            [20, 45, 80],
            [5_000.0, 5_500.0, 6_250.0],
        )
    }

    #[test]
    fn test_year_index_clamps_to_plan() {
        assert_eq!(ScenarioParameters::year_index(1), 0);
        assert_eq!(ScenarioParameters::year_index(3), 2);
        assert_eq!(ScenarioParameters::year_index(5), 2);
        assert_eq!(scenario("a").revenue_for_year(4), 500_000.0);
    }

    #[test]
    fn test_validate_rejects_negative_inputs() {
        let mut s = scenario("a");
        s.monthly_growth_rate_pct = -1.0;
        assert!(s.validate().is_err());

        let mut s = scenario("a");
        s.yearly_revenue[1] = f64::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_names() {
        let set = ScenarioSet::new(vec![scenario("Base")]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(serde_json::from_str::<ScenarioSet>(&json).unwrap(), set);

        let duplicated = format!(
            r#"{{"scenarios":[{},{}]}}"#,
            serde_json::to_string(&scenario("Base")).unwrap(),
            serde_json::to_string(&scenario("base")).unwrap()
        );
        assert!(serde_json::from_str::<ScenarioSet>(&duplicated).is_err());
    }

    #[test]
    fn test_declining_inputs_are_accepted() {
        let mut s = scenario("a");
        s.yearly_revenue = [300_000.0, 200_000.0, 100_000.0];
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_set_rejects_duplicate_names() {
        let result = ScenarioSet::new(vec![scenario("Realistic"), scenario("realistic")]);
        assert!(matches!(result, Err(ModelError::InvalidInput { field: "name", .. })));
    }

    #[test]
    fn test_set_lookup() {
        let set = ScenarioSet::new(vec![scenario("Conservative"), scenario("Optimistic")]).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get("optimistic").is_some());
        assert!(set.get("Realistic").is_none());
        assert_eq!(set.names(), vec!["Conservative", "Optimistic"]);
    }
}
