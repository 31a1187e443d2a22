//! Operating cost categories and their monthly projection

use crate::error::{ensure_finite, ensure_non_negative, ModelError, Result};
use crate::growth;
use serde::{Deserialize, Serialize};

/// One operating cost line, e.g. "Personnel" or "Infrastructure"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostCategory {
    pub category: String,
    pub annual_base_amount: f64,
    /// Annual growth in percent; negative values model shrinking spend
    pub annual_growth_rate_pct: f64,
}

impl CostCategory {
    pub fn new(category: impl Into<String>, annual_base_amount: f64, annual_growth_rate_pct: f64) -> Self {
        Self {
            category: category.into(),
            annual_base_amount,
            annual_growth_rate_pct,
        }
    }

    /// Amount for a 1-based month. Growth compounds annually but is applied
    /// continuously through a fractional year exponent.
    pub fn monthly_amount(&self, month: u32) -> Result<f64> {
        let years_elapsed = month.saturating_sub(1) as f64 / 12.0;
        let factor = growth::project_fractional(1.0, self.annual_growth_rate_pct / 100.0, years_elapsed)?;
        Ok(self.annual_base_amount / 12.0 * factor)
    }

    fn validate(&self) -> Result<()> {
        if self.category.trim().is_empty() {
            return Err(ModelError::invalid("category", "category name must not be empty"));
        }
        ensure_non_negative("annual_base_amount", self.annual_base_amount)?;
        ensure_finite("annual_growth_rate_pct", self.annual_growth_rate_pct)?;
        Ok(())
    }
}

/// Ordered set of cost categories, unique by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CategoryList")]
pub struct CostStructure {
    categories: Vec<CostCategory>,
}

#[derive(Deserialize)]
struct CategoryList {
    categories: Vec<CostCategory>,
}

impl TryFrom<CategoryList> for CostStructure {
    type Error = ModelError;

    fn try_from(list: CategoryList) -> Result<Self> {
        Self::new(list.categories)
    }
}

impl CostStructure {
    pub fn new(categories: Vec<CostCategory>) -> Result<Self> {
        if categories.is_empty() {
            return Err(ModelError::EmptyHistory("cost structure"));
        }
        for (i, category) in categories.iter().enumerate() {
            category.validate()?;
            if categories[..i].iter().any(|c| c.category == category.category) {
                return Err(ModelError::invalid(
                    "category",
                    format!("duplicate cost category '{}'", category.category),
                ));
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[CostCategory] {
        &self.categories
    }

    /// Sum of the categories' base amounts
    pub fn annual_base_total(&self) -> f64 {
        self.categories.iter().map(|c| c.annual_base_amount).sum()
    }
}

/// Cost for one category in one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: f64,
}

/// One projected month of operating costs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyCostPoint {
    pub month: u32,
    pub per_category: Vec<CategoryAmount>,
    pub total_costs: f64,
}

impl MonthlyCostPoint {
    pub fn amount_for(&self, category: &str) -> Option<f64> {
        self.per_category
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.amount)
    }
}

/// Project monthly costs per category for months `1..=horizon_months`
pub fn project_monthly_costs(structure: &CostStructure, horizon_months: u32) -> Result<Vec<MonthlyCostPoint>> {
    if horizon_months == 0 {
        return Err(ModelError::invalid("horizon_months", "must be at least 1"));
    }

    let mut points = Vec::with_capacity(horizon_months as usize);
    for month in 1..=horizon_months {
        let per_category = structure
            .categories
            .iter()
            .map(|c| -> Result<CategoryAmount> {
                Ok(CategoryAmount {
                    category: c.category.clone(),
                    amount: c.monthly_amount(month)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let total_costs = per_category.iter().map(|c| c.amount).sum();

        points.push(MonthlyCostPoint {
            month,
            per_category,
            total_costs,
        });
    }

    log::debug!(
        "projected {} months of costs across {} categories",
        points.len(),
        structure.categories.len()
    );
    Ok(points)
}

/// Total cost per category over the projected months, in structure order
pub fn category_totals(points: &[MonthlyCostPoint]) -> Vec<CategoryAmount> {
    let mut totals: Vec<CategoryAmount> = Vec::new();
    for point in points {
        for entry in &point.per_category {
            match totals.iter_mut().find(|t| t.category == entry.category) {
                Some(total) => total.amount += entry.amount,
                None => totals.push(entry.clone()),
            }
        }
    }
    totals
}
