//! Revenue scenarios and their monthly projection

mod scenario;
mod model;

pub use scenario::{ScenarioParameters, ScenarioSet, PLAN_YEARS};
pub use model::{
    annual_revenue_totals, project_monthly_revenue, year_of_month, MonthlyRevenuePoint,
    RevenueProjection, DEFAULT_HORIZON_MONTHS,
};
