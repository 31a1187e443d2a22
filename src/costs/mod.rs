//! Operating cost structure and customer acquisition cost

mod structure;
mod cac;

pub use structure::{
    category_totals, project_monthly_costs, CategoryAmount, CostCategory, CostStructure,
    MonthlyCostPoint,
};
pub use cac::{blended_cac, segmented_cac, ChannelCost, SegmentCac};
