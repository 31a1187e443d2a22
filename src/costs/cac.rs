//! Customer acquisition cost by channel

use crate::error::{ensure_non_negative, Result};
use crate::ratio::Ratio;
use serde::{Deserialize, Serialize};

/// Acquisition spend and results for one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelCost {
    pub channel: String,
    pub cost: f64,
    pub customers_acquired: u64,
}

impl ChannelCost {
    pub fn new(channel: impl Into<String>, cost: f64, customers_acquired: u64) -> Self {
        Self {
            channel: channel.into(),
            cost,
            customers_acquired,
        }
    }

    pub fn cac(&self) -> Ratio {
        Ratio::of(self.cost, self.customers_acquired as f64)
    }
}

/// CAC for one channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentCac {
    pub channel: String,
    pub cac: Ratio,
    /// Share of total customers acquired through this channel, in percent
    pub customer_share_pct: Ratio,
}

fn validate(channels: &[ChannelCost]) -> Result<()> {
    for channel in channels {
        ensure_non_negative("cost", channel.cost)?;
    }
    Ok(())
}

/// `sum(cost) / sum(customers_acquired)`, undefined when no customers were acquired
pub fn blended_cac(channels: &[ChannelCost]) -> Result<Ratio> {
    validate(channels)?;
    let total_cost: f64 = channels.iter().map(|c| c.cost).sum();
    let total_customers: u64 = channels.iter().map(|c| c.customers_acquired).sum();
    Ok(Ratio::of(total_cost, total_customers as f64))
}

/// Per-channel CAC and customer share
pub fn segmented_cac(channels: &[ChannelCost]) -> Result<Vec<SegmentCac>> {
    validate(channels)?;
    let total_customers: u64 = channels.iter().map(|c| c.customers_acquired).sum();
    Ok(channels
        .iter()
        .map(|c| SegmentCac {
            channel: c.channel.clone(),
            cac: c.cac(),
            customer_share_pct: Ratio::of(c.customers_acquired as f64 * 100.0, total_customers as f64),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn channels() -> Vec<ChannelCost> {
        vec![
            ChannelCost::new("Direct Sales", 180_000.0, 8),
            ChannelCost::new("Partnerships", 60_000.0, 4),
            ChannelCost::new("Content Marketing", 24_000.0, 0),
        ]
    }

    #[test]
    fn test_blended_cac() {
        let cac = blended_cac(&channels()).unwrap();
        assert_relative_eq!(cac.value().unwrap(), 264_000.0 / 12.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_customers_is_undefined_not_nan() {
        let cac = blended_cac(&[ChannelCost::new("Events", 10_000.0, 0)]).unwrap();
        assert_eq!(cac, Ratio::Undefined);
        assert_eq!(blended_cac(&[]).unwrap(), Ratio::Undefined);
    }

    #[test]
    fn test_segmented_cac() {
        let segments = segmented_cac(&channels()).unwrap();
        assert_eq!(segments.len(), 3);
        assert_relative_eq!(segments[0].cac.value().unwrap(), 22_500.0, epsilon = 1e-9);
        assert_relative_eq!(segments[1].customer_share_pct.value().unwrap(), 100.0 / 3.0, epsilon = 1e-9);
        assert_eq!(segments[2].cac, Ratio::Undefined);
    }

    #[test]
    fn test_negative_cost_rejected() {
        assert!(blended_cac(&[ChannelCost::new("Ads", -1.0, 3)]).is_err());
    }
}
