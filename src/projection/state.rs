//! Running state while walking a cash-flow series

/// Accumulators carried from one month to the next
#[derive(Debug, Clone, Default)]
pub struct CashFlowState {
    /// Current month (1-indexed, 0 before the first month)
    pub month: u32,

    /// Running sum of net cash flow, 0 before month 1
    pub cumulative_cash_flow: f64,

    /// First month with positive cumulative cash flow
    pub breakeven_month: Option<u32>,
}

impl CashFlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance to the next month, applying its net cash flow
    pub fn advance_month(&mut self, net_cash_flow: f64) {
        self.month += 1;
        self.cumulative_cash_flow += net_cash_flow;

        if self.breakeven_month.is_none() && self.cumulative_cash_flow > 0.0 {
            self.breakeven_month = Some(self.month);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakeven_recorded_once() {
        let mut state = CashFlowState::new();
        state.advance_month(-100.0);
        assert_eq!(state.breakeven_month, None);
        state.advance_month(150.0);
        assert_eq!(state.breakeven_month, Some(2));
        state.advance_month(-200.0);
        state.advance_month(500.0);
        assert_eq!(state.breakeven_month, Some(2));
        assert_eq!(state.month, 4);
        assert_eq!(state.cumulative_cash_flow, 350.0);
    }
}
