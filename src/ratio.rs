//! Tagged ratio for quantities that can have a zero denominator
//!
//! ARPU, CAC, return multiples and LTV:CAC are reported as `Ratio` so a
//! zero denominator surfaces as `Undefined` instead of NaN or infinity.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ratio {
    Defined(f64),
    Undefined,
}

impl Ratio {
    /// Divide, yielding `Undefined` when the result is not a finite number
    pub fn of(numerator: f64, denominator: f64) -> Self {
        if denominator == 0.0 {
            return Ratio::Undefined;
        }
        let value = numerator / denominator;
        if value.is_finite() {
            Ratio::Defined(value)
        } else {
            Ratio::Undefined
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Ratio::Defined(v) => Some(v),
            Ratio::Undefined => None,
        }
    }

    pub fn is_defined(self) -> bool {
        matches!(self, Ratio::Defined(_))
    }

    /// Apply `f` to a defined value
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        match self {
            Ratio::Defined(v) => {
                let mapped = f(v);
                if mapped.is_finite() {
                    Ratio::Defined(mapped)
                } else {
                    Ratio::Undefined
                }
            }
            Ratio::Undefined => Ratio::Undefined,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Ratio::Defined(v) => match f.precision() {
                Some(p) => format!("{:.*}", p, v),
                None => v.to_string(),
            },
            Ratio::Undefined => "N/A".to_string(),
        };
        // Right-aligned like plain numbers unless asked otherwise
        match (f.width(), f.align()) {
            (Some(w), Some(fmt::Alignment::Left)) => write!(f, "{:<w$}", text, w = w),
            (Some(w), Some(fmt::Alignment::Center)) => write!(f, "{:^w$}", text, w = w),
            (Some(w), _) => write!(f, "{:>w$}", text, w = w),
            (None, _) => f.write_str(&text),
        }
    }
}

// Serialized as a plain number, or null when undefined
impl Serialize for Ratio {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Ratio {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<f64>::deserialize(deserializer)?;
        Ok(value.map(Ratio::Defined).unwrap_or(Ratio::Undefined))
    }
}
