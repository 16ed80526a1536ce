//! Shared types for Quick Tip components.
//!
//! This crate provides the value types used across quicktip-core,
//! quicktip-tui and quicktip-cli. All types are serializable so the CLI can
//! emit them as JSON and the config file can name them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel shown for both amounts while no price has been entered.
pub const ZERO_AMOUNT: &str = "0.00";

/// Preset tip percentages, in selector order.
pub const PRESET_PERCENTAGES: [u32; 3] = [0, 10, 15];

/// Selector index of the custom (free-text) segment.
pub const CUSTOM_SEGMENT: usize = PRESET_PERCENTAGES.len();

/// Number of segments in the tip selector (presets plus custom).
pub const SEGMENT_COUNT: usize = CUSTOM_SEGMENT + 1;

/// Which characters a numeric field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericInputMode {
    /// Digits and a single fractional point
    #[default]
    Decimal,
    /// Digits only
    Integer,
}

impl NumericInputMode {
    #[must_use]
    pub fn allows_fraction(self) -> bool {
        matches!(self, Self::Decimal)
    }

    /// Whether a typed character could be part of an amount in this mode.
    #[must_use]
    pub fn accepts_char(self, c: char) -> bool {
        c.is_ascii_digit() || (c == '.' && self.allows_fraction())
    }
}

impl fmt::Display for NumericInputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal => write!(f, "decimal"),
            Self::Integer => write!(f, "integer"),
        }
    }
}

/// Meaning of one tip selector segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TipChoice {
    /// Fixed percentage of the price
    Percent { percent: Decimal },
    /// User enters the tip amount directly
    Custom,
}

impl TipChoice {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Short label for selector rendering ("15%", "Custom")
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Percent { percent } => format!("{}%", percent.normalize()),
            Self::Custom => "Custom".to_string(),
        }
    }
}

/// Active tip mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TipMode {
    /// Preset percentage
    Fixed { percent: Decimal },
    /// Absolute tip amount entered by the user
    Custom { amount: Decimal },
}

impl TipMode {
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom { .. })
    }

    #[must_use]
    pub fn percent(&self) -> Option<Decimal> {
        match self {
            Self::Fixed { percent } => Some(*percent),
            Self::Custom { .. } => None,
        }
    }
}

/// Formatted calculator output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub tip: String,
    pub total: String,
}

impl CalculationResult {
    #[must_use]
    pub fn new(tip: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            tip: tip.into(),
            total: total.into(),
        }
    }

    /// Result shown while the price is absent
    #[must_use]
    pub fn zero() -> Self {
        Self::new(ZERO_AMOUNT, ZERO_AMOUNT)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.tip == ZERO_AMOUNT && self.total == ZERO_AMOUNT
    }
}

impl Default for CalculationResult {
    fn default() -> Self {
        Self::zero()
    }
}

/// Accent color preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Red,
    #[default]
    Yellow,
    Blue,
}

impl Theme {
    /// Map a numeric preference (0 red, 2 blue, anything else yellow).
    #[must_use]
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => Self::Red,
            2 => Self::Blue,
            _ => Self::Yellow,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Blue => write!(f, "blue"),
        }
    }
}
