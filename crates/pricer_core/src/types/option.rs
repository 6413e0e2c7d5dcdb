//! Option kind shared by every product family.

use serde::{Deserialize, Serialize};

/// Call or put.
///
/// - Call: right to buy the foreign currency at the strike
/// - Put: right to sell the foreign currency at the strike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKind {
    /// Right to buy the foreign currency at the strike.
    Call,
    /// Right to sell the foreign currency at the strike.
    Put,
}

impl OptionKind {
    /// `+1` for calls, `-1` for puts.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            OptionKind::Call => 1.0,
            OptionKind::Put => -1.0,
        }
    }

    /// Returns whether this is a call option.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionKind::Call)
    }

    /// Returns whether this is a put option.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionKind::Put)
    }

    /// Immediate-exercise value at `spot`.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.intrinsic(1.2, 1.0), 0.19999999999999996);
    /// assert_eq!(OptionKind::Put.intrinsic(1.2, 1.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionKind::Call => (spot - strike).max(0.0),
            OptionKind::Put => (strike - spot).max(0.0),
        }
    }
}

impl std::fmt::Display for OptionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionKind::Call => write!(f, "Call"),
            OptionKind::Put => write!(f, "Put"),
        }
    }
}

impl std::str::FromStr for OptionKind {
    type Err = crate::types::PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(OptionKind::Call),
            "put" | "p" => Ok(OptionKind::Put),
            other => Err(crate::types::PricingError::InvalidInput(format!(
                "unknown option kind '{}': expected call or put",
                other
            ))),
        }
    }
}
