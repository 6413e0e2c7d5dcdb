//! Multi-leg combination structures.
//!
//! - [`RiskReversal`]: one call leg against one put leg
//! - [`Seagull`]: a call leg against two put legs at ordered strikes
//!
//! Legs carry their own strike and volatility; spot, tenors and rates come
//! from the shared [`PricingParameters`](pricer_core::types::PricingParameters)
//! handed to the composer.

use pricer_core::types::{OptionKind, PricingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::error::InstrumentError;

/// Position direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Long position.
    #[default]
    Long,
    /// Short position.
    Short,
}

impl Direction {
    /// `+1` for long, `-1` for short.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Long => 1.0,
            Direction::Short => -1.0,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Long => write!(f, "Long"),
            Direction::Short => write!(f, "Short"),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "long" => Ok(Direction::Long),
            "short" => Ok(Direction::Short),
            other => Err(InstrumentError::InvalidParameter {
                message: format!("unknown direction '{}': expected long or short", other),
            }),
        }
    }
}

/// Strike and volatility of one vanilla leg.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinationLeg {
    /// Leg strike.
    pub strike: f64,
    /// Leg volatility.
    pub volatility: f64,
}

impl CombinationLeg {
    /// Creates a validated leg.
    ///
    /// # Errors
    ///
    /// Returns `InstrumentError` for a non-positive strike or negative volatility.
    pub fn new(strike: f64, volatility: f64) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        if !volatility.is_finite() || volatility < 0.0 {
            return Err(InstrumentError::InvalidVolatility { volatility });
        }
        Ok(Self { strike, volatility })
    }
}

/// Combination construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombinationError {
    /// Seagull put strikes are not strictly ordered.
    #[error("Invalid seagull: put-low strike {put_low} must be below put-mid strike {put_mid}")]
    StrikeOrdering {
        /// Lower put strike
        put_low: f64,
        /// Middle put strike
        put_mid: f64,
    },

    /// A leg failed validation.
    #[error(transparent)]
    Leg(#[from] InstrumentError),
}

impl From<CombinationError> for PricingError {
    fn from(err: CombinationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

/// Long call against short put (for a long direction).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskReversal {
    /// Position direction.
    pub direction: Direction,
    /// Call leg.
    pub call: CombinationLeg,
    /// Put leg.
    pub put: CombinationLeg,
}

impl RiskReversal {
    /// Creates a risk reversal.
    pub fn new(direction: Direction, call: CombinationLeg, put: CombinationLeg) -> Self {
        Self {
            direction,
            call,
            put,
        }
    }
}

/// Call leg against a put spread: `+call - put_mid - put_low` for a long direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Seagull {
    /// Position direction.
    #[serde(default)]
    pub direction: Direction,
    /// Call leg.
    pub call: CombinationLeg,
    /// Higher-strike put leg.
    pub put_mid: CombinationLeg,
    /// Lower-strike put leg.
    pub put_low: CombinationLeg,
}

impl Seagull {
    /// Creates a long seagull.
    ///
    /// # Errors
    ///
    /// Returns `CombinationError::StrikeOrdering` unless `put_low.strike < put_mid.strike`.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{CombinationLeg, Seagull};
    ///
    /// let call = CombinationLeg::new(1.15, 0.09).unwrap();
    /// let mid = CombinationLeg::new(1.08, 0.10).unwrap();
    /// let low = CombinationLeg::new(1.04, 0.11).unwrap();
    ///
    /// assert!(Seagull::new(call, mid, low).is_ok());
    /// assert!(Seagull::new(call, low, mid).is_err());
    /// ```
    pub fn new(
        call: CombinationLeg,
        put_mid: CombinationLeg,
        put_low: CombinationLeg,
    ) -> Result<Self, CombinationError> {
        let seagull = Self {
            direction: Direction::Long,
            call,
            put_mid,
            put_low,
        };
        seagull.validate()?;
        Ok(seagull)
    }

    /// Returns a copy with a different direction.
    #[inline]
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Checks the put strike ordering.
    pub fn validate(&self) -> Result<(), CombinationError> {
        if self.put_low.strike >= self.put_mid.strike {
            return Err(CombinationError::StrikeOrdering {
                put_low: self.put_low.strike,
                put_mid: self.put_mid.strike,
            });
        }
        Ok(())
    }
}

/// A combination structure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Combination {
    /// Risk reversal.
    RiskReversal(RiskReversal),
    /// Seagull.
    Seagull(Seagull),
}

impl Combination {
    /// Signed legs in definition order (call legs first).
    pub fn legs(&self) -> Vec<(f64, OptionKind, CombinationLeg)> {
        match self {
            Combination::RiskReversal(rr) => {
                let s = rr.direction.sign();
                vec![(s, OptionKind::Call, rr.call), (-s, OptionKind::Put, rr.put)]
            }
            Combination::Seagull(sg) => {
                let s = sg.direction.sign();
                vec![
                    (s, OptionKind::Call, sg.call),
                    (-s, OptionKind::Put, sg.put_mid),
                    (-s, OptionKind::Put, sg.put_low),
                ]
            }
        }
    }

    /// Checks structural invariants.
    pub fn validate(&self) -> Result<(), CombinationError> {
        match self {
            Combination::RiskReversal(_) => Ok(()),
            Combination::Seagull(sg) => sg.validate(),
        }
    }

    /// Short name of the structure.
    pub fn name(&self) -> &'static str {
        match self {
            Combination::RiskReversal(_) => "risk reversal",
            Combination::Seagull(_) => "seagull",
        }
    }
}
