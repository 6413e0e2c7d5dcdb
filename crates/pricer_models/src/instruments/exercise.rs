//! Option exercise style definitions.

use serde::{Deserialize, Serialize};

/// Option exercise style.
///
/// Selects whether a lattice applies the early-exercise test at interior
/// nodes. The European style on a lattice gives the benchmark that converges
/// to the closed form.
///
/// # Examples
/// ```
/// use pricer_models::instruments::ExerciseStyle;
///
/// assert!(ExerciseStyle::American.allows_early_exercise());
/// assert!(!ExerciseStyle::European.allows_early_exercise());
/// assert_eq!(ExerciseStyle::default(), ExerciseStyle::American);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStyle {
    /// Exercise only at expiry.
    European,
    /// Exercise at any time before expiry.
    #[default]
    American,
}

impl ExerciseStyle {
    /// Whether exercise is allowed before expiry.
    #[inline]
    pub fn allows_early_exercise(&self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl std::fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "European"),
            ExerciseStyle::American => write!(f, "American"),
        }
    }
}
