//! Option kinds and payoff evaluation.

use std::fmt;
use std::str::FromStr;

use crate::error::EngineError;

/// European option kind for the basket payoff.
///
/// Unknown option-kind text is rejected when parsing (see [`FromStr`]),
/// so an invalid kind can never reach the payoff evaluation itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Payoff `max(value - strike, 0)`.
    #[default]
    Call,
    /// Payoff `max(strike - value, 0)`.
    Put,
}

impl OptionKind {
    /// Evaluates the payoff for one simulated basket value.
    ///
    /// Always non-negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_engine::payoff::OptionKind;
    ///
    /// assert_eq!(OptionKind::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionKind::Put.payoff(110.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, value: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (value - strike).max(0.0),
            Self::Put => (strike - value).max(0.0),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(Self::Call),
            "put" => Ok(Self::Put),
            other => Err(EngineError::UnknownOptionKind(other.to_string())),
        }
    }
}
