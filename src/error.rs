//! # Errors
//!
//! $$
//! \mathcal{E} = \lbrace \text{InvalidParameter},\ \text{ComputationError} \rbrace
//! $$
//!
use std::error::Error;
use std::fmt;

/// Failure modes of the gamma sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GammaError {
  /// Caller input out of range: shape, scale or rate not finite and positive,
  /// or a draw count (`name == "n"`) that is negative or too large to allocate.
  InvalidParameter {
    /// `"shape"`, `"scale"`, `"rate"` or `"n"`.
    name: &'static str,
    /// Offending value, widened to `f64`.
    value: f64,
    /// Admissible range, e.g. `"finite and positive"`.
    expected: &'static str,
  },
  /// Rejection loop ran past the configured iteration cap.
  ComputationError {
    /// Number of proposals attempted before giving up.
    iterations: usize,
  },
}

impl GammaError {
  pub(crate) fn invalid_count(n: i64, expected: &'static str) -> Self {
    GammaError::InvalidParameter {
      name: "n",
      value: n as f64,
      expected,
    }
  }

  pub fn is_invalid_parameter(&self) -> bool {
    matches!(self, GammaError::InvalidParameter { .. })
  }

  pub fn is_computation_error(&self) -> bool {
    matches!(self, GammaError::ComputationError { .. })
  }
}

impl fmt::Display for GammaError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GammaError::InvalidParameter {
        name,
        value,
        expected,
      } => write!(f, "{name} must be {expected}, got {value}"),
      GammaError::ComputationError { iterations } => write!(
        f,
        "gamma rejection loop did not accept a proposal within {iterations} iterations"
      ),
    }
  }
}

impl Error for GammaError {}

pub type Result<T> = std::result::Result<T, GammaError>;
