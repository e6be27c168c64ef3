//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The function does not change sign across the bracket.
    #[error("No bracket: f({a}) = {fa:.6e} and f({b}) = {fb:.6e} have the same sign")]
    NoBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The iteration cap was reached before the tolerance was met.
    #[error("Did not converge after {iterations} iterations (residual: {residual:.2e})")]
    DidNotConverge {
        /// Number of iterations attempted.
        iterations: u32,
        /// Function value at the last midpoint.
        residual: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a did-not-converge error.
    #[must_use]
    pub fn did_not_converge(iterations: u32, residual: f64) -> Self {
        Self::DidNotConverge {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::did_not_converge(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));

        let err = MathError::NoBracket {
            a: 0.0,
            b: 1.0,
            fa: 2.0,
            fb: 1.0,
        };
        assert!(err.to_string().starts_with("No bracket"));
    }
}
