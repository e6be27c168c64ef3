//! Error types for bond operations.

use bondcalc_core::{CoreError, Date};
use bondcalc_math::MathError;
use thiserror::Error;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur during bond operations.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Settlement is on or before the issue date, so no coupon period has started.
    #[error("No prior payment date: settlement {settlement} is on or before issue {issue}")]
    NoPriorPaymentDate {
        /// Settlement date.
        settlement: Date,
        /// Issue date.
        issue: Date,
    },

    /// Settlement date is after maturity.
    #[error("Settlement date {settlement} is after maturity {maturity}")]
    SettlementAfterMaturity {
        /// Settlement date.
        settlement: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// The sum of discounted cash flows is zero or not finite.
    #[error("Degenerate cash flows: total present value is {total_present_value}")]
    DegenerateCashFlow {
        /// Sum of the present values.
        total_present_value: f64,
    },

    /// Every payment falls on or before the pricing date.
    #[error("No cash flows remain after {as_of} (maturity {maturity})")]
    NoRemainingCashFlows {
        /// Pricing date.
        as_of: Date,
        /// Maturity date.
        maturity: Date,
    },

    /// A coupon schedule violates its ordering or shape rules.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the violation.
        reason: String,
    },

    /// Invalid bond specification.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what's invalid.
        reason: String,
    },

    /// Missing required field.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Engine configuration rejected by validation.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of what's invalid.
        reason: String,
    },

    /// Core library error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Root finding error.
    #[error("Solver error: {0}")]
    Math(#[from] MathError),
}

impl BondError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BondError::missing_field("issue_date");
        assert_eq!(err.to_string(), "Missing required field: issue_date");

        let err = BondError::NoPriorPaymentDate {
            settlement: Date::from_ymd(2020, 12, 31).unwrap(),
            issue: Date::from_ymd(2021, 1, 1).unwrap(),
        };
        assert!(err.to_string().contains("2020-12-31"));
    }

    #[test]
    fn test_from_lower_layers() {
        let err: BondError = CoreError::unsupported_convention("ACT/365").into();
        assert!(matches!(err, BondError::Core(_)));

        let err: BondError = MathError::did_not_converge(10, 1.0).into();
        assert!(matches!(
            err,
            BondError::Math(MathError::DidNotConverge { .. })
        ));
    }
}
