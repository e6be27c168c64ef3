//! Engine configuration.
//!
//! Controls the yield search: the bracket handed to the root finder, the
//! convergence tolerance and the iteration cap. Missing fields take their
//! defaults, so a partial TOML or JSON document is enough.

use bondcalc_math::solvers::SolverConfig;
use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// Exclusive floor for `yield_lower_bound`: `-k` for annual compounding.
const MIN_YIELD_LOWER_BOUND: f64 = -1.0;

fn default_yield_lower_bound() -> f64 {
    0.0
}

fn default_yield_upper_bound() -> f64 {
    1000.0
}

fn default_tolerance() -> f64 {
    1e-5
}

fn default_max_iterations() -> u32 {
    200
}

/// Configuration for [`BondCalculator`](crate::pricing::BondCalculator).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Lower end of the yield bracket (decimal, 0.05 = 5%).
    #[serde(default = "default_yield_lower_bound")]
    pub yield_lower_bound: f64,

    /// Upper end of the yield bracket (decimal).
    #[serde(default = "default_yield_upper_bound")]
    pub yield_upper_bound: f64,

    /// Convergence tolerance on the bracket half-width, and on the price
    /// residual in units of `min(1, price)`.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum bisection iterations before giving up.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            yield_lower_bound: default_yield_lower_bound(),
            yield_upper_bound: default_yield_upper_bound(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
        }
    }
}

impl EngineConfig {
    /// Sets the yield bracket.
    #[must_use]
    pub fn with_yield_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.yield_lower_bound = lower;
        self.yield_upper_bound = upper;
        self
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidConfig` for non-finite or inverted bounds,
    /// a lower bound at or below -1 (where `1 + y/k` stops being positive
    /// for annual bonds), a non-positive tolerance, or a zero iteration cap.
    pub fn validate(&self) -> BondResult<()> {
        if !self.yield_lower_bound.is_finite() || !self.yield_upper_bound.is_finite() {
            return Err(BondError::invalid_config(format!(
                "yield bounds must be finite, got [{}, {}]",
                self.yield_lower_bound, self.yield_upper_bound
            )));
        }
        if self.yield_lower_bound <= MIN_YIELD_LOWER_BOUND {
            return Err(BondError::invalid_config(format!(
                "yield_lower_bound must be above {MIN_YIELD_LOWER_BOUND}, got {}",
                self.yield_lower_bound
            )));
        }
        if self.yield_lower_bound >= self.yield_upper_bound {
            return Err(BondError::invalid_config(format!(
                "yield_lower_bound ({}) must be below yield_upper_bound ({})",
                self.yield_lower_bound, self.yield_upper_bound
            )));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(BondError::invalid_config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(BondError::invalid_config("max_iterations must be at least 1"));
        }
        Ok(())
    }

    /// Returns the solver settings derived from this configuration.
    #[must_use]
    pub fn solver_config(&self) -> SolverConfig {
        SolverConfig::new(self.tolerance, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.yield_lower_bound, 0.0);
        assert_eq!(config.yield_upper_bound, 1000.0);
        assert_eq!(config.tolerance, 1e-5);
        assert_eq!(config.max_iterations, 200);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EngineConfig = serde_json::from_str(r#"{"tolerance": 1e-8}"#).unwrap();
        assert_eq!(config.tolerance, 1e-8);
        assert_eq!(config.yield_upper_bound, 1000.0);
        assert_eq!(config.max_iterations, 200);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<EngineConfig, _> = serde_json::from_str(r#"{"tolerence": 1e-8}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let inverted = EngineConfig::default().with_yield_bounds(1.0, 0.0);
        assert!(matches!(
            inverted.validate(),
            Err(BondError::InvalidConfig { .. })
        ));

        let infinite = EngineConfig::default().with_yield_bounds(0.0, f64::INFINITY);
        assert!(infinite.validate().is_err());

        let zero_tol = EngineConfig::default().with_tolerance(0.0);
        assert!(zero_tol.validate().is_err());

        let no_iter = EngineConfig::default().with_max_iterations(0);
        assert!(no_iter.validate().is_err());
    }

    #[test]
    fn test_validate_lower_bound_floor() {
        for lower in [-1.0, -2.5] {
            let config = EngineConfig::default().with_yield_bounds(lower, 1.0);
            assert!(matches!(
                config.validate(),
                Err(BondError::InvalidConfig { .. })
            ));
        }

        let negative = EngineConfig::default().with_yield_bounds(-0.99, 1.0);
        assert!(negative.validate().is_ok());
    }

    #[test]
    fn test_solver_config() {
        let solver = EngineConfig::default().with_tolerance(1e-7).solver_config();
        assert_eq!(solver.tolerance, 1e-7);
        assert_eq!(solver.max_iterations, 200);
    }
}
