//! Root-finding algorithms.
//!
//! - [`bisection`]: simple and reliable bracketing method
//!
//! Every solver is bounded by [`SolverConfig::max_iterations`], so a
//! stalled search ends with [`MathError::DidNotConverge`](crate::MathError::DidNotConverge)
//! instead of looping.
//!
//! # Example: yield from price
//!
//! ```rust
//! use bondcalc_math::solvers::{bisection, SolverConfig};
//!
//! // 5 annual coupons of 5 on 100 face, price 95
//! let price_fn = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 5.0 / (1.0 + y).powi(t);
//!     }
//!     pv += 100.0 / (1.0 + y).powi(5);
//!     pv - 95.0
//! };
//!
//! let result = bisection(price_fn, 0.0, 0.20, &SolverConfig::default()).unwrap();
//! assert!(result.root > 0.05);
//! ```

mod bisection;

pub use bisection::bisection;

use crate::error::MathResult;

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 200;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
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
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used. Diagnostic only.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Trait for bracketing root finders.
///
/// Callers that need to invert a monotone function hand over the function
/// and a bracket `[lower, upper]`; the solver owns the iteration.
pub trait RootFinder: Send + Sync {
    /// Finds a root of `f` inside `[lower, upper]`.
    fn find_root<F>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Bisection solver implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl RootFinder for BisectionSolver {
    fn find_root<F>(
        &self,
        f: F,
        lower: f64,
        upper: f64,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
    {
        bisection(f, lower, upper, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}
