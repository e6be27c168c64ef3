//! # bondcalc Math
//!
//! Numerical root finding for the bondcalc valuation engine.
//!
//! - **Solvers**: bracketing bisection with an iteration cap
//!
//! The solver is generic over any scalar function `Fn(f64) -> f64`, so the
//! bond crate can invert its pricing function without this crate knowing
//! anything about bonds.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{bisection, BisectionSolver, RootFinder, SolverConfig, SolverResult};
}

pub use error::{MathError, MathResult};
