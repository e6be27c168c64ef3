//! Bisection root-finding algorithm.

use tracing::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the bracket, keeping the half whose endpoints still
/// straddle a sign change. Stops when `|f(mid)| < tolerance` or the
/// half-width of the bracket drops below `tolerance`.
///
/// Requires `f(a)` and `f(b)` to have opposite signs (or one of them to be
/// zero). The bounds may be given in either order.
///
/// # Errors
///
/// - [`MathError::NoBracket`] if `f(a)` and `f(b)` share a sign
/// - [`MathError::DidNotConverge`] if `config.max_iterations` is exhausted
/// - [`MathError::InvalidInput`] for non-finite bounds or function values,
///   or a non-positive tolerance
///
/// # Example
///
/// ```rust
/// use bondcalc_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    if !a.is_finite() || !b.is_finite() {
        return Err(MathError::invalid_input(format!(
            "bracket bounds must be finite, got [{a}, {b}]"
        )));
    }
    if !(config.tolerance > 0.0) {
        return Err(MathError::invalid_input(format!(
            "tolerance must be positive, got {}",
            config.tolerance
        )));
    }

    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if !f_lo.is_finite() || !f_hi.is_finite() {
        return Err(MathError::invalid_input(format!(
            "function is not finite at the bracket: f({lo}) = {f_lo}, f({hi}) = {f_hi}"
        )));
    }

    if (f_lo > 0.0 && f_hi > 0.0) || (f_lo < 0.0 && f_hi < 0.0) {
        return Err(MathError::NoBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: lo,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: hi,
            iterations: 0,
            residual: f_hi,
        });
    }

    let mut last_residual = f_lo;

    for iteration in 1..=config.max_iterations {
        let half_width = (hi - lo) / 2.0;
        let mid = lo + half_width;
        let f_mid = f(mid);

        if !f_mid.is_finite() {
            return Err(MathError::invalid_input(format!(
                "function is not finite at {mid}"
            )));
        }

        trace!(iteration, lo, hi, mid, f_mid, "bisection step");

        if f_mid.abs() < config.tolerance || half_width < config.tolerance {
            debug!(root = mid, iterations = iteration, residual = f_mid, "bisection converged");
            return Ok(SolverResult {
                root: mid,
                iterations: iteration,
                residual: f_mid,
            });
        }

        if (f_mid < 0.0) == (f_lo < 0.0) {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
        last_residual = f_mid;
    }

    Err(MathError::did_not_converge(
        config.max_iterations,
        last_residual.abs(),
    ))
}
