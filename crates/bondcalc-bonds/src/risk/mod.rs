//! Risk metrics for bonds.
//!
//! Duration and convexity come from [`BondCalculator`](crate::pricing::BondCalculator);
//! this module turns them into a second-order price-change estimate.

use crate::pricing::BondAnalytics;

/// Estimates the price change for a yield shift.
///
/// Uses duration + convexity approximation:
/// ΔP ≈ -D_mod × P × Δy + ½ × C × P × (Δy)²
///
/// # Arguments
///
/// * `modified_duration` - Modified duration
/// * `convexity` - Convexity
/// * `price` - Current price
/// * `yield_change` - Yield change (e.g., 0.01 for 100 bps)
///
/// # Returns
///
/// Estimated price change (absolute, not percentage).
#[must_use]
pub fn price_change_estimate(
    modified_duration: f64,
    convexity: f64,
    price: f64,
    yield_change: f64,
) -> f64 {
    let duration_effect = -modified_duration * price * yield_change;
    let convexity_effect = 0.5 * convexity * price * yield_change.powi(2);

    duration_effect + convexity_effect
}

impl BondAnalytics {
    /// Estimated change in clean price for a yield shift of `yield_change`.
    #[must_use]
    pub fn price_change(&self, yield_change: f64) -> f64 {
        price_change_estimate(
            self.modified_duration,
            self.convexity,
            self.clean_price,
            yield_change,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_price_change_estimate() {
        // 100bp up on a 5-duration bond at par
        let change = price_change_estimate(5.0, 30.0, 100.0, 0.01);
        assert_relative_eq!(change, -5.0 + 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_convexity_term_is_symmetric() {
        let up = price_change_estimate(5.0, 30.0, 100.0, 0.01);
        let down = price_change_estimate(5.0, 30.0, 100.0, -0.01);

        assert_relative_eq!(up + down, 2.0 * 0.15, epsilon = 1e-12);
        assert!(down.abs() > up.abs());
    }

    #[test]
    fn test_zero_shift() {
        assert_eq!(price_change_estimate(5.0, 30.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn test_analytics_price_change() {
        let analytics = BondAnalytics {
            clean_price: 100.0,
            macaulay_duration: 5.125,
            modified_duration: 5.0,
            convexity: 30.0,
        };
        assert_relative_eq!(
            analytics.price_change(0.01),
            price_change_estimate(5.0, 30.0, 100.0, 0.01)
        );
    }
}
