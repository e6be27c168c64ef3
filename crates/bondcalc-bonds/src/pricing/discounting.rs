//! Per-period discounting.
//!
//! A yield `y` quoted with `k` compounding periods per year discounts one
//! period by `1 / (1 + y/k)`. The i-th remaining cash flow (1-indexed) is
//! discounted by the i-th power of that factor, whatever its calendar
//! distance from the pricing date.

use bondcalc_core::types::Frequency;

/// Returns the compounding divisor `k` for a payment frequency.
#[must_use]
pub fn compounding_divisor(frequency: Frequency) -> f64 {
    f64::from(frequency.periods_per_year())
}

/// Returns the one-period discount factor `1 / (1 + y/k)`.
#[must_use]
pub fn one_period_discount_factor(yield_value: f64, frequency: Frequency) -> f64 {
    1.0 / (1.0 + yield_value / compounding_divisor(frequency))
}

/// Returns the discount factors `[df^1, df^2, ..., df^n]`.
#[must_use]
pub fn discount_factors(yield_value: f64, frequency: Frequency, n: usize) -> Vec<f64> {
    let df = one_period_discount_factor(yield_value, frequency);
    std::iter::successors(Some(df), |prev| Some(prev * df))
        .take(n)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_compounding_divisor() {
        assert_eq!(compounding_divisor(Frequency::Annual), 1.0);
        assert_eq!(compounding_divisor(Frequency::SemiAnnual), 2.0);
        assert_eq!(compounding_divisor(Frequency::Quarterly), 4.0);
        assert_eq!(compounding_divisor(Frequency::Monthly), 12.0);
    }

    #[test]
    fn test_one_period_factor() {
        assert_relative_eq!(
            one_period_discount_factor(0.06, Frequency::SemiAnnual),
            1.0 / 1.03
        );
        assert_relative_eq!(one_period_discount_factor(0.12, Frequency::Monthly), 1.0 / 1.01);
        assert_eq!(one_period_discount_factor(0.0, Frequency::Annual), 1.0);
    }

    #[test]
    fn test_discount_factors_are_powers() {
        let dfs = discount_factors(0.06, Frequency::SemiAnnual, 4);

        assert_eq!(dfs.len(), 4);
        for (i, df) in dfs.iter().enumerate() {
            assert_relative_eq!(*df, 1.03_f64.powi(-(i as i32 + 1)), epsilon = 1e-15);
        }
    }

    #[test]
    fn test_discount_factors_empty() {
        assert!(discount_factors(0.05, Frequency::Annual, 0).is_empty());
    }
}
