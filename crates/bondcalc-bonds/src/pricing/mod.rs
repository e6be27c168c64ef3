//! Bond pricing.
//!
//! - [`discounting`]: per-period discount factors
//! - [`BondCalculator`]: price, accrued interest, yield, duration and convexity

pub mod discounting;

mod calculator;

pub use calculator::{BondAnalytics, BondCalculator, DiscountedCashFlow, YieldResult};
