//! # bondcalc Bonds
//!
//! Bond pricing, yield solving and risk measures for the bondcalc valuation engine.
//!
//! This crate provides:
//!
//! - **Instruments**: the [`Instrument`](traits::Instrument) trait and a
//!   fixed-rate bond with a builder
//! - **Cash Flows**: the remaining coupon schedule as of a pricing date
//! - **Pricing**: clean/dirty price, accrued interest, yield from price
//! - **Risk**: Macaulay and modified duration, convexity, price-change estimates
//!
//! Price, duration and convexity share one discounting model: the i-th
//! remaining cash flow is discounted by `(1 + y/k)^-i`.
//!
//! ## Example
//!
//! ```rust
//! use bondcalc_bonds::prelude::*;
//! use bondcalc_core::types::{Date, Frequency};
//! use rust_decimal_macros::dec;
//!
//! let issue = Date::from_ymd(2021, 1, 1).unwrap();
//! let bond = FixedRateBond::builder()
//!     .issue_date(issue)
//!     .term_years(2)
//!     .coupon_rate(dec!(0.08))
//!     .frequency(Frequency::SemiAnnual)
//!     .build()
//!     .unwrap();
//!
//! let calculator = BondCalculator::new(issue);
//! let price = calculator.clean_price(&bond, 0.06).unwrap();
//! assert!((price - 103.717).abs() < 0.01);
//!
//! let solved = calculator.solve_yield(&bond, price).unwrap();
//! assert!((solved.yield_value - 0.06).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::return_self_not_must_use)]

pub mod cashflows;
pub mod config;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod risk;
pub mod traits;

/// Prelude module for convenient imports.
pub mod prelude {
    // Cash flows
    pub use crate::cashflows::{CouponPayment, CouponSchedule};

    // Configuration
    pub use crate::config::EngineConfig;

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Instruments
    pub use crate::instruments::{FixedRateBond, FixedRateBondBuilder};

    // Pricing
    pub use crate::pricing::{BondAnalytics, BondCalculator, DiscountedCashFlow, YieldResult};

    // Risk
    pub use crate::risk::price_change_estimate;

    // Traits
    pub use crate::traits::Instrument;
}

pub use config::EngineConfig;
pub use error::{BondError, BondResult};
pub use instruments::{FixedRateBond, FixedRateBondBuilder};
pub use pricing::{BondAnalytics, BondCalculator, YieldResult};
pub use traits::Instrument;
