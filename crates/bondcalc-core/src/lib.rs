//! # bondcalc Core
//!
//! Core types and day count conventions for the bondcalc valuation engine.
//!
//! This crate provides the leaf building blocks used by the rest of the workspace:
//!
//! - **Types**: [`Date`] and [`Frequency`]
//! - **Day Count Conventions**: 30/360, ACT/360 and ACT/ACT year fractions
//! - **Errors**: [`CoreError`], including the parsing-boundary failures for
//!   unknown convention and frequency tags
//!
//! ## Example
//!
//! ```rust
//! use bondcalc_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let start = Date::from_ymd(2021, 1, 1).unwrap();
//! let end = Date::from_ymd(2021, 7, 1).unwrap();
//!
//! let yf = DayCountConvention::Thirty360.year_fraction(start, end);
//! assert_eq!(yf, dec!(0.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{Date, Frequency};
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{Date, Frequency};
