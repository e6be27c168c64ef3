//! Bond instruments.
//!
//! - [`FixedRateBond`]: regular fixed coupon bond built through [`FixedRateBondBuilder`]

mod fixed_rate;

pub use fixed_rate::{FixedRateBond, FixedRateBondBuilder};
