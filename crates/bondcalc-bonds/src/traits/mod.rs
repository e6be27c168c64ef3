//! Instrument trait.
//!
//! - [`Instrument`]: what the valuation engine needs to know about a bond

mod instrument;

pub use instrument::Instrument;
