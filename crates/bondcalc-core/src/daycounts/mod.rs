//! Day count conventions for fixed income calculations.
//!
//! A day count convention maps a `(start, end)` date pair to a year
//! fraction. Each convention here is a stateless unit struct implementing
//! [`DayCount`]; [`DayCountConvention`] selects one at runtime.
//!
//! # Supported Conventions
//!
//! - [`Thirty360`]: 30/360, start-anchored variant (see the type docs)
//! - [`Act360`]: Actual/360
//! - [`ActAct`]: Actual/Actual over the start year's length
//!
//! # Usage
//!
//! ```rust
//! use bondcalc_core::daycounts::{Act360, DayCount, DayCountConvention};
//! use bondcalc_core::types::Date;
//!
//! let start = Date::from_ymd(2021, 1, 1).unwrap();
//! let end = Date::from_ymd(2021, 4, 1).unwrap();
//!
//! assert_eq!(Act360.day_count(start, end), 90);
//!
//! let convention: DayCountConvention = "ACT/360".parse().unwrap();
//! assert_eq!(convention.year_fraction(start, end), Act360.year_fraction(start, end));
//! ```

mod act360;
mod actact;
mod thirty360;

pub use act360::Act360;
pub use actact::ActAct;
pub use thirty360::Thirty360;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) and pure.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Zero when `start == end`; negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> Decimal;

    /// Calculates the day count between two dates according to the convention.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of all supported day count conventions.
///
/// The set is closed: every consumption site matches exhaustively, and the
/// only way to reach [`CoreError::UnsupportedConvention`] is parsing a tag
/// from text (including serde input).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// 30/360
    #[default]
    Thirty360,

    /// Actual/360
    Act360,

    /// Actual/Actual, start-year denominator
    ActAct,
}

impl DayCountConvention {
    /// Returns the implementation backing this convention.
    #[must_use]
    pub fn to_day_count(&self) -> &'static dyn DayCount {
        match self {
            DayCountConvention::Thirty360 => &Thirty360,
            DayCountConvention::Act360 => &Act360,
            DayCountConvention::ActAct => &ActAct,
        }
    }

    /// Returns the display name of the convention.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.to_day_count().name()
    }

    /// Calculates the year fraction between two dates under this convention.
    #[must_use]
    pub fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        self.to_day_count().year_fraction(start, end)
    }

    /// Calculates the day count between two dates under this convention.
    #[must_use]
    pub fn day_count(&self, start: Date, end: Date) -> i64 {
        self.to_day_count().day_count(start, end)
    }

    /// Returns all available day count conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[
            DayCountConvention::Thirty360,
            DayCountConvention::Act360,
            DayCountConvention::ActAct,
        ]
    }
}

impl fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DayCountConvention {
    type Err = CoreError;

    /// Parses a day count convention tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "30/360" | "30360" | "THIRTY360" | "BOND" => Ok(DayCountConvention::Thirty360),
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/ACT" | "ACTUAL/ACTUAL" | "ACTACT" => Ok(DayCountConvention::ActAct),
            _ => Err(CoreError::unsupported_convention(s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(convention: DayCountConvention) -> Self {
        convention.name().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_same_day_is_zero_for_all() {
        let d = Date::from_ymd(2021, 5, 31).unwrap();
        for convention in DayCountConvention::all() {
            assert_eq!(convention.year_fraction(d, d), Decimal::ZERO, "{convention}");
        }
    }

    #[test]
    fn test_enum_dispatch() {
        let start = Date::from_ymd(2021, 1, 1).unwrap();
        let end = Date::from_ymd(2021, 7, 1).unwrap();

        assert_eq!(DayCountConvention::Thirty360.year_fraction(start, end), dec!(0.5));
        assert_eq!(
            DayCountConvention::Act360.year_fraction(start, end),
            dec!(181) / dec!(360)
        );
        assert_eq!(
            DayCountConvention::ActAct.year_fraction(start, end),
            dec!(181) / dec!(365)
        );
    }

    #[test]
    fn test_convention_names() {
        assert_eq!(DayCountConvention::Thirty360.name(), "30/360");
        assert_eq!(DayCountConvention::Act360.name(), "ACT/360");
        assert_eq!(DayCountConvention::ActAct.to_string(), "ACT/ACT");
    }

    #[test]
    fn test_from_str_aliases() {
        assert_eq!(
            "30/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            "bond".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Thirty360
        );
        assert_eq!(
            "Actual/360".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act360
        );
        assert_eq!(
            " act/act ".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::ActAct
        );
    }

    #[test]
    fn test_from_str_unsupported() {
        let result = "ACT/365".parse::<DayCountConvention>();
        assert_eq!(result, Err(CoreError::unsupported_convention("ACT/365")));
    }

    #[test]
    fn test_from_str_roundtrip() {
        for convention in DayCountConvention::all() {
            let parsed: DayCountConvention = convention.name().parse().unwrap();
            assert_eq!(*convention, parsed);
        }
    }

    #[test]
    fn test_serde_boundary() {
        let json = serde_json::to_string(&DayCountConvention::ActAct).unwrap();
        assert_eq!(json, "\"ACT/ACT\"");

        let err = serde_json::from_str::<DayCountConvention>("\"30E/360\"").unwrap_err();
        assert!(err.to_string().contains("Unsupported day count convention"));
    }
}
