//! Actual/Actual day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// Actual/Actual day count convention, anchored to the start year.
///
/// The numerator is the actual number of days between the dates. The
/// denominator is the number of days in the *start date's* calendar year
/// (365 or 366), even when the interval runs into a year of different
/// length. This differs from ACT/ACT ISDA, which splits the interval at
/// year boundaries.
///
/// # Formula
///
/// $$\text{Year Fraction} = \frac{\text{Actual Days}}{\text{Days in } Y_1}$$
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActAct;

impl DayCount for ActAct {
    fn name(&self) -> &'static str {
        "ACT/ACT"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = start.days_between(&end);
        Decimal::from(days) / Decimal::from(start.days_in_year())
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_full_non_leap_year() {
        assert_eq!(ActAct.year_fraction(date(2021, 1, 1), date(2022, 1, 1)), dec!(1));
    }

    #[test]
    fn test_full_leap_year() {
        assert_eq!(ActAct.year_fraction(date(2024, 1, 1), date(2025, 1, 1)), dec!(1));
    }

    #[test]
    fn test_denominator_follows_start_year() {
        // Interval crosses Feb 29, 2024 but is measured against 2023's 365 days
        let yf = ActAct.year_fraction(date(2023, 7, 1), date(2024, 7, 1));
        assert_eq!(ActAct.day_count(date(2023, 7, 1), date(2024, 7, 1)), 366);
        assert_eq!(yf, dec!(366) / dec!(365));
        assert!(yf > Decimal::ONE);

        // Starting in the leap year, 365 actual days are measured against 366
        let yf = ActAct.year_fraction(date(2024, 7, 1), date(2025, 7, 1));
        assert_eq!(yf, dec!(365) / dec!(366));
        assert!(yf < Decimal::ONE);
    }

    #[test]
    fn test_same_day() {
        let d = date(2024, 2, 29);
        assert_eq!(ActAct.year_fraction(d, d), Decimal::ZERO);
    }
}
