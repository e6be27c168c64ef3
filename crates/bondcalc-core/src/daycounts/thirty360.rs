//! 30/360 day count convention.

use rust_decimal::Decimal;

use super::DayCount;
use crate::types::Date;

/// 30/360 day count convention.
///
/// Every month counts as 30 days and the year as 360. This is the
/// start-anchored variant used by the valuation engine, not ISDA or
/// US bond basis 30/360:
///
/// $$\text{Days} = 360 (Y_2 - Y_1) + 30 (M_2 - M_1 - 1) + \max(0, 30 - D_1) + \min(30, D_2)$$
///
/// The start month contributes its remaining days up to day 30 and the end
/// month contributes its elapsed days capped at 30, hence the `- 1` on the
/// month difference. There are no February end-of-month adjustments, so
/// e.g. Feb 28 to Mar 31 counts 32 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Thirty360;

impl DayCount for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360"
    }

    fn year_fraction(&self, start: Date, end: Date) -> Decimal {
        let days = self.day_count(start, end);
        Decimal::from(days) / Decimal::from(360)
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        let y1 = start.year() as i64;
        let y2 = end.year() as i64;
        let m1 = start.month() as i64;
        let m2 = end.month() as i64;
        let d1 = start.day() as i64;
        let d2 = end.day() as i64;

        360 * (y2 - y1) + 30 * (m2 - m1 - 1) + (30 - d1).max(0) + d2.min(30)
    }
}
