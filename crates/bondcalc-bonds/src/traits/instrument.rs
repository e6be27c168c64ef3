//! Core Instrument trait definition.

use bondcalc_core::daycounts::DayCountConvention;
use bondcalc_core::types::{Date, Frequency};
use rust_decimal::Decimal;

use crate::cashflows::CouponSchedule;
use crate::error::{BondError, BondResult};

/// Immutable description of a coupon-paying bond.
///
/// Implementors supply the terms and the full list of payment dates; the
/// remaining schedule and the previous payment date are derived from them.
///
/// # Example
///
/// ```rust
/// use bondcalc_bonds::prelude::*;
/// use bondcalc_core::types::Date;
/// use rust_decimal_macros::dec;
///
/// fn describe(bond: &dyn Instrument) -> String {
///     format!("{} {}% {}", bond.day_count(), bond.coupon_rate() * dec!(100), bond.maturity())
/// }
///
/// let bond = FixedRateBond::builder()
///     .issue_date(Date::from_ymd(2021, 1, 1).unwrap())
///     .term_years(5)
///     .coupon_rate(dec!(0.05))
///     .build()
///     .unwrap();
/// assert_eq!(describe(&bond), "30/360 5.00% 2026-01-01");
/// ```
pub trait Instrument: Send + Sync {
    /// Returns the issue date, which starts the first coupon period.
    fn issue_date(&self) -> Date;

    /// Returns the maturity date.
    fn maturity(&self) -> Date;

    /// Returns the day count convention.
    fn day_count(&self) -> DayCountConvention;

    /// Returns the payment frequency.
    fn frequency(&self) -> Frequency;

    /// Returns the annual coupon rate as a decimal (0.05 = 5%).
    fn coupon_rate(&self) -> Decimal;

    /// Returns the principal (face value).
    fn principal(&self) -> Decimal;

    /// Returns every coupon date, chronological, ending at maturity.
    fn payment_dates(&self) -> &[Date];

    /// Returns an identifier for display, if any.
    fn identifier(&self) -> Option<&str> {
        None
    }

    /// Returns the coupon paid each period.
    fn coupon_per_period(&self) -> Decimal {
        self.coupon_rate() * self.principal() / Decimal::from(self.frequency().periods_per_year())
    }

    /// Returns the latest payment date strictly before `settlement`.
    ///
    /// The issue date counts as a payment date for this purpose, so any
    /// settlement inside the first period accrues from issue.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoPriorPaymentDate` if `settlement` is on or
    /// before the issue date.
    fn previous_payment_date(&self, settlement: Date) -> BondResult<Date> {
        let issue = self.issue_date();
        if settlement <= issue {
            return Err(BondError::NoPriorPaymentDate { settlement, issue });
        }

        Ok(self
            .payment_dates()
            .iter()
            .copied()
            .take_while(|date| *date < settlement)
            .last()
            .unwrap_or(issue))
    }

    /// Returns the coupons remaining after `as_of`.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoRemainingCashFlows` if the instrument has fully
    /// paid out by `as_of`.
    fn schedule(&self, as_of: Date) -> BondResult<CouponSchedule> {
        CouponSchedule::for_instrument(self, as_of)
    }
}
