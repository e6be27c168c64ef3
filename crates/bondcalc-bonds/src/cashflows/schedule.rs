//! Coupon schedule generation.

use bondcalc_core::types::{Date, Frequency};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BondError, BondResult};
use crate::traits::Instrument;

/// Generates the unadjusted coupon dates of a regular bond.
///
/// The i-th date is `issue + i * months_per_period`, each computed from the
/// issue date so that month-end clamping never drifts. The last date must
/// land exactly on `maturity`.
///
/// # Errors
///
/// Returns `BondError::InvalidSchedule` if maturity is not a whole number of
/// periods after issue, and `BondError::InvalidSpec` if maturity is not
/// after issue.
pub fn payment_dates(issue: Date, maturity: Date, frequency: Frequency) -> BondResult<Vec<Date>> {
    if maturity <= issue {
        return Err(BondError::invalid_spec(format!(
            "maturity {maturity} must be after issue {issue}"
        )));
    }

    let step = frequency.months_per_period() as i32;
    let months = (maturity.year() - issue.year()) * 12 + maturity.month() as i32
        - issue.month() as i32;

    if months <= 0 || months % step != 0 {
        return Err(BondError::invalid_schedule(format!(
            "{issue} to {maturity} is not a whole number of {frequency} periods"
        )));
    }

    let periods = months / step;
    let dates = (1..=periods)
        .map(|i| issue.add_months(i * step))
        .collect::<Result<Vec<_>, _>>()?;

    match dates.last() {
        Some(last) if *last == maturity => Ok(dates),
        Some(last) => Err(BondError::invalid_schedule(format!(
            "last coupon date {last} does not match maturity {maturity}"
        ))),
        None => Err(BondError::invalid_schedule("no coupon dates generated")),
    }
}

/// A single remaining coupon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouponPayment {
    /// Payment date.
    pub date: Date,
    /// Coupon amount, principal excluded.
    pub amount: Decimal,
    /// Year fraction from the pricing date to the payment date.
    pub time_in_years: Decimal,
}

/// The remaining coupons of an instrument as of a pricing date.
///
/// Never empty, and `time_in_years` is strictly increasing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CouponSchedule {
    payments: Vec<CouponPayment>,
}

impl CouponSchedule {
    /// Creates a schedule from chronological payments.
    ///
    /// # Errors
    ///
    /// Returns `BondError::InvalidSchedule` if `payments` is empty or the
    /// payment times are not strictly increasing.
    pub fn new(payments: Vec<CouponPayment>) -> BondResult<Self> {
        if payments.is_empty() {
            return Err(BondError::invalid_schedule("schedule has no payments"));
        }
        if let Some(pair) = payments
            .windows(2)
            .find(|w| w[1].time_in_years <= w[0].time_in_years)
        {
            return Err(BondError::invalid_schedule(format!(
                "payment times must be strictly increasing: {} ({}) then {} ({})",
                pair[0].date, pair[0].time_in_years, pair[1].date, pair[1].time_in_years
            )));
        }
        Ok(Self { payments })
    }

    /// Builds the remaining coupons of `instrument` after `as_of`.
    ///
    /// Each coupon pays `coupon_rate * principal / k`; times are measured
    /// from `as_of` under the instrument's day count.
    ///
    /// # Errors
    ///
    /// Returns `BondError::NoRemainingCashFlows` if no payment date falls
    /// after `as_of`.
    pub fn for_instrument<I>(instrument: &I, as_of: Date) -> BondResult<Self>
    where
        I: Instrument + ?Sized,
    {
        let day_count = instrument.day_count();
        let amount = instrument.coupon_rate() * instrument.principal()
            / Decimal::from(instrument.frequency().periods_per_year());

        let payments: Vec<CouponPayment> = instrument
            .payment_dates()
            .iter()
            .filter(|date| **date > as_of)
            .map(|&date| CouponPayment {
                date,
                amount,
                time_in_years: day_count.year_fraction(as_of, date),
            })
            .collect();

        if payments.is_empty() {
            return Err(BondError::NoRemainingCashFlows {
                as_of,
                maturity: instrument.maturity(),
            });
        }

        debug!(
            %as_of,
            remaining = payments.len(),
            day_count = %day_count,
            "built coupon schedule"
        );

        Self::new(payments)
    }

    /// Returns an iterator over the payments.
    pub fn iter(&self) -> impl Iterator<Item = &CouponPayment> {
        self.payments.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::FixedRateBond;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_semiannual_dates() {
        let dates = payment_dates(date(2021, 1, 1), date(2023, 1, 1), Frequency::SemiAnnual).unwrap();

        assert_eq!(
            dates,
            vec![
                date(2021, 7, 1),
                date(2022, 1, 1),
                date(2022, 7, 1),
                date(2023, 1, 1)
            ]
        );
    }

    #[test]
    fn test_month_end_does_not_drift() {
        let dates = payment_dates(date(2021, 8, 31), date(2022, 8, 31), Frequency::Quarterly).unwrap();

        assert_eq!(dates[0], date(2021, 11, 30));
        assert_eq!(dates[1], date(2022, 2, 28));
        assert_eq!(dates[2], date(2022, 5, 31));
        assert_eq!(dates[3], date(2022, 8, 31));
    }

    #[test]
    fn test_off_cycle_maturity_rejected() {
        let result = payment_dates(date(2021, 1, 1), date(2022, 4, 1), Frequency::SemiAnnual);
        assert!(matches!(result, Err(BondError::InvalidSchedule { .. })));

        let result = payment_dates(date(2021, 1, 1), date(2022, 1, 15), Frequency::SemiAnnual);
        assert!(matches!(result, Err(BondError::InvalidSchedule { .. })));
    }

    #[test]
    fn test_maturity_before_issue_rejected() {
        let result = payment_dates(date(2021, 1, 1), date(2021, 1, 1), Frequency::Annual);
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));
    }

    #[test]
    fn test_new_rejects_empty_and_unordered() {
        assert!(matches!(
            CouponSchedule::new(vec![]),
            Err(BondError::InvalidSchedule { .. })
        ));

        let p1 = CouponPayment {
            date: date(2021, 7, 1),
            amount: dec!(4),
            time_in_years: dec!(0.5),
        };
        let p2 = CouponPayment {
            date: date(2022, 1, 1),
            amount: dec!(4),
            time_in_years: dec!(0.5),
        };
        assert!(matches!(
            CouponSchedule::new(vec![p1, p2]),
            Err(BondError::InvalidSchedule { .. })
        ));
    }

    #[test]
    fn test_for_instrument_keeps_remaining_coupons() {
        let bond = FixedRateBond::builder()
            .issue_date(date(2021, 1, 1))
            .term_years(2)
            .coupon_rate(dec!(0.08))
            .frequency(Frequency::SemiAnnual)
            .build()
            .unwrap();

        let schedule = CouponSchedule::for_instrument(&bond, date(2021, 7, 1)).unwrap();
        let dates: Vec<Date> = schedule.iter().map(|p| p.date).collect();
        assert_eq!(dates, vec![date(2022, 1, 1), date(2022, 7, 1), date(2023, 1, 1)]);

        let times: Vec<Decimal> = schedule.iter().map(|p| p.time_in_years).collect();
        assert_eq!(times, vec![dec!(0.5), dec!(1), dec!(1.5)]);
        assert!(schedule.iter().all(|p| p.amount == dec!(4)));

        assert!(matches!(
            CouponSchedule::for_instrument(&bond, date(2023, 1, 1)),
            Err(BondError::NoRemainingCashFlows { .. })
        ));
    }
}
