//! End-to-end valuation behaviour across instruments, yields and conventions.

use approx::assert_relative_eq;
use bondcalc_bonds::cashflows::payment_dates;
use bondcalc_bonds::prelude::*;
use bondcalc_core::daycounts::DayCountConvention;
use bondcalc_core::types::{Date, Frequency};
use bondcalc_math::MathError;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn issue() -> Date {
    date(2021, 1, 1)
}

fn bond(term: u32, coupon: Decimal, frequency: Frequency, day_count: DayCountConvention) -> FixedRateBond {
    FixedRateBond::builder()
        .issue_date(issue())
        .term_years(term)
        .coupon_rate(coupon)
        .frequency(frequency)
        .day_count(day_count)
        .build()
        .unwrap()
}

fn semiannual(term: u32, coupon: Decimal) -> FixedRateBond {
    bond(term, coupon, Frequency::SemiAnnual, DayCountConvention::Thirty360)
}

/// An instrument whose every flow is zero.
struct ZeroFlows {
    dates: Vec<Date>,
}

impl ZeroFlows {
    fn new() -> Self {
        Self {
            dates: payment_dates(issue(), date(2023, 1, 1), Frequency::SemiAnnual).unwrap(),
        }
    }
}

impl Instrument for ZeroFlows {
    fn issue_date(&self) -> Date {
        issue()
    }

    fn maturity(&self) -> Date {
        date(2023, 1, 1)
    }

    fn day_count(&self) -> DayCountConvention {
        DayCountConvention::Thirty360
    }

    fn frequency(&self) -> Frequency {
        Frequency::SemiAnnual
    }

    fn coupon_rate(&self) -> Decimal {
        Decimal::ZERO
    }

    fn principal(&self) -> Decimal {
        Decimal::ZERO
    }

    fn payment_dates(&self) -> &[Date] {
        &self.dates
    }
}

#[test]
fn deep_discount_zero_coupon_round_trips() {
    let calc = BondCalculator::new(date(2021, 3, 15));
    for frequency in Frequency::all() {
        let zero = bond(30, Decimal::ZERO, *frequency, DayCountConvention::Thirty360);
        let price = calc.clean_price(&zero, 0.5).unwrap();
        let solved = calc.solve_yield(&zero, price).unwrap();

        assert!(
            (solved.yield_value - 0.5).abs() <= calc.config().tolerance,
            "{frequency}: price {price}, solved {}",
            solved.yield_value
        );
    }
}

#[test]
fn two_year_eight_percent_at_six() {
    let calc = BondCalculator::new(issue());
    let price = calc.clean_price(&semiannual(2, dec!(0.08)), 0.06).unwrap();
    assert!((price - 103.717).abs() < 0.01, "price {price}");
}

#[test]
fn five_year_five_percent_yield_from_price() {
    let calc = BondCalculator::new(issue());
    let result = calc.solve_yield(&semiannual(5, dec!(0.05)), 103.72).unwrap();
    assert!((result.yield_value - 0.04168).abs() < 0.01);
    assert!(result.yield_value > 0.04 && result.yield_value < 0.043);
}

#[test]
fn longer_maturity_has_longer_duration() {
    let calc = BondCalculator::new(issue());
    let durations: Vec<f64> = [2, 5, 10, 30]
        .iter()
        .map(|&term| calc.macaulay_duration(&semiannual(term, dec!(0.05)), 0.05).unwrap())
        .collect();

    for pair in durations.windows(2) {
        assert!(pair[0] < pair[1], "durations not increasing: {durations:?}");
    }
}

#[test]
fn duration_is_bounded_by_maturity() {
    let calc = BondCalculator::new(issue());
    let mac = calc.macaulay_duration(&semiannual(5, dec!(0.05)), 0.05).unwrap();
    assert!(mac > 0.5 && mac < 5.0);

    let modified = calc.modified_duration(&semiannual(5, dec!(0.05)), 0.05).unwrap();
    assert_relative_eq!(modified, mac / 1.025, epsilon = 1e-12);
}

#[test]
fn no_bracket_when_bounds_miss_root() {
    let calc = BondCalculator::new(issue())
        .with_config(EngineConfig::default().with_yield_bounds(0.20, 0.50));
    let result = calc.solve_yield(&semiannual(5, dec!(0.05)), 103.72);
    assert!(matches!(
        result,
        Err(BondError::Math(MathError::NoBracket { .. }))
    ));
}

#[test]
fn zero_flows_are_degenerate() {
    let calc = BondCalculator::new(issue());
    let instrument = ZeroFlows::new();

    assert_eq!(calc.clean_price(&instrument, 0.05).unwrap(), 0.0);
    assert!(matches!(
        calc.macaulay_duration(&instrument, 0.05),
        Err(BondError::DegenerateCashFlow { .. })
    ));
    assert!(matches!(
        calc.convexity(&instrument, 0.05),
        Err(BondError::DegenerateCashFlow { .. })
    ));
    assert!(matches!(
        calc.analytics(&instrument, 0.05),
        Err(BondError::DegenerateCashFlow { .. })
    ));
}

#[test]
fn trait_objects_price_like_concrete_types() {
    let calc = BondCalculator::new(issue());
    let concrete = semiannual(5, dec!(0.05));
    let dynamic: &dyn Instrument = &concrete;

    assert_eq!(
        calc.clean_price(dynamic, 0.05).unwrap(),
        calc.clean_price(&concrete, 0.05).unwrap()
    );
}

#[test]
fn actact_times_follow_start_year() {
    // Pricing date in a leap year: times use a 366-day denominator
    let bond = FixedRateBond::builder()
        .issue_date(date(2020, 1, 1))
        .term_years(2)
        .coupon_rate(dec!(0.04))
        .frequency(Frequency::Annual)
        .day_count(DayCountConvention::ActAct)
        .build()
        .unwrap();
    let calc = BondCalculator::new(date(2020, 1, 1));
    let table = calc.cash_flow_table(&bond, 0.04).unwrap();

    assert_relative_eq!(table[0].time, 366.0 / 366.0);
    assert_relative_eq!(table[1].time, 731.0 / 366.0);
}

#[test]
fn price_change_estimate_tracks_repricing() {
    let calc = BondCalculator::new(issue());
    let bond = semiannual(10, dec!(0.05));
    let analytics = calc.analytics(&bond, 0.05).unwrap();

    // 1bp moves the price by about 0.078; duration alone is off by ~4e-5
    let actual = calc.clean_price(&bond, 0.0501).unwrap() - analytics.clean_price;
    assert!((analytics.price_change(0.0001) - actual).abs() < 1e-6);

    for shift in [0.01, -0.01] {
        let actual = calc.clean_price(&bond, 0.05 + shift).unwrap() - analytics.clean_price;
        let estimate = analytics.price_change(shift);
        let duration_only = -analytics.modified_duration * analytics.clean_price * shift;

        assert!((estimate - actual).abs() < 0.02, "shift {shift}: {estimate} vs {actual}");
        assert!((duration_only - actual).abs() > 0.3);
    }
}

fn arb_frequency() -> impl Strategy<Value = Frequency> {
    prop::sample::select(Frequency::all().to_vec())
}

fn arb_day_count() -> impl Strategy<Value = DayCountConvention> {
    prop::sample::select(DayCountConvention::all().to_vec())
}

proptest! {
    #[test]
    fn solve_yield_inverts_clean_price(
        term in 1u32..=30,
        coupon_bp in prop_oneof![Just(0i64), 100i64..=1200],
        frequency in arb_frequency(),
        day_count in arb_day_count(),
        y in 0.001f64..0.5,
        seasoned in proptest::bool::ANY,
    ) {
        let bond = bond(term, Decimal::new(coupon_bp, 4), frequency, day_count);
        let pricing_date = if seasoned { date(2021, 3, 15) } else { issue() };
        let calc = BondCalculator::new(pricing_date);

        let price = calc.clean_price(&bond, y).unwrap();
        let solved = calc.solve_yield(&bond, price).unwrap();

        prop_assert!((solved.yield_value - y).abs() <= calc.config().tolerance,
            "y = {}, solved = {}, price = {}", y, solved.yield_value, price);
    }

    #[test]
    fn clean_price_decreases_in_yield(
        term in 1u32..=30,
        coupon_bp in 100i64..=1200,
        frequency in arb_frequency(),
        y in 0.0f64..1.0,
        dy in 0.001f64..0.5,
    ) {
        let bond = bond(term, Decimal::new(coupon_bp, 4), frequency, DayCountConvention::Thirty360);
        let calc = BondCalculator::new(issue());

        let lower = calc.clean_price(&bond, y).unwrap();
        let higher = calc.clean_price(&bond, y + dy).unwrap();

        prop_assert!(higher < lower);
    }
}
