//! Coupon dates and remaining coupon schedules.

mod schedule;

pub use schedule::{payment_dates, CouponPayment, CouponSchedule};
