//! Common helpers shared by the income calculator, the inverse solvers and
//! the seasonal projection.
//!
//! This module holds the fixed calendar divisors, the billable-week floor,
//! the tax multiplier and the rounding rule applied to projected months.

/// Weeks in a calendar year; also the weekly amortization divisor.
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Days in a calendar year, used to amortize annual income per day.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months in a calendar year, used to amortize annual income per month.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Nobody can declare fewer than one working week in a year.
pub const MIN_BILLABLE_WEEKS: f64 = 1.0;

/// Rounds a value to the nearest integer, with ties going toward positive
/// infinity.
///
/// This differs from [`f64::round`] only for negative ties: `-2.5` becomes
/// `-2.0` here rather than `-3.0`. Non-finite values are returned unchanged.
///
/// # Examples
///
/// ```
/// use planner_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(62_499.5), 62_500.0);
/// assert_eq!(round_half_up(62_499.49), 62_499.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// ```
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Clamps `value` into `[min, max]`.
///
/// NaN is passed through untouched; callers that need a guaranteed number
/// substitute a default first (see [`super::validate_and_clamp_config`]).
///
/// # Examples
///
/// ```
/// use planner_core::calculations::common::clamp_value;
///
/// assert_eq!(clamp_value(10.0, 50.0, 5000.0), 50.0);
/// assert_eq!(clamp_value(7500.0, 50.0, 5000.0), 5000.0);
/// assert_eq!(clamp_value(750.0, 50.0, 5000.0), 750.0);
/// ```
pub fn clamp_value(
    value: f64,
    min: f64,
    max: f64,
) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Weeks available for paid work: `52 - vacation_weeks`, never below one.
pub fn billable_weeks(vacation_weeks: f64) -> f64 {
    let weeks = WEEKS_PER_YEAR - vacation_weeks;
    if weeks < MIN_BILLABLE_WEEKS { MIN_BILLABLE_WEEKS } else { weeks }
}

/// Share of gross income kept after a flat tax of `tax_rate` percent.
pub fn tax_multiplier(tax_rate: f64) -> f64 {
    1.0 - tax_rate / 100.0
}
