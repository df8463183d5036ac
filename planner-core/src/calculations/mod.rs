//! Income calculations for the planner.
//!
//! This module provides the pure calculation engine: the income calculator,
//! the inverse solvers, input validation, the seasonal projection and
//! forecast insights. Nothing here performs I/O or holds state.

pub mod common;
mod error;
mod income;
mod insights;
mod projection;
mod solvers;
mod validation;

pub use error::CalculationError;
pub use income::{calculate_income, rate_increase_what_if};
pub use insights::{CAPACITY_WARNING_HOURS, ForecastInsights, RATE_INCREASE_FRACTION};
pub use projection::{generate_monthly_projection, generate_seasonal_projection, seasonal_projection};
pub use solvers::{calculate_required_hours, calculate_required_rate};
pub use validation::{
    DEFAULT_CONFIG, FieldBounds, HOURLY_RATE_BOUNDS, HOURS_PER_WEEK_BOUNDS, TAX_RATE_BOUNDS,
    VACATION_WEEKS_BOUNDS, validate_and_clamp_config,
};
