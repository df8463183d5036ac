//! Input validation: defaults for missing fields and clamping into the
//! supported domain.
//!
//! | field | min | max | default |
//! |---|---|---|---|
//! | `hourly_rate` | 50 | 5000 | 500 |
//! | `hours_per_week` | 0 | 60 | 40 |
//! | `vacation_weeks` | 0 | 12 | 2 |
//! | `tax_rate` | 0 | 50 | 25 |
//!
//! This is the only place bounds are enforced. The calculator and the
//! solvers accept whatever they are given.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::clamp_value;
use crate::{IncomeConfig, PartialIncomeConfig};

/// Domain range and fallback for a single input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldBounds {
    /// Substitutes the default for a missing or non-finite value, then clamps.
    pub fn apply(
        &self,
        value: Option<f64>,
    ) -> f64 {
        let value = value.filter(|v| v.is_finite()).unwrap_or(self.default);
        clamp_value(value, self.min, self.max)
    }
}

pub const HOURLY_RATE_BOUNDS: FieldBounds = FieldBounds {
    min: 50.0,
    max: 5000.0,
    default: 500.0,
};

pub const HOURS_PER_WEEK_BOUNDS: FieldBounds = FieldBounds {
    min: 0.0,
    max: 60.0,
    default: 40.0,
};

pub const VACATION_WEEKS_BOUNDS: FieldBounds = FieldBounds {
    min: 0.0,
    max: 12.0,
    default: 2.0,
};

pub const TAX_RATE_BOUNDS: FieldBounds = FieldBounds {
    min: 0.0,
    max: 50.0,
    default: 25.0,
};

/// The config produced from an empty partial config.
pub const DEFAULT_CONFIG: IncomeConfig = IncomeConfig {
    hourly_rate: HOURLY_RATE_BOUNDS.default,
    hours_per_week: HOURS_PER_WEEK_BOUNDS.default,
    vacation_weeks: VACATION_WEEKS_BOUNDS.default,
    tax_rate: TAX_RATE_BOUNDS.default,
};

impl Default for IncomeConfig {
    fn default() -> Self {
        DEFAULT_CONFIG
    }
}

/// Builds a complete, in-range [`IncomeConfig`] from a partial one.
///
/// Missing and non-finite fields take their default; every field is then
/// clamped into its range. Never fails.
///
/// # Example
///
/// ```
/// use planner_core::{IncomeConfig, PartialIncomeConfig};
/// use planner_core::calculations::validate_and_clamp_config;
///
/// let config = validate_and_clamp_config(&PartialIncomeConfig {
///     hourly_rate: Some(10.0),
///     ..Default::default()
/// });
///
/// assert_eq!(
///     config,
///     IncomeConfig { hourly_rate: 50.0, hours_per_week: 40.0, vacation_weeks: 2.0, tax_rate: 25.0 }
/// );
/// ```
pub fn validate_and_clamp_config(partial: &PartialIncomeConfig) -> IncomeConfig {
    let config = IncomeConfig {
        hourly_rate: HOURLY_RATE_BOUNDS.apply(partial.hourly_rate),
        hours_per_week: HOURS_PER_WEEK_BOUNDS.apply(partial.hours_per_week),
        vacation_weeks: VACATION_WEEKS_BOUNDS.apply(partial.vacation_weeks),
        tax_rate: TAX_RATE_BOUNDS.apply(partial.tax_rate),
    };
    debug!(?partial, ?config, "validated income config");
    config
}
