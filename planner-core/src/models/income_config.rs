use serde::{Deserialize, Serialize};

/// Inputs for a single income calculation.
///
/// `tax_rate` is a flat percentage (25.0 means 25%). Values are not bounded
/// here; see [`crate::calculations::validate_and_clamp_config`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncomeConfig {
    pub hourly_rate: f64,
    pub hours_per_week: f64,
    pub vacation_weeks: f64,
    pub tax_rate: f64,
}

impl IncomeConfig {
    pub fn is_finite(&self) -> bool {
        self.hourly_rate.is_finite()
            && self.hours_per_week.is_finite()
            && self.vacation_weeks.is_finite()
            && self.tax_rate.is_finite()
    }
}

/// A config with any subset of fields supplied, as produced by a form or a
/// single-field edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialIncomeConfig {
    pub hourly_rate: Option<f64>,
    pub hours_per_week: Option<f64>,
    pub vacation_weeks: Option<f64>,
    pub tax_rate: Option<f64>,
}

impl From<IncomeConfig> for PartialIncomeConfig {
    fn from(config: IncomeConfig) -> Self {
        Self {
            hourly_rate: Some(config.hourly_rate),
            hours_per_week: Some(config.hours_per_week),
            vacation_weeks: Some(config.vacation_weeks),
            tax_rate: Some(config.tax_rate),
        }
    }
}
