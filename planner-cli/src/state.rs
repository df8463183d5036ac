//! Planner state for the command line front end.
//!
//! This holds the raw inputs the user has entered: the snapshot config, an
//! optional income target, the display currency, the three forecast scenarios
//! and the last known exchange rate. It is loaded from and saved to a TOML
//! file between runs. The calculation engine never sees this struct, only the
//! configs derived from it.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use planner_core::calculations::{common::round_half_up, validate_and_clamp_config};
use planner_core::fx::{FxQuote, convert_amount};
use planner_core::{Currency, IncomeConfig, PartialIncomeConfig, ScenarioKind, ScenarioSet};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Fields to change on one scenario; `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScenarioUpdate {
    pub hourly_rate: Option<f64>,
    pub hours_per_week: Option<f64>,
    pub vacation_weeks: Option<f64>,
}

/// Everything the planner remembers between runs.
///
/// Every setter clamps its input, so a state built through setters always
/// holds in-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerState {
    pub hourly_rate: f64,
    pub hours_per_week: f64,
    pub vacation_weeks: f64,
    pub tax_rate: f64,
    pub target_annual_net: Option<f64>,
    pub currency: Currency,
    /// Last known MXN → USD rate.
    pub mxn_to_usd_rate: Option<f64>,
    pub rate_updated_at: Option<DateTime<Utc>>,
    pub scenarios: ScenarioSet,
}

impl Default for PlannerState {
    fn default() -> Self {
        let config = IncomeConfig::default();
        Self {
            hourly_rate: config.hourly_rate,
            hours_per_week: config.hours_per_week,
            vacation_weeks: config.vacation_weeks,
            tax_rate: config.tax_rate,
            target_annual_net: None,
            currency: Currency::default(),
            mxn_to_usd_rate: None,
            rate_updated_at: None,
            scenarios: ScenarioSet::default(),
        }
    }
}

impl PlannerState {
    /// Loads state from `path`, or the default state if the file does not
    /// exist. Loaded values are re-clamped.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved state; using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to read state file: {}", path.display()));
            }
        };

        let mut state: Self = toml::from_str(&text)
            .with_context(|| format!("Failed to parse state file: {}", path.display()))?;
        state.normalize();
        Ok(state)
    }

    /// Writes state to `path`, replacing any existing file.
    pub fn save(
        &self,
        path: &Path,
    ) -> Result<()> {
        let text = toml::to_string_pretty(self).context("Failed to serialize planner state")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write state file: {}", path.display()))?;
        debug!(path = %path.display(), "saved planner state");
        Ok(())
    }

    /// The snapshot config.
    pub fn config(&self) -> IncomeConfig {
        IncomeConfig {
            hourly_rate: self.hourly_rate,
            hours_per_week: self.hours_per_week,
            vacation_weeks: self.vacation_weeks,
            tax_rate: self.tax_rate,
        }
    }

    /// One scenario's config, with the shared tax rate merged in.
    pub fn scenario_config(
        &self,
        kind: ScenarioKind,
    ) -> IncomeConfig {
        self.scenarios.get(kind).with_tax_rate(self.tax_rate)
    }

    pub fn set_hourly_rate(
        &mut self,
        value: f64,
    ) {
        self.hourly_rate = validate_and_clamp_config(&PartialIncomeConfig {
            hourly_rate: Some(value),
            ..Default::default()
        })
        .hourly_rate;
    }

    pub fn set_hours_per_week(
        &mut self,
        value: f64,
    ) {
        self.hours_per_week = validate_and_clamp_config(&PartialIncomeConfig {
            hours_per_week: Some(value),
            ..Default::default()
        })
        .hours_per_week;
    }

    pub fn set_vacation_weeks(
        &mut self,
        value: f64,
    ) {
        self.vacation_weeks = validate_and_clamp_config(&PartialIncomeConfig {
            vacation_weeks: Some(value),
            ..Default::default()
        })
        .vacation_weeks;
    }

    pub fn set_tax_rate(
        &mut self,
        value: f64,
    ) {
        self.tax_rate = validate_and_clamp_config(&PartialIncomeConfig {
            tax_rate: Some(value),
            ..Default::default()
        })
        .tax_rate;
    }

    pub fn set_target_annual_net(
        &mut self,
        value: Option<f64>,
    ) {
        self.target_annual_net = value;
    }

    /// Applies `update` to one scenario, keeping unspecified fields, then
    /// clamps the result.
    pub fn set_scenario(
        &mut self,
        kind: ScenarioKind,
        update: ScenarioUpdate,
    ) {
        let current = self.scenarios.get(kind);
        let validated = validate_and_clamp_config(&PartialIncomeConfig {
            hourly_rate: Some(update.hourly_rate.unwrap_or(current.hourly_rate)),
            hours_per_week: Some(update.hours_per_week.unwrap_or(current.hours_per_week)),
            vacation_weeks: Some(update.vacation_weeks.unwrap_or(current.vacation_weeks)),
            tax_rate: Some(self.tax_rate),
        });
        *self.scenarios.get_mut(kind) = validated.into();
    }

    /// Remembers an exchange rate. Quotes for the inverse pair are stored as
    /// their reciprocal; any other pair is ignored.
    pub fn set_rate(
        &mut self,
        quote: &FxQuote,
    ) {
        let rate = if quote.is_pair("MXN", "USD") {
            quote.rate
        } else if quote.is_pair("USD", "MXN") {
            1.0 / quote.rate
        } else {
            warn!(base = %quote.base, target = %quote.target, "ignoring quote for unsupported pair");
            return;
        };

        self.mxn_to_usd_rate = Some(rate);
        self.rate_updated_at = Some(quote.updated_at.unwrap_or_else(Utc::now));
    }

    /// Switches the display currency, converting every stored amount with
    /// `mxn_to_usd_rate`.
    ///
    /// Hourly rates are converted then re-clamped; the target is converted
    /// and rounded to whole units. With no usable rate the amounts stay as
    /// they are but the currency still changes.
    pub fn switch_currency(
        &mut self,
        next: Currency,
        mxn_to_usd_rate: Option<f64>,
    ) {
        let current = self.currency;
        if next == current {
            return;
        }

        let rate = mxn_to_usd_rate.unwrap_or(f64::NAN);
        let convert = |amount: f64| convert_amount(amount, current.code(), next.code(), rate);

        self.set_hourly_rate(convert(self.hourly_rate));
        for kind in ScenarioKind::ALL {
            let hourly_rate = convert(self.scenarios.get(kind).hourly_rate);
            self.set_scenario(
                kind,
                ScenarioUpdate {
                    hourly_rate: Some(hourly_rate),
                    ..Default::default()
                },
            );
        }
        self.target_annual_net = self.target_annual_net.map(|t| round_half_up(convert(t)));
        self.currency = next;

        info!(from = %current, to = %next, rate = ?mxn_to_usd_rate, "switched currency");
    }

    /// Restores the snapshot inputs and clears the target. Scenarios, the
    /// currency and the cached rate are kept.
    pub fn reset_to_defaults(&mut self) {
        let defaults = Self::default();
        self.hourly_rate = defaults.hourly_rate;
        self.hours_per_week = defaults.hours_per_week;
        self.vacation_weeks = defaults.vacation_weeks;
        self.tax_rate = defaults.tax_rate;
        self.target_annual_net = None;
    }

    /// Clamps every stored input, for state read back from disk.
    fn normalize(&mut self) {
        let before = self.clone();

        let snapshot = validate_and_clamp_config(&self.config().into());
        self.hourly_rate = snapshot.hourly_rate;
        self.hours_per_week = snapshot.hours_per_week;
        self.vacation_weeks = snapshot.vacation_weeks;
        self.tax_rate = snapshot.tax_rate;
        for kind in ScenarioKind::ALL {
            self.set_scenario(kind, ScenarioUpdate::default());
        }

        if *self != before {
            warn!("saved state had out-of-range values; they were clamped");
        }
    }
}
