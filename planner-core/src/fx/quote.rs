use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}$").expect("currency code pattern is valid"));

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FxError {
    #[error("invalid currency code '{0}'")]
    InvalidCurrencyCode(String),

    #[error("invalid exchange rate {0}")]
    InvalidRate(f64),

    #[error("no exchange rate available for {base}->{target}")]
    Unavailable { base: String, target: String },
}

/// An exchange rate obtained from outside the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FxQuote {
    pub base: String,
    pub target: String,
    /// Units of `target` per unit of `base`.
    pub rate: f64,
    pub updated_at: Option<DateTime<Utc>>,
}

impl FxQuote {
    /// Builds a quote, upper-casing the codes.
    ///
    /// # Errors
    ///
    /// - [`FxError::InvalidCurrencyCode`] if a code is not three ASCII letters
    /// - [`FxError::InvalidRate`] if the rate is non-finite or not positive
    pub fn new(
        base: &str,
        target: &str,
        rate: f64,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<Self, FxError> {
        let base = currency_code(base)?;
        let target = currency_code(target)?;
        if !rate.is_finite() || rate <= 0.0 {
            return Err(FxError::InvalidRate(rate));
        }

        Ok(Self {
            base,
            target,
            rate,
            updated_at,
        })
    }

    pub fn is_pair(
        &self,
        base: &str,
        target: &str,
    ) -> bool {
        self.base.eq_ignore_ascii_case(base) && self.target.eq_ignore_ascii_case(target)
    }
}

fn currency_code(code: &str) -> Result<String, FxError> {
    let upper = code.trim().to_ascii_uppercase();
    if CURRENCY_CODE.is_match(&upper) {
        Ok(upper)
    } else {
        Err(FxError::InvalidCurrencyCode(code.to_string()))
    }
}
