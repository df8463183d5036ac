use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use super::{FxError, FxQuote};

/// Source of exchange rates. Network-backed implementations own their own
/// timeouts, retries and caching; the planner only sees a resolved quote or
/// an error.
#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn quote(
        &self,
        base: &str,
        target: &str,
    ) -> Result<FxQuote, FxError>;
}

/// Serves one known MXN → USD rate, and its inverse for USD → MXN.
#[derive(Debug, Clone)]
pub struct FixedRateProvider {
    mxn_to_usd: f64,
    updated_at: Option<DateTime<Utc>>,
}

impl FixedRateProvider {
    /// # Errors
    ///
    /// Returns [`FxError::InvalidRate`] if the rate is non-finite or not
    /// positive.
    pub fn new(
        mxn_to_usd: f64,
        updated_at: Option<DateTime<Utc>>,
    ) -> Result<Self, FxError> {
        if !mxn_to_usd.is_finite() || mxn_to_usd <= 0.0 {
            return Err(FxError::InvalidRate(mxn_to_usd));
        }
        Ok(Self {
            mxn_to_usd,
            updated_at,
        })
    }
}

#[async_trait]
impl RateProvider for FixedRateProvider {
    async fn quote(
        &self,
        base: &str,
        target: &str,
    ) -> Result<FxQuote, FxError> {
        let rate = match (
            base.trim().to_ascii_uppercase().as_str(),
            target.trim().to_ascii_uppercase().as_str(),
        ) {
            ("MXN", "USD") => self.mxn_to_usd,
            ("USD", "MXN") => 1.0 / self.mxn_to_usd,
            _ => {
                return Err(FxError::Unavailable {
                    base: base.to_string(),
                    target: target.to_string(),
                });
            }
        };

        debug!(base, target, rate, "serving fixed exchange rate");
        FxQuote::new(base, target, rate, self.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn quotes_configured_pair() {
        let provider = FixedRateProvider::new(0.055, None).unwrap();

        let quote = provider.quote("MXN", "USD").await.unwrap();

        assert_eq!(quote.rate, 0.055);
        assert_eq!(quote.base, "MXN");
    }

    #[tokio::test]
    async fn quotes_inverse_pair() {
        let provider = FixedRateProvider::new(0.05, None).unwrap();

        let quote = provider.quote("usd", "mxn").await.unwrap();

        assert_eq!(quote.rate, 20.0);
        assert_eq!(quote.target, "MXN");
    }

    #[tokio::test]
    async fn other_pairs_are_unavailable() {
        let provider = FixedRateProvider::new(0.055, None).unwrap();

        let result = provider.quote("EUR", "USD").await;

        assert_eq!(
            result,
            Err(FxError::Unavailable {
                base: "EUR".to_string(),
                target: "USD".to_string(),
            })
        );
    }

    #[test]
    fn rejects_unusable_rate() {
        assert!(matches!(
            FixedRateProvider::new(-1.0, None),
            Err(FxError::InvalidRate(_))
        ));
    }
}
