use tracing::{debug, warn};

/// Converts `amount` between MXN and USD using an MXN → USD rate.
///
/// Fail-soft: the amount comes back unchanged when the codes match
/// (case-insensitively), when the rate is non-finite or not positive, or when
/// the pair is anything other than MXN/USD.
///
/// # Examples
///
/// ```
/// use planner_core::fx::convert_amount;
///
/// assert_eq!(convert_amount(100.0, "MXN", "USD", 0.055), 5.5);
/// assert_eq!(convert_amount(100.0, "mxn", "MXN", f64::NAN), 100.0);
/// assert_eq!(convert_amount(100.0, "MXN", "USD", 0.0), 100.0);
/// ```
pub fn convert_amount(
    amount: f64,
    from: &str,
    to: &str,
    rate_base_to_target: f64,
) -> f64 {
    let from = from.trim().to_ascii_uppercase();
    let to = to.trim().to_ascii_uppercase();

    if from == to {
        return amount;
    }

    if !rate_base_to_target.is_finite() || rate_base_to_target <= 0.0 {
        warn!(
            rate = rate_base_to_target,
            %from,
            %to,
            "unusable exchange rate; amount left unconverted"
        );
        return amount;
    }

    let converted = match (from.as_str(), to.as_str()) {
        ("MXN", "USD") => amount * rate_base_to_target,
        ("USD", "MXN") => amount / rate_base_to_target,
        _ => {
            warn!(%from, %to, "unsupported currency pair; amount left unconverted");
            return amount;
        }
    };

    debug!(amount, converted, %from, %to, "converted amount");
    converted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn mxn_to_usd_multiplies() {
        assert_eq!(convert_amount(100.0, "MXN", "USD", 0.055), 5.5);
    }

    #[test]
    fn usd_to_mxn_divides() {
        let result = convert_amount(100.0, "USD", "MXN", 0.055);

        assert!((result - 1818.181_818_181_818).abs() < 1e-9);
    }

    #[test]
    fn same_currency_is_unchanged_whatever_the_rate() {
        assert_eq!(convert_amount(100.0, "MXN", "MXN", 0.055), 100.0);
        assert_eq!(convert_amount(100.0, "usd", "USD", -3.0), 100.0);
        assert_eq!(convert_amount(100.0, "MXN", "mxn", f64::NAN), 100.0);
    }

    #[test]
    fn codes_are_case_insensitive() {
        assert_eq!(convert_amount(100.0, "mxn", "usd", 0.055), 5.5);
    }

    #[test]
    fn unusable_rate_leaves_amount_unchanged() {
        for rate in [0.0, -0.055, f64::NAN, f64::INFINITY] {
            assert_eq!(convert_amount(100.0, "MXN", "USD", rate), 100.0);
        }
    }

    #[test]
    fn unsupported_pair_leaves_amount_unchanged() {
        assert_eq!(convert_amount(100.0, "EUR", "USD", 1.08), 100.0);
        assert_eq!(convert_amount(100.0, "MXN", "EUR", 0.05), 100.0);
    }
}
