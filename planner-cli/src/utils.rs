use planner_core::Currency;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a user-typed amount such as `"1,250.50"` into an `f64`.
///
/// Handles comma as thousands separator. Empty or whitespace-only input is
/// treated as 0. Usable directly as a clap `value_parser`.
pub fn parse_amount(s: &str) -> Result<f64, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(0.0);
    }
    let value: Decimal = normalized.parse().map_err(|e| {
        tracing::error!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })?;
    Ok(value.to_f64().unwrap_or(0.0))
}

/// Formats `value` as whole currency units with thousands separators,
/// prefixed by the currency code: `MXN 62,500`.
///
/// Non-finite values display as zero.
pub fn format_money(
    value: f64,
    currency: Currency,
) -> String {
    format!("{} {}", currency.code(), format_grouped(value, 0))
}

/// Formats `value` rounded to `decimals` places with thousands separators.
/// Midpoints round away from zero.
pub fn format_grouped(
    value: f64,
    decimals: u32,
) -> String {
    let rounded = Decimal::from_f64(value)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);

    let text = format!("{:.*}", decimals as usize, rounded.abs());
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}

/// Formats an optional amount for display, using "—" when `None`.
pub fn opt_money_display(
    value: Option<f64>,
    currency: Currency,
) -> String {
    value
        .map(|v| format_money(v, currency))
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn assert_close(
        actual: f64,
        expected: f64,
    ) {
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_close(parse_amount("1,234.56").unwrap(), 1234.56);
        assert_close(parse_amount("1,234,567.89").unwrap(), 1_234_567.89);
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_close(parse_amount("  123.45  ").unwrap(), 123.45);
    }

    #[test]
    fn parse_amount_accepts_whole_numbers() {
        assert_eq!(parse_amount("750,000").unwrap(), 750_000.0);
    }

    #[test]
    fn parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), 0.0);
        assert_eq!(parse_amount("   ").unwrap(), 0.0);
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        let err = parse_amount("12abc").unwrap_err();

        assert!(err.to_string().contains("12abc"));
    }

    #[test]
    fn parse_amount_matches_decimal_value() {
        let expected = dec!(750000.25).to_f64().unwrap();

        assert_eq!(parse_amount("750,000.25").unwrap(), expected);
    }

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money(62_500.0, Currency::Mxn), "MXN 62,500");
        assert_eq!(format_money(1_032_750.0, Currency::Usd), "USD 1,032,750");
        assert_eq!(format_money(999.0, Currency::Mxn), "MXN 999");
    }

    #[test]
    fn format_money_rounds_to_whole_units() {
        assert_eq!(format_money(2054.79, Currency::Mxn), "MXN 2,055");
        assert_eq!(format_money(0.5, Currency::Mxn), "MXN 1");
    }

    #[test]
    fn format_money_handles_negative_and_non_finite() {
        assert_eq!(format_money(-500_000.0, Currency::Mxn), "MXN -500,000");
        assert_eq!(format_money(f64::NAN, Currency::Usd), "USD 0");
    }

    #[test]
    fn format_grouped_keeps_decimals() {
        assert_eq!(format_grouped(1818.181818, 2), "1,818.18");
        assert_eq!(format_grouped(5.5, 2), "5.50");
    }

    #[test]
    fn opt_money_display_uses_dash_for_none() {
        assert_eq!(opt_money_display(None, Currency::Mxn), "—");
        assert_eq!(opt_money_display(Some(1000.0), Currency::Mxn), "MXN 1,000");
    }
}
