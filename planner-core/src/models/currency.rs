use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Mxn,
    Usd,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown currency '{0}' (expected MXN or USD)")]
pub struct UnknownCurrency(pub String);

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Mxn => "MXN",
            Self::Usd => "USD",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MXN" => Some(Self::Mxn),
            "USD" => Some(Self::Usd),
            _ => None,
        }
    }
}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Currency::parse("mxn"), Some(Currency::Mxn));
        assert_eq!(Currency::parse(" Usd "), Some(Currency::Usd));
    }

    #[test]
    fn parse_rejects_other_codes() {
        assert_eq!(Currency::parse("EUR"), None);
        assert_eq!(
            "EUR".parse::<Currency>(),
            Err(UnknownCurrency("EUR".to_string()))
        );
    }
}
