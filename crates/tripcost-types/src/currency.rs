//! Display currencies.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::ConfigurationError;

/// Currency an amount can be displayed in.
///
/// Serialized as its ISO 4217 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// UAE dirham, the reference currency of the cost tables.
    #[default]
    Aed,
    /// US dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound sterling.
    Gbp,
    /// Indian rupee.
    Inr,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Aed => "AED",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Inr => "INR",
        }
    }

    /// Returns the symbol used when formatting amounts.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Aed => "AED ",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Inr => "₹",
        }
    }

    /// Returns all supported currencies.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Aed, Self::Usd, Self::Eur, Self::Gbp, Self::Inr]
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AED" => Ok(Self::Aed),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "INR" => Ok(Self::Inr),
            _ => Err(ConfigurationError::unknown(
                "currency",
                s,
                "AED, USD, EUR, GBP, INR",
            )),
        }
    }
}
