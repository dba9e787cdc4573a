//! Exchange rates from the base currency (USD).
//!
//! Rates are static: the calculator never fetches live quotes. A rate is the
//! amount of the target currency bought by one US dollar.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TableError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    AUD,
    CAD,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::USD,
        Currency::EUR,
        Currency::GBP,
        Currency::AUD,
        Currency::CAD,
    ];

    /// Units of this currency per 1 USD. USD is exactly 1.0.
    pub fn rate(self) -> f64 {
        match self {
            Currency::USD => 1.0,
            Currency::EUR => 0.91,
            Currency::GBP => 0.78,
            Currency::AUD => 1.48,
            Currency::CAD => 1.35,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::AUD => "A$",
            Currency::CAD => "C$",
        }
    }

    /// ISO 4217 code.
    pub fn code(self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::AUD => "AUD",
            Currency::CAD => "CAD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Currency::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| TableError::UnknownCurrency(code.to_string()))
    }
}

/// Convert a USD amount into `currency`.
///
/// `convert(x, Currency::USD) == x` exactly.
pub fn convert(amount_usd: f64, currency: Currency) -> f64 {
    amount_usd * currency.rate()
}

/// Inverse of [`convert`]: bring an amount in `currency` back to USD.
pub fn convert_to_usd(amount: f64, currency: Currency) -> f64 {
    amount / currency.rate()
}
