//! Defines the fiat currencies a Bitcoin price can be quoted in.

use serde::Deserialize;
use serde::Serialize;
use strum::IntoEnumIterator;

/// A fiat currency the widget can quote Bitcoin against.
///
/// Declaration order is the order shown in the currency selector, and the
/// first variant is the initial selection.
#[derive(
    Debug,
    PartialEq,
    Eq,
    Hash,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Default,
    strum::EnumIs,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    #[default]
    USD, // United States Dollar
    AUD, // Australian Dollar
    NZD, // New Zealand Dollar
    GBP, // Great British Pound
    EUR, // Euro
    SGD, // Singapore Dollar
}

impl FiatCurrency {
    /// Every supported currency, in selector order.
    pub fn all() -> Vec<FiatCurrency> {
        Self::iter().collect()
    }

    /// Returns the number of decimal digits used by the currency.
    pub fn decimals(&self) -> u8 {
        2
    }

    /// Returns the ISO 4217 string code for the currency (e.g., "USD").
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// The code as the price API spells it in queries and response keys.
    pub fn api_key(&self) -> String {
        self.code().to_ascii_lowercase()
    }

    /// Returns the full name of the currency.
    pub fn name(&self) -> &'static str {
        match self {
            Self::USD => "United States Dollar",
            Self::AUD => "Australian Dollar",
            Self::NZD => "New Zealand Dollar",
            Self::GBP => "Great British Pound",
            Self::EUR => "Euro",
            Self::SGD => "Singapore Dollar",
        }
    }
}

impl std::fmt::Display for FiatCurrency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
