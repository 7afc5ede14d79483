//! Error types surfaced by the price lookup and the currency selection.

use thiserror::Error;

use crate::fiat_currency::FiatCurrency;

/// Any way a Bitcoin price lookup can fail.
///
/// The `Display` text is what the widget shows in its error line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchFailure {
    /// The request never produced a response (DNS, connect, TLS, reset...).
    #[error("network error: {0}")]
    Network(String),

    #[error("price API returned HTTP {status}")]
    Status { status: u16 },

    #[error("price API returned a body that is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("price API response has no `bitcoin` entry")]
    MissingBitcoin,

    #[error("price API response has no {0} price")]
    MissingPrice(FiatCurrency),

    #[error("price API returned a non-numeric {currency} price: {value}")]
    NonNumericPrice { currency: FiatCurrency, value: String },
}

impl From<reqwest::Error> for FetchFailure {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None if e.is_decode() => Self::InvalidJson(e.to_string()),
            None => Self::Network(e.to_string()),
        }
    }
}

/// Rejection of a currency code that is not in the supported set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("invalid argument: `{0}` is not a supported currency")]
    InvalidArgument(String),
}
