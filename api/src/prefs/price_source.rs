use crate::fiat_currency::FiatCurrency;
use crate::lifecycle::ResponseOrdering;
use crate::price_providers::coin_gecko;
use std::env;
use std::str::FromStr;

/// Where prices come from and how out-of-order responses are treated.
#[derive(Clone, PartialEq, Debug)]
pub struct PriceSource {
    /// Base URL of the CoinGecko-compatible price API.
    pub base_url: String,
    pub ordering: ResponseOrdering,
    /// The currency selected when the widget mounts.
    pub initial_currency: FiatCurrency,
}

impl PriceSource {
    pub fn new(base_url: &str, ordering: ResponseOrdering) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ordering,
            initial_currency: FiatCurrency::default(),
        }
    }

    /// Creates a PriceSource from environment variables, falling back to the
    /// public CoinGecko API.
    ///
    /// # Environment Variables
    /// - `PRICE_API_BASE`: base URL, e.g. `https://api.coingecko.com/api/v3`.
    /// - `STALE_RESPONSES`: "keep" (or "latest-completed") applies every
    ///   response in completion order. Anything else discards responses to
    ///   superseded requests.
    /// - `DEFAULT_CURRENCY`: one of the supported codes. Defaults to USD.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("PRICE_API_BASE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| coin_gecko::DEFAULT_BASE_URL.to_string());

        let ordering = match lookup("STALE_RESPONSES") {
            Some(val)
                if val.eq_ignore_ascii_case("keep")
                    || val.eq_ignore_ascii_case("latest-completed") =>
            {
                ResponseOrdering::LatestCompleted
            }
            _ => ResponseOrdering::LatestRequested,
        };

        let initial_currency = lookup("DEFAULT_CURRENCY")
            .and_then(|s| FiatCurrency::from_str(s.trim()).ok())
            .unwrap_or_default();

        Self {
            initial_currency,
            ..Self::new(&base_url, ordering)
        }
    }
}

impl Default for PriceSource {
    fn default() -> Self {
        Self::from_env()
    }
}
