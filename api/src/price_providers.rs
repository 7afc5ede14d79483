//! Defines the trait for external Bitcoin price sources and the CoinGecko
//! implementation.

use crate::error::FetchFailure;
use crate::fiat_currency::FiatCurrency;

/// A trait for any service that can quote the price of one Bitcoin.
#[allow(async_fn_in_trait)]
pub trait PriceProvider {
    /// Fetches the current price of 1 BTC in `currency`.
    async fn btc_price(&self, currency: FiatCurrency) -> Result<f64, FetchFailure>;
}

/// Provides price data from the public CoinGecko API.
pub mod coin_gecko {
    use super::*;
    use serde_json::Value;

    /// Base URL of CoinGecko's public v3 API.
    pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

    /// An implementation of the `PriceProvider` trait for CoinGecko's
    /// `simple/price` endpoint.
    #[derive(Clone, Debug)]
    pub struct CoinGecko {
        base_url: String,
        client: reqwest::Client,
    }

    impl CoinGecko {
        pub fn new(base_url: &str) -> Self {
            Self {
                base_url: base_url.trim_end_matches('/').to_string(),
                client: reqwest::Client::new(),
            }
        }

        /// The full request URL for a quote in `currency`.
        pub fn price_url(&self, currency: FiatCurrency) -> String {
            format!(
                "{}/simple/price?ids=bitcoin&vs_currencies={}",
                self.base_url,
                currency.api_key()
            )
        }
    }

    impl Default for CoinGecko {
        fn default() -> Self {
            Self::new(DEFAULT_BASE_URL)
        }
    }

    impl PriceProvider for CoinGecko {
        async fn btc_price(&self, currency: FiatCurrency) -> Result<f64, FetchFailure> {
            let resp = self
                .client
                .get(self.price_url(currency))
                .send()
                .await?
                .error_for_status()?;

            let body = resp.text().await?;
            let json: Value = serde_json::from_str(&body)
                .map_err(|e| FetchFailure::InvalidJson(e.to_string()))?;

            parse_price(&json, currency)
        }
    }

    /// Extracts `bitcoin.<currency>` from a `simple/price` response.
    ///
    /// The API keys prices by lowercase code; an uppercase key is accepted too.
    pub fn parse_price(json: &Value, currency: FiatCurrency) -> Result<f64, FetchFailure> {
        let bitcoin = json
            .get("bitcoin")
            .and_then(Value::as_object)
            .ok_or(FetchFailure::MissingBitcoin)?;

        let value = bitcoin
            .get(&currency.api_key())
            .or_else(|| bitcoin.get(currency.code()))
            .ok_or(FetchFailure::MissingPrice(currency))?;

        value
            .as_f64()
            .ok_or_else(|| FetchFailure::NonNumericPrice {
                currency,
                value: value.to_string(),
            })
    }
}
