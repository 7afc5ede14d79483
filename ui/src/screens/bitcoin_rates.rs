use crate::components::currency_select::{CurrencyInfo, CurrencySelect};
use crate::components::pico::Card;
use crate::hooks::use_btc_price::use_btc_price;
use api::fiat_amount::FiatAmount;
use api::{FetchStatus, FiatCurrency};
use dioxus::prelude::*;

/// The text shown once a price has arrived.
pub fn price_line(price: f64, currency: FiatCurrency) -> String {
    format!(
        "Current price of Bitcoin in {}: {}",
        currency.code(),
        FiatAmount::new_from_float(price, currency).to_string_with_code()
    )
}

#[component]
pub fn BitcoinRatesScreen() -> Element {
    let mut rates = use_btc_price();

    let selected = rates.currency();
    let state = rates.state();
    let shown_currency = rates.displayed_currency().unwrap_or(selected);
    let options: Vec<CurrencyInfo> = rates.options().into_iter().map(CurrencyInfo::from).collect();
    let price_text = state.price().map(|price| price_line(price, shown_currency));
    let error_text = state.error().unwrap_or_default().to_string();

    rsx! {
        Card {
            class: "BitcoinRates",
            h3 { "Bitcoin Exchange Rate" }
            CurrencySelect {
                options,
                selected: selected.code(),
                on_select: move |code: String| rates.select(&code),
            }
            match state.status() {
                FetchStatus::Idle => rsx! {},
                FetchStatus::Loading => rsx! {
                    p { "Loading..." }
                    progress {}
                },
                FetchStatus::Success => rsx! {
                    if let Some(text) = price_text {
                        p { "{text}" }
                    }
                },
                FetchStatus::Error => rsx! {
                    p { "Error: {error_text}" }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_line_uses_the_price_currency() {
        assert_eq!(
            price_line(42000.5, FiatCurrency::EUR),
            "Current price of Bitcoin in EUR: 42,000.50 EUR"
        );
        assert_eq!(
            price_line(0.004, FiatCurrency::SGD),
            "Current price of Bitcoin in SGD: 0.00 SGD"
        );
    }
}
