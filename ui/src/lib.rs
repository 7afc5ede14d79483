// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod components;
pub mod hooks;
mod screens;

use api::PriceSource;
use app_state::AppState;
use components::pico::Container;
use screens::bitcoin_rates::BitcoinRatesScreen;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let widget_css = r#"
    * { box-sizing: border-box; }

    body {
        margin: 0;
        font-family: system-ui, sans-serif;
    }

    .container {
        max-width: 32rem;
        margin: 2rem auto;
        padding: 0 1rem;
    }

    .componentBox {
        border: 1px solid #d0d7de;
        border-radius: 0.5rem;
        padding: 1rem 1.5rem;
    }

    .componentBox select {
        margin-left: 0.5rem;
        padding: 0.25rem 0.5rem;
    }

    .componentBox progress { width: 100%; }
"#;

    use_context_provider(|| {
        let price_source = PriceSource::from_env();
        dioxus_logger::tracing::info!("price source: {:?}", price_source);
        AppState::new(price_source)
    });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        style {
            "{widget_css}"
        }
        Container {
            BitcoinRatesScreen {}
        }
    }
}
