//! This crate contains the framework-free core of the Bitcoin rates widget:
//! supported currencies, the selection, the price request lifecycle, and the
//! price providers it talks to.

pub mod controller;
pub mod error;
pub mod fiat_amount;
pub mod fiat_currency;
pub mod lifecycle;
pub mod prefs;
pub mod price_providers;
pub mod selection;

pub use controller::RatesController;
pub use error::{FetchFailure, SelectionError};
pub use fiat_currency::FiatCurrency;
pub use lifecycle::{
    fetch_price, reduce, FetchStatus, LifecycleState, PriceAction, PriceLifecycle,
    RequestTicket, ResponseOrdering,
};
pub use prefs::price_source::PriceSource;
pub use price_providers::{coin_gecko::CoinGecko, PriceProvider};
pub use selection::CurrencySelection;
