use api::{
    fetch_price, CoinGecko, FiatCurrency, LifecycleState, RatesController, RequestTicket,
};
use dioxus::prelude::*;

use crate::app_state::AppState;

/// Handle returned by [`use_btc_price`]: the currency selection plus the
/// lifecycle of the price request that follows it.
#[derive(Clone, Copy)]
pub struct BtcPrice {
    rates: Signal<RatesController>,
    provider: Signal<CoinGecko>,
}

impl BtcPrice {
    /// All currencies the user can pick from.
    pub fn options(&self) -> Vec<FiatCurrency> {
        self.rates.read().options()
    }

    pub fn currency(&self) -> FiatCurrency {
        self.rates.read().currency()
    }

    /// Switches to the currency named by `code` and requests its price.
    ///
    /// Re-picking the current currency does nothing. Unknown codes are
    /// logged and dropped.
    pub fn select(&mut self, code: &str) {
        let selected = self.rates.write().select(code);
        match selected {
            Ok(Some(ticket)) => self.dispatch(ticket),
            Ok(None) => {}
            Err(e) => dioxus_logger::tracing::warn!("{}", e),
        }
    }

    /// Current lifecycle snapshot. Subscribes the caller to changes.
    pub fn state(&self) -> LifecycleState {
        self.rates.read().state().clone()
    }

    /// The currency the shown price (or error) belongs to.
    pub fn displayed_currency(&self) -> Option<FiatCurrency> {
        self.rates.read().displayed_currency()
    }

    /// Runs the lookup for `ticket` in the component scope and feeds the
    /// outcome back into the controller.
    fn dispatch(&self, ticket: RequestTicket) {
        let mut rates = self.rates;
        let provider = self.provider.peek().clone();

        spawn(async move {
            let action = fetch_price(&provider, ticket).await;
            rates.write().apply(action);
        });
    }
}

/// Component-scoped Bitcoin price state.
///
/// A request is issued on mount for the initial currency and again every
/// time the selection changes. Requests are not cancelled; the configured
/// `ResponseOrdering` decides whether a superseded response may still land.
/// Both signals and any in-flight request tasks are dropped with the scope.
pub fn use_btc_price() -> BtcPrice {
    let app_state = use_context::<AppState>();
    let source = &app_state.price_source;

    let rates = use_signal(|| RatesController::new(source.initial_currency, source.ordering));
    let provider = use_signal(|| CoinGecko::new(&source.base_url));
    let handle = BtcPrice { rates, provider };

    // reads nothing reactive, so this only runs once after mount
    use_effect(move || {
        let mut rates = handle.rates;
        let ticket = rates.write().start();
        handle.dispatch(ticket);
    });

    handle
}
