//! Ties the currency selection to the price request lifecycle.

use dioxus_logger::tracing::debug;

use crate::error::SelectionError;
use crate::fiat_currency::FiatCurrency;
use crate::lifecycle::{LifecycleState, PriceAction, PriceLifecycle, RequestTicket, ResponseOrdering};
use crate::selection::CurrencySelection;

/// Owns the selection and the lifecycle together, so every change of
/// currency issues exactly one new request.
///
/// The controller never performs I/O itself. The tickets it hands out are
/// meant to be passed to [`fetch_price`](crate::lifecycle::fetch_price),
/// and the resulting actions fed back through [`apply`](Self::apply).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RatesController {
    selection: CurrencySelection,
    lifecycle: PriceLifecycle,
}

impl RatesController {
    pub fn new(initial: FiatCurrency, ordering: ResponseOrdering) -> Self {
        Self {
            selection: CurrencySelection::new(initial),
            lifecycle: PriceLifecycle::new(ordering),
        }
    }

    /// Issues the request for the current selection. Called once on mount.
    pub fn start(&mut self) -> RequestTicket {
        self.lifecycle.begin(self.selection.current())
    }

    /// Selects the currency named by `code`.
    ///
    /// Returns a ticket for the new request when the currency changed, and
    /// `None` when `code` names the currency already selected.
    pub fn select(&mut self, code: &str) -> Result<Option<RequestTicket>, SelectionError> {
        if !self.selection.select(code)? {
            debug!("{} already selected", self.selection.current());
            return Ok(None);
        }
        Ok(Some(self.lifecycle.begin(self.selection.current())))
    }

    /// Feeds a completed request back in. See [`PriceLifecycle::apply`].
    pub fn apply(&mut self, action: PriceAction) -> bool {
        self.lifecycle.apply(action)
    }

    pub fn currency(&self) -> FiatCurrency {
        self.selection.current()
    }

    pub fn options(&self) -> Vec<FiatCurrency> {
        self.selection.options()
    }

    pub fn state(&self) -> &LifecycleState {
        self.lifecycle.state()
    }

    /// The ticket of the most recently issued request.
    pub fn latest(&self) -> Option<RequestTicket> {
        self.lifecycle.latest()
    }

    /// The currency the shown price (or error) belongs to. This can differ
    /// from [`currency`](Self::currency) when stale responses are kept.
    pub fn displayed_currency(&self) -> Option<FiatCurrency> {
        self.lifecycle.displayed_currency()
    }
}
