//! The request lifecycle behind the Bitcoin price display.
//!
//! A fetch moves the state `Idle -> Loading -> Success | Error`. Transitions
//! are expressed as [`PriceAction`] values and applied by the pure [`reduce`]
//! function; [`PriceLifecycle`] adds request tickets on top so that a caller
//! can decide what to do with a response that arrives after a newer request
//! was issued.

use std::collections::BTreeSet;

use dioxus_logger::tracing::{debug, info, warn};

use crate::fiat_currency::FiatCurrency;
use crate::price_providers::PriceProvider;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumIs)]
pub enum FetchStatus {
    /// No request has been issued yet.
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Snapshot of the price request lifecycle.
///
/// `price` is only set in `Success` and `error` only in `Error`. Values are
/// only produced by [`reduce`], so the two are never populated together.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LifecycleState {
    status: FetchStatus,
    price: Option<f64>,
    error: Option<String>,
}

impl LifecycleState {
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    pub fn price(&self) -> Option<f64> {
        self.price
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }
}

/// Identifies one issued price request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    currency: FiatCurrency,
}

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }
}

/// The closed set of lifecycle transitions.
#[derive(Clone, Debug, PartialEq)]
pub enum PriceAction {
    FetchRequested(RequestTicket),
    FetchSucceeded { ticket: RequestTicket, price: f64 },
    FetchFailed { ticket: RequestTicket, message: String },
}

impl PriceAction {
    pub fn ticket(&self) -> RequestTicket {
        match self {
            Self::FetchRequested(ticket) => *ticket,
            Self::FetchSucceeded { ticket, .. } | Self::FetchFailed { ticket, .. } => *ticket,
        }
    }
}

/// Applies `action` to `state`, producing the next state.
pub fn reduce(_state: &LifecycleState, action: &PriceAction) -> LifecycleState {
    match action {
        PriceAction::FetchRequested(_) => LifecycleState {
            status: FetchStatus::Loading,
            price: None,
            error: None,
        },
        PriceAction::FetchSucceeded { price, .. } => LifecycleState {
            status: FetchStatus::Success,
            price: Some(*price),
            error: None,
        },
        PriceAction::FetchFailed { message, .. } => LifecycleState {
            status: FetchStatus::Error,
            price: None,
            error: Some(message.clone()),
        },
    }
}

/// Which completed responses are allowed to update the state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, strum::EnumIs)]
pub enum ResponseOrdering {
    /// Only the response to the most recently issued request is applied.
    #[default]
    LatestRequested,
    /// Every response is applied, so whichever completes last wins.
    LatestCompleted,
}

/// Owns the lifecycle state and the bookkeeping for outstanding requests.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PriceLifecycle {
    state: LifecycleState,
    ordering: ResponseOrdering,
    issued: u64,
    /// Sequence numbers of issued requests that have not completed yet.
    pending: BTreeSet<u64>,
    latest: Option<RequestTicket>,
    displayed: Option<FiatCurrency>,
}

impl PriceLifecycle {
    pub fn new(ordering: ResponseOrdering) -> Self {
        Self {
            ordering,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// The ticket of the most recently issued request.
    pub fn latest(&self) -> Option<RequestTicket> {
        self.latest
    }

    /// Currency of the request whose outcome the state currently holds.
    pub fn displayed_currency(&self) -> Option<FiatCurrency> {
        self.displayed
    }

    /// Issues a request for `currency` and moves the state to `Loading`.
    pub fn begin(&mut self, currency: FiatCurrency) -> RequestTicket {
        self.issued += 1;
        let ticket = RequestTicket {
            seq: self.issued,
            currency,
        };
        debug!("price request #{} issued for {}", ticket.seq, currency);

        self.pending.insert(ticket.seq);
        self.latest = Some(ticket);
        self.displayed = Some(currency);
        self.state = reduce(&self.state, &PriceAction::FetchRequested(ticket));
        ticket
    }

    /// Applies a completion action. Returns `false` if the action was dropped.
    ///
    /// Each request completes at most once: an outcome for a request that
    /// was never issued, or that already completed, is ignored.
    pub fn apply(&mut self, action: PriceAction) -> bool {
        let ticket = action.ticket();
        if let PriceAction::FetchRequested(_) = action {
            warn!("request #{} must be issued through begin()", ticket.seq);
            return false;
        }
        if !self.pending.remove(&ticket.seq) {
            warn!(
                "ignoring price action for unknown or completed request #{}",
                ticket.seq
            );
            return false;
        }

        if self.ordering.is_latest_requested() && self.latest != Some(ticket) {
            warn!(
                "discarding stale {} price response #{} (latest is #{})",
                ticket.currency,
                ticket.seq,
                self.latest.map(|t| t.seq).unwrap_or_default()
            );
            return false;
        }

        self.displayed = Some(ticket.currency);
        self.state = reduce(&self.state, &action);
        true
    }

    /// Issues a request for `currency`, awaits it, and applies the outcome.
    pub async fn refresh<P: PriceProvider>(&mut self, provider: &P, currency: FiatCurrency) -> bool {
        let ticket = self.begin(currency);
        let action = fetch_price(provider, ticket).await;
        self.apply(action)
    }
}

/// Performs the lookup for `ticket` and turns its outcome into a completion
/// action. Failures never escape; they become `FetchFailed`.
pub async fn fetch_price<P: PriceProvider>(provider: &P, ticket: RequestTicket) -> PriceAction {
    match provider.btc_price(ticket.currency).await {
        Ok(price) => {
            info!("BTC price #{}: {} {}", ticket.seq, price, ticket.currency);
            PriceAction::FetchSucceeded { ticket, price }
        }
        Err(e) => {
            warn!("BTC price #{} in {} failed: {}", ticket.seq, ticket.currency, e);
            PriceAction::FetchFailed {
                ticket,
                message: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchFailure;
    use std::collections::HashMap;

    /// Answers from a fixed table; currencies not in the table fail.
    struct TablePrices(HashMap<FiatCurrency, f64>);

    impl PriceProvider for TablePrices {
        async fn btc_price(&self, currency: FiatCurrency) -> Result<f64, FetchFailure> {
            self.0
                .get(&currency)
                .copied()
                .ok_or_else(|| FetchFailure::Network("connection refused".to_string()))
        }
    }

    fn table() -> TablePrices {
        TablePrices(HashMap::from([
            (FiatCurrency::USD, 65000.0),
            (FiatCurrency::EUR, 42000.5),
        ]))
    }

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }

    #[test]
    fn starts_idle() {
        let lifecycle = PriceLifecycle::default();
        assert!(lifecycle.state().status().is_idle());
        assert_eq!(lifecycle.state().price(), None);
        assert_eq!(lifecycle.state().error(), None);
        assert_eq!(lifecycle.latest(), None);
    }

    #[test]
    fn begin_moves_to_loading_and_clears_previous_outcome() {
        let mut lifecycle = PriceLifecycle::default();
        let t1 = lifecycle.begin(FiatCurrency::USD);
        assert!(lifecycle.apply(PriceAction::FetchSucceeded { ticket: t1, price: 1.0 }));
        assert_eq!(lifecycle.state().price(), Some(1.0));

        let t2 = lifecycle.begin(FiatCurrency::AUD);
        assert_eq!(t2.seq(), t1.seq() + 1);
        assert!(lifecycle.state().is_loading());
        assert_eq!(lifecycle.state().price(), None);
        assert_eq!(lifecycle.state().error(), None);
    }

    #[test]
    fn success_and_error_are_exclusive() {
        let ticket = RequestTicket {
            seq: 1,
            currency: FiatCurrency::USD,
        };
        let loading = reduce(&LifecycleState::default(), &PriceAction::FetchRequested(ticket));

        let ok = reduce(&loading, &PriceAction::FetchSucceeded { ticket, price: 3.5 });
        assert_eq!(ok.status(), FetchStatus::Success);
        assert_eq!(ok.price(), Some(3.5));
        assert_eq!(ok.error(), None);

        let failed = reduce(
            &ok,
            &PriceAction::FetchFailed {
                ticket,
                message: "boom".to_string(),
            },
        );
        assert_eq!(failed.status(), FetchStatus::Error);
        assert_eq!(failed.price(), None);
        assert_eq!(failed.error(), Some("boom"));
    }

    #[test]
    fn refresh_eur_succeeds() {
        let mut lifecycle = PriceLifecycle::default();
        assert!(block_on(lifecycle.refresh(&table(), FiatCurrency::EUR)));

        let state = lifecycle.state();
        assert_eq!(state.status(), FetchStatus::Success);
        assert_eq!(state.price(), Some(42000.5));
        assert_eq!(state.error(), None);
        assert_eq!(lifecycle.displayed_currency(), Some(FiatCurrency::EUR));
    }

    #[test]
    fn refresh_gbp_network_error() {
        let mut lifecycle = PriceLifecycle::default();
        block_on(lifecycle.refresh(&table(), FiatCurrency::GBP));

        let state = lifecycle.state();
        assert_eq!(state.status(), FetchStatus::Error);
        assert_eq!(state.price(), None);
        assert_eq!(state.error(), Some("network error: connection refused"));
    }

    #[test]
    fn latest_completed_lets_slow_usd_response_win() {
        let provider = table();
        let mut lifecycle = PriceLifecycle::new(ResponseOrdering::LatestCompleted);

        let usd = lifecycle.begin(FiatCurrency::USD);
        let eur = lifecycle.begin(FiatCurrency::EUR);

        // EUR resolves first, USD last
        assert!(lifecycle.apply(block_on(fetch_price(&provider, eur))));
        assert!(lifecycle.apply(block_on(fetch_price(&provider, usd))));

        assert_eq!(lifecycle.state().price(), Some(65000.0));
        assert_eq!(lifecycle.displayed_currency(), Some(FiatCurrency::USD));
        assert_eq!(lifecycle.latest().map(|t| t.currency()), Some(FiatCurrency::EUR));
    }

    #[test]
    fn latest_requested_discards_slow_usd_response() {
        let provider = table();
        let mut lifecycle = PriceLifecycle::new(ResponseOrdering::LatestRequested);

        let usd = lifecycle.begin(FiatCurrency::USD);
        let eur = lifecycle.begin(FiatCurrency::EUR);

        assert!(lifecycle.apply(block_on(fetch_price(&provider, eur))));
        assert!(!lifecycle.apply(block_on(fetch_price(&provider, usd))));

        assert_eq!(lifecycle.state().price(), Some(42000.5));
        assert_eq!(lifecycle.displayed_currency(), Some(FiatCurrency::EUR));
    }

    #[test]
    fn stale_response_while_latest_is_pending_keeps_loading() {
        let mut lifecycle = PriceLifecycle::default();
        let usd = lifecycle.begin(FiatCurrency::USD);
        lifecycle.begin(FiatCurrency::EUR);

        assert!(!lifecycle.apply(PriceAction::FetchSucceeded { ticket: usd, price: 1.0 }));
        assert!(lifecycle.state().is_loading());
    }

    #[test]
    fn each_request_completes_at_most_once() {
        for ordering in [ResponseOrdering::LatestRequested, ResponseOrdering::LatestCompleted] {
            let mut lifecycle = PriceLifecycle::new(ordering);
            let ticket = lifecycle.begin(FiatCurrency::EUR);

            assert!(lifecycle.apply(PriceAction::FetchSucceeded { ticket, price: 42000.5 }));
            assert!(!lifecycle.apply(PriceAction::FetchFailed {
                ticket,
                message: "late".to_string(),
            }));

            let state = lifecycle.state();
            assert_eq!(state.status(), FetchStatus::Success);
            assert_eq!(state.price(), Some(42000.5));
            assert_eq!(state.error(), None);
        }
    }

    #[test]
    fn discarded_stale_response_cannot_land_later() {
        let mut lifecycle = PriceLifecycle::default();
        let usd = lifecycle.begin(FiatCurrency::USD);
        let eur = lifecycle.begin(FiatCurrency::EUR);

        assert!(!lifecycle.apply(PriceAction::FetchSucceeded { ticket: usd, price: 1.0 }));
        assert!(lifecycle.apply(PriceAction::FetchSucceeded { ticket: eur, price: 2.0 }));
        assert!(!lifecycle.apply(PriceAction::FetchSucceeded { ticket: usd, price: 1.0 }));
        assert_eq!(lifecycle.state().price(), Some(2.0));
    }

    #[test]
    fn requested_actions_only_come_from_begin() {
        let mut lifecycle = PriceLifecycle::default();
        let ticket = lifecycle.begin(FiatCurrency::AUD);
        assert!(lifecycle.apply(PriceAction::FetchFailed {
            ticket,
            message: "down".to_string(),
        }));
        assert!(!lifecycle.apply(PriceAction::FetchRequested(ticket)));
        assert!(lifecycle.state().status().is_error());
    }

    #[test]
    fn rejects_tickets_it_never_issued() {
        let mut lifecycle = PriceLifecycle::new(ResponseOrdering::LatestCompleted);
        let forged = RequestTicket {
            seq: 7,
            currency: FiatCurrency::SGD,
        };
        assert!(!lifecycle.apply(PriceAction::FetchSucceeded { ticket: forged, price: 1.0 }));
        assert!(lifecycle.state().status().is_idle());
    }
}
