use api::PriceSource;
use std::ops::Deref;
use std::sync::Arc;

/// Read-only settings shared with every component through the context.
#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub price_source: PriceSource,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(price_source: PriceSource) -> Self {
        Self(Arc::new(AppStateData { price_source }))
    }
}
