//! The currently selected quote currency.

use std::str::FromStr;

use crate::error::SelectionError;
use crate::fiat_currency::FiatCurrency;

/// Holds the user's currency choice.
///
/// Starts on the first supported currency and only ever holds a member of
/// [`FiatCurrency`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CurrencySelection {
    current: FiatCurrency,
}

impl CurrencySelection {
    pub fn new(initial: FiatCurrency) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> FiatCurrency {
        self.current
    }

    /// All selectable currencies, in display order.
    pub fn options(&self) -> Vec<FiatCurrency> {
        FiatCurrency::all()
    }

    /// Selects the currency named by `code`.
    ///
    /// Returns `Ok(true)` when the selection changed. Unknown codes are
    /// rejected and leave the current selection untouched.
    pub fn select(&mut self, code: &str) -> Result<bool, SelectionError> {
        let currency = FiatCurrency::from_str(code.trim())
            .map_err(|_| SelectionError::InvalidArgument(code.to_string()))?;
        Ok(self.select_currency(currency))
    }

    /// Selects `currency`, returning `true` if it differs from the current one.
    pub fn select_currency(&mut self, currency: FiatCurrency) -> bool {
        let changed = self.current != currency;
        self.current = currency;
        changed
    }
}
