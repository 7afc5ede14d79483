//! A fixed-point fiat value used to present a Bitcoin price.

use std::fmt;

use crate::fiat_currency::FiatCurrency;

/// Represents a monetary value in a specific fiat currency.
///
/// The amount is stored in the currency's smallest unit (e.g., cents for USD).
/// The default `Display` implementation formats this as a plain numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiatAmount {
    amount: i64,
    currency: FiatCurrency,
}

impl FiatAmount {
    /// Creates a new `FiatAmount` from a floating-point value, typically from an API.
    ///
    /// The float is rounded to the nearest minor unit of the currency.
    ///
    /// # Examples
    /// ```
    /// use api::fiat_amount::FiatAmount;
    /// use api::fiat_currency::FiatCurrency;
    ///
    /// let amount = FiatAmount::new_from_float(123.456, FiatCurrency::USD);
    /// assert_eq!(amount.to_string(), "123.46");
    /// ```
    pub fn new_from_float(value: f64, currency: FiatCurrency) -> Self {
        let multiplier = 10_f64.powi(currency.decimals() as i32);
        let amount = (value * multiplier).round() as i64;

        Self { amount, currency }
    }

    /// Formats the amount with thousands separators (e.g., "42,000.50").
    pub fn to_string_grouped(&self) -> String {
        let plain = self.to_string();
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain.as_str()),
        };
        let (major, minor) = match unsigned.split_once('.') {
            Some((major, minor)) => (major, Some(minor)),
            None => (unsigned, None),
        };

        let mut grouped = String::with_capacity(major.len() + major.len() / 3);
        for (i, digit) in major.chars().enumerate() {
            if i > 0 && (major.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        match minor {
            Some(minor) => format!("{sign}{grouped}.{minor}"),
            None => format!("{sign}{grouped}"),
        }
    }

    /// Formats the amount with its currency code (e.g., "42,000.50 EUR").
    pub fn to_string_with_code(&self) -> String {
        format!("{} {}", self.to_string_grouped(), self.currency.code())
    }
}

impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.currency.decimals() as usize;
        let sign = if self.amount < 0 { "-" } else { "" };
        let abs = self.amount.unsigned_abs();

        if decimals == 0 {
            return write!(f, "{sign}{abs}");
        }

        let divisor = 10_u64.pow(decimals as u32);
        write!(
            f,
            "{sign}{}.{:0width$}",
            abs / divisor,
            abs % divisor,
            width = decimals
        )
    }
}
