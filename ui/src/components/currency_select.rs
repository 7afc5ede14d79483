#![allow(non_snake_case)]

use api::FiatCurrency;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone, Copy)]
pub struct CurrencyInfo {
    pub short_name: &'static str,
    pub long_name: &'static str,
}

impl From<FiatCurrency> for CurrencyInfo {
    fn from(currency: FiatCurrency) -> Self {
        Self {
            short_name: currency.code(),
            long_name: currency.name(),
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct CurrencySelectProps {
    /// Currencies offered, in display order.
    pub options: Vec<CurrencyInfo>,
    /// short_name of the selected currency.
    pub selected: &'static str,
    /// Called with the short_name the user picked.
    pub on_select: EventHandler<String>,
}

/// A labelled `<select>` listing the supported currencies by code.
pub fn CurrencySelect(props: CurrencySelectProps) -> Element {
    let on_select = props.on_select;
    let selected = props.selected;

    rsx! {
        label {
            "Choose currency: "
            select {
                value: "{selected}",
                onchange: move |evt: FormEvent| on_select.call(evt.value()),
                for info in props.options.iter().copied() {
                    option {
                        key: "{info.short_name}",
                        value: "{info.short_name}",
                        title: "{info.long_name}",
                        selected: info.short_name == selected,
                        "{info.short_name}"
                    }
                }
            }
        }
    }
}
