//! Layout components following Pico.css conventions.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

/// A boxed widget panel.
/// Wraps content in an `<article>` element carrying `class`.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! { article { class: "componentBox {class}", {children} } }
}
