//! Shared building blocks for the rates widget.
pub mod currency_select;
pub mod pico;
