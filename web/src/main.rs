use dioxus::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(Root);
}

/// Browser entry point; the tab title is the only web-specific piece.
#[component]
fn Root() -> Element {
    rsx! {
        document::Title { "Bitcoin Exchange Rate" }
        {ui::App()}
    }
}
