//! Root application component

use dioxus::prelude::*;
use listing_core::HandOffSlot;

use crate::components::Toaster;
use crate::routes::Route;
use crate::server_fns::load_settings;
use crate::state::{Settings, ToastState};

/// Root application component
#[component]
pub fn App() -> Element {
    // One-shot payload passed from the capture screen to the results screen
    use_context_provider(HandOffSlot::default);
    use_context_provider(ToastState::new);
    let mut settings = use_context_provider(|| Signal::new(Settings::default()));

    use_future(move || async move {
        match load_settings().await {
            Ok(loaded) => settings.set(loaded),
            Err(e) => tracing::warn!(error = %e, "using default settings"),
        }
    });

    rsx! {
        // Global styles
        document::Stylesheet { href: asset!("/assets/tailwind.css") }

        Toaster {}
        Router::<Route> {}
    }
}
