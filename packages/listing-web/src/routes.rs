//! Route definitions for the application

use dioxus::prelude::*;

use crate::components::Navbar;
use crate::pages::{Capture, Listings};

/// All application routes
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Capture {},

        #[route("/listings")]
        Listings {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Unknown paths fall back to the capture screen
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let navigator = use_navigator();

    use_effect(move || {
        tracing::debug!(path = %segments.join("/"), "unknown route, redirecting");
        navigator.replace(Route::Capture {});
    });

    rsx! {}
}
