//! Listings page: waits out the generation delay, then shows the drafts

use dioxus::prelude::*;
use listing_core::{enter_results, finish_results, HandOffSlot, ResultsMachine, ResultsState};

use crate::bridge::{use_route_navigator, SignalHandle};
use crate::components::{GenerationSteps, ListingCard};
use crate::generation::generate;
use crate::routes::Route;
use crate::state::{use_settings, use_toasts};
use crate::timing::sleep;

/// Listings page - reachable only with a fresh hand-off from the capture page
#[component]
pub fn Listings() -> Element {
    let slot = use_context::<HandOffSlot>();
    let settings = use_settings();
    let mut toasts = use_toasts();
    let navigator = use_route_navigator();

    let machine = use_signal(ResultsMachine::new);
    let handle = SignalHandle(machine);

    // Runs once on mount; the payload is moved out so a reload or a second
    // visit lands back on the capture page.
    use_effect(move || {
        if !enter_results(&handle, &navigator, slot.take()) {
            return;
        }

        let delay = settings.peek().timings().results_delay;
        let strategy = settings.peek().strategy;
        let navigator = navigator.clone();

        // Owned by this page: leaving before the delay skips generation
        spawn(async move {
            finish_results(&handle, &navigator, sleep(delay), |request| generate(strategy, request))
                .await;

            if machine.peek().error().is_some() {
                toasts.error("Failed to generate listing. Please try again.");
            }
        });
    });

    let state = machine.read().state();
    let listings = machine.read().listings().to_vec();
    let step_ms = settings.peek().results_delay_ms / 4;

    rsx! {
        div {
            class: "min-h-screen pt-20 px-4",
            div {
                class: "max-w-7xl mx-auto",

                match state {
                    ResultsState::Loaded => rsx! {
                        div {
                            class: "mb-8 flex items-center justify-between",
                            Link {
                                to: Route::Capture {},
                                class: "flex items-center text-gray-600 hover:text-gray-900",
                                "\u{2190} Back to Upload"
                            }
                            h1 { class: "text-2xl font-bold text-gray-900", "Generated Listings" }
                        }
                        div {
                            class: "grid gap-8",
                            for (index, listing) in listings.into_iter().enumerate() {
                                ListingCard { key: "{index}", listing }
                            }
                        }
                    },
                    ResultsState::Redirected => rsx! {},
                    _ => rsx! {
                        div {
                            class: "flex items-center justify-center min-h-[60vh]",
                            GenerationSteps { step_ms }
                        }
                    },
                }
            }
        }
    }
}
