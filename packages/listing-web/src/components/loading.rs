//! Loading components

use dioxus::prelude::*;
use listing_core::GENERATION_STEPS;

use crate::timing::sleep;

/// Full-page loading spinner
#[component]
pub fn LoadingSpinner(label: String) -> Element {
    rsx! {
        div {
            class: "flex flex-col items-center justify-center space-y-4",
            div { class: "animate-spin rounded-full h-12 w-12 border-b-2 border-indigo-600" }
            p { class: "text-gray-600", "{label}" }
        }
    }
}

/// Step-by-step progress shown while drafts are generated.
///
/// Steps advance on a fixed cadence and stop on the last one; the real work
/// finishing is what takes the component off screen.
#[component]
pub fn GenerationSteps(step_ms: u64) -> Element {
    let mut current = use_signal(|| 0usize);

    use_future(move || async move {
        while *current.peek() + 1 < GENERATION_STEPS.len() {
            sleep(std::time::Duration::from_millis(step_ms)).await;
            let next = *current.peek() + 1;
            current.set(next);
        }
    });

    rsx! {
        div {
            class: "bg-white p-6 rounded-2xl shadow-lg w-full max-w-md space-y-6",
            h2 { class: "text-xl font-semibold text-gray-900", "Generating Listings" }
            for (index, step) in GENERATION_STEPS.iter().enumerate() {
                div {
                    key: "{step}",
                    class: "flex items-center space-x-3 {step_text(index, current())}",
                    div {
                        class: "flex-shrink-0 w-8 h-8 flex items-center justify-center rounded-full {step_badge(index, current())}",
                        if index < current() {
                            "\u{2713}"
                        } else {
                            span { class: "text-sm font-medium", "{index + 1}" }
                        }
                    }
                    span { class: "text-sm font-medium", "{step}" }
                }
            }
        }
    }
}

fn step_text(index: usize, current: usize) -> &'static str {
    if index <= current {
        "text-gray-900"
    } else {
        "text-gray-400"
    }
}

fn step_badge(index: usize, current: usize) -> &'static str {
    if index < current {
        "bg-green-100 text-green-500"
    } else if index == current {
        "bg-indigo-100 text-indigo-500"
    } else {
        "bg-gray-100"
    }
}
