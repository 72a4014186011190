//! Toast notifications

use dioxus::prelude::*;

use crate::state::{use_toasts, Toast, TOAST_TTL};
use crate::timing::sleep;

/// Renders every live toast; mount once near the root.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_toasts();
    let items = toasts.toasts.read().clone();

    rsx! {
        div {
            class: "fixed top-20 right-4 z-50 flex flex-col gap-2 w-80",
            for toast in items {
                ToastItem { key: "{toast.id}", toast }
            }
        }
    }
}

#[component]
fn ToastItem(toast: Toast) -> Element {
    let mut toasts = use_toasts();
    let id = toast.id;

    // Scoped to this item: a toast dismissed by hand drops its timer too
    use_future(move || async move {
        sleep(TOAST_TTL).await;
        toasts.dismiss(id);
    });

    rsx! {
        div {
            class: "border rounded-lg shadow-sm p-4 flex items-start justify-between gap-3 {toast.kind.classes()}",
            p { class: "text-sm", "{toast.message}" }
            button {
                class: "text-sm opacity-60 hover:opacity-100",
                onclick: move |_| toasts.dismiss(id),
                "\u{2715}"
            }
        }
    }
}
