//! Listing draft card component

use std::time::Duration;

use dioxus::prelude::*;
use listing_core::{ListingDraft, MARKETPLACE_URL};

use crate::state::use_toasts;
use crate::timing::sleep;

/// How long the copy button reads "Copied!"
const COPIED_FOR: Duration = Duration::from_secs(2);

/// Props for ListingCard
#[derive(Props, Clone, PartialEq)]
pub struct ListingCardProps {
    pub listing: ListingDraft,
}

/// One generated draft: cover image, copy, features, keywords and a link out
/// to the marketplace.
#[component]
pub fn ListingCard(props: ListingCardProps) -> Element {
    let mut toasts = use_toasts();
    let mut copied = use_signal(|| false);
    let listing = &props.listing;

    let draft = props.listing.clone();
    let copy_all = move |_: MouseEvent| {
        let draft = draft.clone();
        spawn(async move {
            match copy_to_clipboard(&draft).await {
                Ok(()) => {
                    toasts.success("Copied to clipboard!");
                    copied.set(true);
                    sleep(COPIED_FOR).await;
                    copied.set(false);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    toasts.error("Failed to copy text");
                }
            }
        });
    };

    rsx! {
        div {
            class: "bg-white rounded-xl shadow-lg overflow-hidden",
            div {
                class: "p-6",

                // Title + Price
                div {
                    class: "flex justify-between items-start mb-6",
                    h2 { class: "text-xl font-semibold text-gray-900", "{listing.title}" }
                    div {
                        class: "flex items-center gap-4",
                        span { class: "text-2xl font-bold text-indigo-600", "{listing.display_price()}" }
                        button {
                            class: "px-4 py-2 text-sm text-gray-600 hover:text-gray-900 transition-colors",
                            onclick: copy_all,
                            if copied() { "\u{2713} Copied!" } else { "Copy All" }
                        }
                    }
                }

                div {
                    class: "grid md:grid-cols-2 gap-8",

                    div {
                        if let Some(src) = listing.cover_image() {
                            div {
                                class: "aspect-square rounded-lg overflow-hidden bg-gray-100",
                                img {
                                    src: "{src}",
                                    alt: "{listing.title}",
                                    class: "w-full h-full object-cover"
                                }
                            }
                        }
                    }

                    div {
                        class: "space-y-6",

                        div {
                            h3 { class: "text-sm font-medium text-gray-500", "Description" }
                            p { class: "mt-2 text-gray-700", "{listing.description}" }
                        }

                        div {
                            h3 { class: "text-sm font-medium text-gray-500", "Category" }
                            p { class: "mt-2 text-gray-700", "{listing.category}" }
                        }

                        if !listing.features.is_empty() {
                            div {
                                h3 { class: "text-sm font-medium text-gray-500", "Key Features" }
                                ul {
                                    class: "mt-2 list-disc pl-5 space-y-1",
                                    for feature in listing.features.iter() {
                                        li { class: "text-gray-700", "{feature}" }
                                    }
                                }
                            }
                        }

                        if !listing.keywords.is_empty() {
                            div {
                                h3 { class: "text-sm font-medium text-gray-500", "Keywords" }
                                div {
                                    class: "mt-2 flex flex-wrap gap-2",
                                    for keyword in listing.keywords.iter() {
                                        span {
                                            class: "inline-flex items-center px-3 py-1 rounded-full text-sm font-medium bg-gray-100 text-gray-800",
                                            "{keyword}"
                                        }
                                    }
                                }
                            }
                        }

                        div {
                            class: "pt-4",
                            a {
                                href: MARKETPLACE_URL,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                class: "inline-flex items-center justify-center w-full px-6 py-3 bg-indigo-600 text-white rounded-lg hover:bg-indigo-700 transition-colors",
                                "Create Listing on Amazon \u{2197}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Write the whole draft, as pretty JSON, to the system clipboard.
async fn copy_to_clipboard(listing: &ListingDraft) -> anyhow::Result<()> {
    let script = clipboard_script(listing)?;
    document::eval(&script)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

fn clipboard_script(listing: &ListingDraft) -> serde_json::Result<String> {
    let text = serde_json::to_string_pretty(listing)?;
    // Encoding the text once more gives an escaped JS string literal
    let literal = serde_json::to_string(&text)?;
    Ok(format!(
        "await navigator.clipboard.writeText({}); return true;",
        literal
    ))
}
