//! Capture page: paste a post URL or upload media, then analyze it

use std::sync::Arc;

use dioxus::html::{FileEngine, HasFileData};
use dioxus::prelude::*;
use listing_core::{
    dispatch_capture, finish_analysis, offer_files_and_analyze, request_analysis, CandidateFile,
    CaptureError, CaptureEvent, CaptureMachine, CaptureMode, Category, Dispatched,
    ListingIncludes,
};

use crate::bridge::{use_route_navigator, SignalHandle};
use crate::components::LoadingSpinner;
use crate::media::read_candidates;
use crate::state::{use_settings, use_toasts};
use crate::timing::sleep;

/// Capture page - the landing screen
#[component]
pub fn Capture() -> Element {
    let settings = use_settings();
    let mut toasts = use_toasts();
    let navigator = use_route_navigator();

    let machine = use_signal(CaptureMachine::new);
    let handle = SignalHandle(machine);
    let mut mode = use_signal(|| CaptureMode::Url);
    let mut drag_active = use_signal(|| false);
    let mut reading = use_signal(|| false);

    // Carry out whatever the driver left for the page to do
    let follow = use_callback({
        let navigator = navigator.clone();
        move |outcome: Result<Dispatched, CaptureError>| match outcome {
            Ok(Dispatched::Done) => {}
            Ok(Dispatched::AnalysisPending) => {
                let delay = settings.peek().timings().analyze_delay;
                let navigator = navigator.clone();

                // Owned by this page: navigating away drops the pending hand-off
                spawn(async move {
                    finish_analysis(&handle, &navigator, sleep(delay)).await;
                });
            }
            // The analyze buttons are disabled while busy
            Err(CaptureError::Busy) => {}
            Err(e) => toasts.error(e.to_string()),
        }
    });

    let dispatch = use_callback({
        let navigator = navigator.clone();
        move |event: CaptureEvent| follow.call(dispatch_capture(&handle, &navigator, event))
    });

    let analyze = use_callback({
        let navigator = navigator.clone();
        move |requested: CaptureMode| follow.call(request_analysis(&handle, &navigator, requested))
    });

    let analyze_files = use_callback(move |files: Vec<CandidateFile>| {
        follow.call(offer_files_and_analyze(&handle, &navigator, files))
    });

    let mut offer_files = move |engine: Arc<dyn FileEngine>, and_analyze: bool| {
        reading.set(true);
        spawn(async move {
            let candidates = read_candidates(engine).await;
            reading.set(false);

            if and_analyze {
                analyze_files.call(candidates);
            } else {
                dispatch.call(CaptureEvent::FilesProvided(candidates));
            }
        });
    };

    let analyzing = machine.read().is_analyzing();
    let url = machine.read().url().to_string();
    let files = machine.read().files().to_vec();
    let category = machine.read().category();
    let includes = machine.read().includes();

    rsx! {
        div {
            class: "pt-24 pb-12 px-4",

            // Header
            div {
                class: "max-w-4xl mx-auto text-center mb-10",
                h1 {
                    class: "text-4xl font-bold text-gray-900 mb-4",
                    "Transform Your Social Media Posts into Listings"
                }
                p {
                    class: "text-lg text-gray-600",
                    "Paste a post link or upload its photos and videos to draft marketplace listings in seconds."
                }
            }

            div {
                class: "max-w-4xl mx-auto p-6 bg-white rounded-2xl shadow-lg",

                // Tabs
                div {
                    class: "border-b border-gray-200",
                    nav {
                        class: "flex gap-8",
                        for tab in CaptureMode::variants().iter().copied() {
                            button {
                                key: "{tab.label()}",
                                class: "px-4 py-3 border-b-2 {tab_classes(mode() == tab)}",
                                onclick: move |_| mode.set(tab),
                                "{tab.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "mt-8",

                    match mode() {
                        CaptureMode::Url => rsx! {
                            div {
                                class: "space-y-4",
                                p { class: "text-gray-600", "Enter the URL of your social media post:" }
                                div {
                                    class: "flex gap-4",
                                    input {
                                        r#type: "url",
                                        value: "{url}",
                                        placeholder: "https://instagram.com/p/...",
                                        disabled: analyzing,
                                        class: "flex-1 px-4 py-3 border-2 border-gray-200 rounded-xl focus:border-indigo-500 outline-none",
                                        oninput: move |e| {
                                            dispatch.call(CaptureEvent::UrlChanged(e.value()));
                                        }
                                    }
                                    button {
                                        class: "px-6 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 disabled:opacity-50 whitespace-nowrap",
                                        disabled: analyzing || url.trim().is_empty(),
                                        onclick: move |_| analyze.call(CaptureMode::Url),
                                        if analyzing { "Analyzing..." } else { "Analyze URL" }
                                    }
                                }
                            }
                        },
                        CaptureMode::Files => rsx! {
                            div {
                                // Drop zone
                                div {
                                    class: "border-2 border-dashed rounded-xl p-8 {drop_zone_classes(drag_active())}",
                                    ondragover: move |evt| {
                                        evt.prevent_default();
                                        drag_active.set(true);
                                    },
                                    ondragleave: move |_| drag_active.set(false),
                                    ondrop: move |evt| {
                                        evt.prevent_default();
                                        drag_active.set(false);
                                        if !accepts_files(analyzing, reading()) {
                                            return;
                                        }
                                        if let Some(engine) = evt.files() {
                                            offer_files(engine, true);
                                        }
                                    },

                                    div {
                                        class: "text-center",
                                        p {
                                            class: "text-gray-600",
                                            "Drag and drop your files here, or "
                                            label {
                                                class: "text-indigo-600 hover:text-indigo-500 font-medium cursor-pointer",
                                                "browse"
                                                input {
                                                    r#type: "file",
                                                    multiple: true,
                                                    accept: "image/*,video/*",
                                                    class: "hidden",
                                                    disabled: !accepts_files(analyzing, reading()),
                                                    onchange: move |evt| {
                                                        if !accepts_files(analyzing, reading()) {
                                                            return;
                                                        }
                                                        if let Some(engine) = evt.files() {
                                                            offer_files(engine, false);
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                        p { class: "mt-2 text-sm text-gray-500", "Supports images and videos up to 50MB" }
                                        if reading() {
                                            p { class: "mt-2 text-sm text-indigo-500", "Reading files..." }
                                        }
                                    }
                                }

                                // Selected files
                                if !files.is_empty() {
                                    div {
                                        class: "mt-6 space-y-4",
                                        h3 { class: "font-semibold text-gray-700", "Selected Files:" }
                                        div {
                                            class: "grid gap-4 grid-cols-1 sm:grid-cols-2",
                                            for (index, file) in files.iter().enumerate() {
                                                FileRow {
                                                    key: "{file.name}-{index}",
                                                    file: file.clone(),
                                                    locked: analyzing,
                                                    on_remove: move |_| {
                                                        dispatch.call(CaptureEvent::FileRemoved(index));
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }

                                div {
                                    class: "mt-6",
                                    button {
                                        class: "w-full px-6 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 disabled:opacity-50",
                                        disabled: analyzing || files.is_empty(),
                                        onclick: move |_| analyze.call(CaptureMode::Files),
                                        if analyzing { "Analyzing..." } else { "Analyze Files" }
                                    }
                                }
                            }
                        },
                    }
                }

                ListingOptions {
                    category,
                    includes,
                    on_category: move |c| {
                        dispatch.call(CaptureEvent::CategorySelected(c));
                    },
                    on_includes: move |i| {
                        dispatch.call(CaptureEvent::IncludesChanged(i));
                    }
                }

                if analyzing {
                    div {
                        class: "mt-8",
                        LoadingSpinner { label: "Analyzing content..." }
                    }
                }
            }
        }
    }
}

/// New files are taken only when nothing is analyzing and no earlier batch
/// is still being read.
fn accepts_files(analyzing: bool, reading: bool) -> bool {
    !analyzing && !reading
}

fn tab_classes(active: bool) -> &'static str {
    if active {
        "border-indigo-500 text-indigo-600"
    } else {
        "border-transparent text-gray-500 hover:text-gray-700 hover:border-gray-300"
    }
}

fn drop_zone_classes(active: bool) -> &'static str {
    if active {
        "border-indigo-500 bg-indigo-50"
    } else {
        "border-gray-300"
    }
}

#[component]
fn FileRow(file: CandidateFile, locked: bool, on_remove: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between p-3 bg-gray-50 rounded-lg",
            div {
                class: "flex items-center space-x-3",
                if file.media_type.starts_with("image/") {
                    img {
                        src: "{file.display_url()}",
                        alt: "{file.name}",
                        class: "w-12 h-12 object-cover rounded-md"
                    }
                } else {
                    div {
                        class: "w-12 h-12 rounded-md bg-gray-200 flex items-center justify-center text-gray-500",
                        "\u{25B6}"
                    }
                }
                div {
                    p { class: "text-sm font-medium text-gray-700", "{file.name}" }
                    p { class: "text-sm text-gray-500", "{file.display_size()}" }
                }
            }
            button {
                class: "text-red-500 hover:text-red-700 disabled:opacity-50",
                disabled: locked,
                onclick: move |_| on_remove.call(()),
                "Remove"
            }
        }
    }
}

/// Category picker and which sections the drafts should carry
#[component]
fn ListingOptions(
    #[props(!optional)] category: Option<Category>,
    includes: ListingIncludes,
    on_category: EventHandler<Option<Category>>,
    on_includes: EventHandler<ListingIncludes>,
) -> Element {
    rsx! {
        div {
            class: "mt-8 pt-6 border-t border-gray-100 grid grid-cols-1 md:grid-cols-2 gap-6",

            label {
                class: "block",
                span { class: "text-gray-700 text-sm font-medium", "Category" }
                select {
                    class: "mt-1 block w-full rounded-lg border-gray-300 shadow-sm",
                    value: category.map(|c| c.value()).unwrap_or_default(),
                    onchange: move |e| on_category.call(Category::from_value(&e.value())),
                    option { value: "", "Select a category" }
                    for c in Category::variants().iter() {
                        option { key: "{c.value()}", value: c.value(), "{c.label()}" }
                    }
                }
            }

            div {
                span { class: "text-gray-700 text-sm font-medium", "Include in listing" }
                div {
                    class: "mt-2 space-y-2",
                    for (section, enabled) in includes.entries() {
                        label {
                            key: "{section}",
                            class: "flex items-center space-x-2",
                            input {
                                r#type: "checkbox",
                                checked: enabled,
                                onchange: move |_| {
                                    let mut next = includes;
                                    next.toggle(section);
                                    on_includes.call(next);
                                }
                            }
                            span { class: "text-sm text-gray-600", "{section}" }
                        }
                    }
                }
            }
        }
    }
}
