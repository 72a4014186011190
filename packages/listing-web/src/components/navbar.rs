//! Top navigation shared by both screens

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50",

            nav {
                class: "fixed top-0 inset-x-0 z-30 bg-white/90 backdrop-blur border-b border-gray-100",
                div {
                    class: "max-w-7xl mx-auto px-4 h-16 flex items-center justify-between",
                    Link {
                        to: Route::Capture {},
                        class: "text-xl font-bold text-indigo-600",
                        "Social Listing Studio"
                    }
                    span {
                        class: "text-sm text-gray-500",
                        "Posts in, listings out"
                    }
                }
            }

            Outlet::<Route> {}
        }
    }
}
