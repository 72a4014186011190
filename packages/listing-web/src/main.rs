//! Social Listing Studio - Dioxus Fullstack Web Application
//!
//! Paste a social-media post URL or drop in photos and videos, and get a
//! handful of marketplace listing drafts back.
//!
//! ## Running
//!
//! Development (with hot reload):
//! ```bash
//! npx tailwindcss -i ./input.css -o ./assets/tailwind.css --watch
//! dx serve --features web,server
//! ```
//!
//! Production build:
//! ```bash
//! dx build --release --features web,server
//! ```
//!
//! Generator selection and delays come from the environment, see
//! [`listing_core::Config`].

#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
mod generation;
mod media;
mod pages;
mod routes;
mod server_fns;
mod state;
mod timing;

fn main() {
    #[cfg(feature = "server")]
    if let Err(e) = server_fns::init() {
        eprintln!("Failed to start: {:#}", e);
        std::process::exit(1);
    }

    // In fullstack mode, this handles both server and client
    dioxus::launch(app::App);
}
