//! Reusable UI components

mod listing_card;
mod loading;
mod navbar;
mod toast;

pub use listing_card::*;
pub use loading::*;
pub use navbar::*;
pub use toast::*;
