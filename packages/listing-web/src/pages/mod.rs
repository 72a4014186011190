//! Application pages

mod capture;
mod listings;

pub use capture::*;
pub use listings::*;
