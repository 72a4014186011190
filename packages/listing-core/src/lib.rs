//! Content capture to listing draft pipeline
//!
//! Turns a social-media post (a URL or a batch of uploaded media files) into
//! a handful of e-commerce listing drafts.
//!
//! The pipeline has two screens:
//!
//! 1. **Capture** - the [`CaptureMachine`] holds the URL text and the
//!    validated file set, and on "analyze" builds the [`ContentData`] that is
//!    handed off after a short simulated delay.
//! 2. **Results** - the [`ResultsMachine`] receives the [`HandOff`], waits a
//!    second simulated delay and asks a [`ListingGenerator`] for 2-4
//!    [`ListingDraft`]s.
//!
//! The machines are pure: they interpret events and return at most one
//! command, with no IO or timers inside. The [`driver`] functions carry out
//! those commands for any host; the [`session`] module hosts them on tokio
//! with [`ScopedTimer`]s whose continuations die with their owner.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use listing_core::{CaptureMode, CaptureSession, HandOffSlot, PipelineTimings};
//!
//! let slot = HandOffSlot::default();
//! let mut capture = CaptureSession::new(PipelineTimings::default(), Arc::new(slot.clone()));
//! capture.set_url("https://example.com/post/1");
//! capture.analyze(CaptureMode::Url)?;
//! // ...1.5s later the slot holds the hand-off for the results screen
//! ```

pub mod capture;
pub mod config;
pub mod driver;
pub mod error;
pub mod generator;
pub mod handoff;
pub mod machine;
pub mod results;
pub mod session;
pub mod timer;
pub mod types;
pub mod validation;

pub use capture::{CaptureCommand, CaptureEvent, CaptureMachine, CaptureMode, CaptureState};
pub use config::{Config, GeneratorConfig, PipelineTimings};
pub use driver::{
    dispatch_capture, enter_results, finish_analysis, finish_results, offer_files_and_analyze,
    request_analysis, Dispatched, MachineHandle,
};
pub use error::{CaptureError, GeneratorError, GeneratorResult};
pub use generator::{
    build_generator, generate_dummy_listing, generate_dummy_listings, DummyListingGenerator,
    GeneratorStrategy, ListingGenerator,
};
#[cfg(feature = "api")]
pub use generator::ApiListingGenerator;
pub use handoff::{HandOffSlot, Navigator, Screen};
pub use machine::Machine;
pub use results::{ResultsCommand, ResultsEvent, ResultsMachine, ResultsState};
pub use session::{CaptureSession, ResultsSession, SharedNavigator};
pub use timer::ScopedTimer;
pub use types::*;
pub use validation::{validate_files, CandidateFile, FileSelection, MediaKind, RejectReason};
