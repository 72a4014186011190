//! Results screen state machine.
//!
//! Every visit starts fresh in `AwaitingInput`. Arriving without a hand-off
//! redirects straight back to the capture screen and never touches a
//! generator. Otherwise the machine sits in `Loading` for the simulated delay,
//! asks for drafts and ends in `Loaded`.

use tracing::{info, warn};

use crate::machine::Machine;
use crate::types::{GenerateListingRequest, HandOff, ListingDraft};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsState {
    #[default]
    AwaitingInput,
    Loading,
    Loaded,
    /// Sent back to the capture screen; terminal for this visit
    Redirected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsEvent {
    /// The view was entered, with whatever hand-off was waiting for it
    Entered(Option<HandOff>),
    /// The loading delay ran out
    DelayElapsed,
    Generated(Vec<ListingDraft>),
    GenerationFailed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsCommand {
    RedirectToCapture,
    /// Start the loading delay, then feed back `DelayElapsed`
    ScheduleGeneration,
    /// Ask the generator for drafts
    Generate(GenerateListingRequest),
}

#[derive(Debug, Clone, Default)]
pub struct ResultsMachine {
    state: ResultsState,
    payload: Option<HandOff>,
    listings: Vec<ListingDraft>,
    error: Option<String>,
}

impl ResultsMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ResultsState {
        self.state
    }

    pub fn listings(&self) -> &[ListingDraft] {
        &self.listings
    }

    /// Why the last visit was sent back, if generation failed
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ResultsState::AwaitingInput | ResultsState::Loading)
    }
}

impl Machine for ResultsMachine {
    type Event = ResultsEvent;
    type Command = ResultsCommand;

    fn decide(&mut self, event: ResultsEvent) -> Option<ResultsCommand> {
        match (self.state, event) {
            (ResultsState::AwaitingInput, ResultsEvent::Entered(None)) => {
                info!("no hand-off on results view, redirecting to capture");
                self.state = ResultsState::Redirected;
                Some(ResultsCommand::RedirectToCapture)
            }
            (ResultsState::AwaitingInput, ResultsEvent::Entered(Some(handoff))) => {
                info!(source_type = handoff.source_type.as_str(), "loading listings");
                self.payload = Some(handoff);
                self.state = ResultsState::Loading;
                Some(ResultsCommand::ScheduleGeneration)
            }
            (ResultsState::Loading, ResultsEvent::DelayElapsed) => {
                // The payload is consumed here; a second elapse has nothing to generate from
                let handoff = self.payload.take()?;
                Some(ResultsCommand::Generate(GenerateListingRequest::from(&handoff)))
            }
            (ResultsState::Loading, ResultsEvent::Generated(listings)) => {
                info!(count = listings.len(), "listings loaded");
                self.listings = listings;
                self.state = ResultsState::Loaded;
                None
            }
            (ResultsState::Loading, ResultsEvent::GenerationFailed(message)) => {
                warn!(error = %message, "listing generation failed");
                self.error = Some(message);
                self.payload = None;
                self.state = ResultsState::Redirected;
                Some(ResultsCommand::RedirectToCapture)
            }
            _ => None,
        }
    }
}
