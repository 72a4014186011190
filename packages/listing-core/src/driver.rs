//! Command handling shared by every host of the two machines.
//!
//! The machines only decide; something still has to wait out the delays,
//! call the generator and switch screens. These functions are that
//! something. The tokio sessions in [`crate::session`] and the web pages
//! both call them, passing in their own machine storage, navigator and
//! sleep future.

use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info};

use crate::capture::{CaptureCommand, CaptureEvent, CaptureMachine, CaptureMode, CaptureState};
use crate::error::CaptureError;
use crate::handoff::{Navigator, Screen};
use crate::machine::Machine;
use crate::results::{ResultsCommand, ResultsEvent, ResultsMachine};
use crate::types::{GenerateListingRequest, HandOff, ListingDraft};
use crate::validation::CandidateFile;

/// Shared, mutable access to a machine.
///
/// Implemented for `Arc<Mutex<M>>` here; UI hosts wrap their own reactive
/// cells.
pub trait MachineHandle<M> {
    fn update<R>(&self, f: impl FnOnce(&mut M) -> R) -> R;

    fn decide(&self, event: M::Event) -> Option<M::Command>
    where
        M: Machine,
    {
        self.update(|machine| machine.decide(event))
    }
}

impl<M> MachineHandle<M> for Arc<Mutex<M>> {
    fn update<R>(&self, f: impl FnOnce(&mut M) -> R) -> R {
        let mut guard = self.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }
}

/// What the host has to do after an event was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Dispatched {
    Done,
    /// An analysis was started: run [`finish_analysis`] in a task owned by
    /// the capture view.
    AnalysisPending,
}

// ============================================================================
// Capture
// ============================================================================

/// Feed one event to the capture machine and carry out its command.
pub fn dispatch_capture<H, N>(
    machine: &H,
    navigator: &N,
    event: CaptureEvent,
) -> Result<Dispatched, CaptureError>
where
    H: MachineHandle<CaptureMachine>,
    N: Navigator + ?Sized,
{
    match machine.decide(event) {
        None => Ok(Dispatched::Done),
        Some(CaptureCommand::Notify(e)) => Err(e),
        Some(CaptureCommand::ScheduleAnalysis) => Ok(Dispatched::AnalysisPending),
        Some(CaptureCommand::HandOff(handoff)) => {
            navigator.navigate(Screen::Listings, Some(handoff));
            Ok(Dispatched::Done)
        }
    }
}

/// Start an analysis. A capture that is already analyzing or has already
/// handed off reports `Busy` instead of silently doing nothing.
pub fn request_analysis<H, N>(
    machine: &H,
    navigator: &N,
    mode: CaptureMode,
) -> Result<Dispatched, CaptureError>
where
    H: MachineHandle<CaptureMachine>,
    N: Navigator + ?Sized,
{
    let state = machine.update(|m| m.state());
    if matches!(state, CaptureState::Analyzing | CaptureState::Complete) {
        debug!(state = ?state, "analyze rejected, capture is busy");
        return Err(CaptureError::Busy);
    }
    dispatch_capture(machine, navigator, CaptureEvent::AnalyzeRequested(mode))
}

/// Drop-zone behaviour: a valid batch goes straight into analysis.
pub fn offer_files_and_analyze<H, N>(
    machine: &H,
    navigator: &N,
    files: Vec<CandidateFile>,
) -> Result<Dispatched, CaptureError>
where
    H: MachineHandle<CaptureMachine>,
    N: Navigator + ?Sized,
{
    dispatch_capture(machine, navigator, CaptureEvent::FilesProvided(files))?;
    request_analysis(machine, navigator, CaptureMode::Files)
}

/// Wait out the analyze delay, then hand the content to the results screen.
pub async fn finish_analysis<H, N, S>(machine: &H, navigator: &N, delay: S)
where
    H: MachineHandle<CaptureMachine>,
    N: Navigator + ?Sized,
    S: Future<Output = ()>,
{
    delay.await;
    if let Some(CaptureCommand::HandOff(handoff)) = machine.decide(CaptureEvent::AnalysisElapsed) {
        navigator.navigate(Screen::Listings, Some(handoff));
    }
}

// ============================================================================
// Results
// ============================================================================

/// Enter the results view. Returns true when generation is pending and
/// [`finish_results`] should be run; without a hand-off the navigator is
/// sent back to capture straight away.
pub fn enter_results<H, N>(machine: &H, navigator: &N, handoff: Option<HandOff>) -> bool
where
    H: MachineHandle<ResultsMachine>,
    N: Navigator + ?Sized,
{
    match machine.decide(ResultsEvent::Entered(handoff)) {
        Some(ResultsCommand::RedirectToCapture) => {
            navigator.navigate(Screen::Capture, None);
            false
        }
        Some(ResultsCommand::ScheduleGeneration) => true,
        _ => false,
    }
}

/// Wait out the results delay, generate, and either show the drafts or
/// return to capture on failure.
pub async fn finish_results<H, N, S, G, Fut>(machine: &H, navigator: &N, delay: S, generate: G)
where
    H: MachineHandle<ResultsMachine>,
    N: Navigator + ?Sized,
    S: Future<Output = ()>,
    G: FnOnce(GenerateListingRequest) -> Fut,
    Fut: Future<Output = Result<Vec<ListingDraft>, String>>,
{
    delay.await;

    let Some(ResultsCommand::Generate(request)) = machine.decide(ResultsEvent::DelayElapsed) else {
        return;
    };

    info!(source_type = request.source_type.as_str(), "generating listings");
    let event = match generate(request).await {
        Ok(listings) => ResultsEvent::Generated(listings),
        Err(message) => ResultsEvent::GenerationFailed(message),
    };

    if let Some(ResultsCommand::RedirectToCapture) = machine.decide(event) {
        navigator.navigate(Screen::Capture, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handoff::HandOffSlot;
    use crate::results::ResultsState;
    use crate::types::{ContentData, ListingIncludes, SourceType};

    fn capture() -> Arc<Mutex<CaptureMachine>> {
        Arc::new(Mutex::new(CaptureMachine::new()))
    }

    fn handoff() -> HandOff {
        HandOff {
            content_data: ContentData::default(),
            source_type: SourceType::Files,
            source: None,
            category: None,
            includes: ListingIncludes::default(),
        }
    }

    #[test]
    fn analyze_schedules_without_navigating() {
        let machine = capture();
        let slot = HandOffSlot::default();

        let _ = dispatch_capture(&machine, &slot, CaptureEvent::UrlChanged("https://example.com/p".into()))
            .unwrap();
        let dispatched = request_analysis(&machine, &slot, CaptureMode::Url).unwrap();

        assert_eq!(dispatched, Dispatched::AnalysisPending);
        assert!(!slot.is_pending());
    }

    #[test]
    fn analyze_is_busy_once_complete() {
        let machine = capture();
        let slot = HandOffSlot::default();
        let _ = dispatch_capture(&machine, &slot, CaptureEvent::UrlChanged("https://example.com/p".into()))
            .unwrap();
        let _ = request_analysis(&machine, &slot, CaptureMode::Url).unwrap();
        let _ = dispatch_capture(&machine, &slot, CaptureEvent::AnalysisElapsed).unwrap();
        assert_eq!(machine.update(|m| m.state()), CaptureState::Complete);

        assert_eq!(
            request_analysis(&machine, &slot, CaptureMode::Url),
            Err(CaptureError::Busy)
        );
    }

    #[tokio::test]
    async fn finish_results_redirects_on_failure() {
        let machine = Arc::new(Mutex::new(ResultsMachine::new()));
        let slot = HandOffSlot::default();

        assert!(enter_results(&machine, &slot, Some(handoff())));
        finish_results(&machine, &slot, std::future::ready(()), |_| async {
            Err("boom".to_string())
        })
        .await;

        assert_eq!(machine.update(|m| m.state()), ResultsState::Redirected);
        assert_eq!(slot.current_screen(), Screen::Capture);
    }
}
