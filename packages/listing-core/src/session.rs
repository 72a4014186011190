//! Tokio hosts for the capture and results machines.
//!
//! A session owns its machine and at most one pending [`ScopedTimer`].
//! Dropping the session (the view going away) cancels the timer, so a
//! delayed continuation never updates a screen that is no longer there.
//! All command handling goes through [`crate::driver`].

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::capture::{CaptureEvent, CaptureMachine, CaptureMode, CaptureState};
use crate::config::PipelineTimings;
use crate::driver::{self, Dispatched, MachineHandle};
use crate::error::CaptureError;
use crate::generator::ListingGenerator;
use crate::handoff::{HandOffSlot, Navigator};
use crate::results::{ResultsMachine, ResultsState};
use crate::timer::ScopedTimer;
use crate::types::{Category, GenerateListingRequest, HandOff, ListingDraft, ListingIncludes};
use crate::validation::CandidateFile;

/// Navigator that can be moved into a tokio task.
pub type SharedNavigator = Arc<dyn Navigator + Send + Sync>;

// ============================================================================
// Capture
// ============================================================================

pub struct CaptureSession {
    machine: Arc<Mutex<CaptureMachine>>,
    timings: PipelineTimings,
    navigator: SharedNavigator,
    timer: Option<ScopedTimer>,
}

impl CaptureSession {
    pub fn new(timings: PipelineTimings, navigator: SharedNavigator) -> Self {
        Self {
            machine: Arc::new(Mutex::new(CaptureMachine::new())),
            timings,
            navigator,
            timer: None,
        }
    }

    pub fn state(&self) -> CaptureState {
        self.machine.update(|m| m.state())
    }

    /// Snapshot of the accepted files.
    pub fn files(&self) -> Vec<CandidateFile> {
        self.machine.update(|m| m.files().to_vec())
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.dispatch(CaptureEvent::UrlChanged(url.into())).ok();
    }

    /// Offer a batch of files. Fails only when none of them is acceptable.
    pub fn select_files(&mut self, files: Vec<CandidateFile>) -> Result<(), CaptureError> {
        self.dispatch(CaptureEvent::FilesProvided(files))
    }

    pub fn remove_file(&mut self, index: usize) {
        self.dispatch(CaptureEvent::FileRemoved(index)).ok();
    }

    pub fn select_category(&mut self, category: Option<Category>) {
        self.dispatch(CaptureEvent::CategorySelected(category)).ok();
    }

    pub fn set_includes(&mut self, includes: ListingIncludes) {
        self.dispatch(CaptureEvent::IncludesChanged(includes)).ok();
    }

    /// Start the simulated analysis. The hand-off happens after the analyze
    /// delay, unless the session is dropped or cancelled first. Fails with
    /// `Busy` while analyzing and after the hand-off.
    pub fn analyze(&mut self, mode: CaptureMode) -> Result<(), CaptureError> {
        let dispatched = driver::request_analysis(&self.machine, &*self.navigator, mode)?;
        self.follow(dispatched);
        Ok(())
    }

    /// Drop-zone behaviour: a valid batch goes straight into analysis.
    pub fn select_files_and_analyze(&mut self, files: Vec<CandidateFile>) -> Result<(), CaptureError> {
        let dispatched = driver::offer_files_and_analyze(&self.machine, &*self.navigator, files)?;
        self.follow(dispatched);
        Ok(())
    }

    /// Abandon a pending analysis and return to the previous input state.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
            self.machine.decide(CaptureEvent::AnalysisAborted);
            debug!("analysis cancelled");
        }
    }

    fn dispatch(&mut self, event: CaptureEvent) -> Result<(), CaptureError> {
        let dispatched = driver::dispatch_capture(&self.machine, &*self.navigator, event)?;
        self.follow(dispatched);
        Ok(())
    }

    fn follow(&mut self, dispatched: Dispatched) {
        if dispatched == Dispatched::AnalysisPending {
            let machine = self.machine.clone();
            let navigator = self.navigator.clone();
            let delay = self.timings.analyze_delay;

            self.timer = Some(ScopedTimer::spawn(async move {
                driver::finish_analysis(&machine, &*navigator, tokio::time::sleep(delay)).await;
            }));
        }
    }
}

// ============================================================================
// Results
// ============================================================================

pub struct ResultsSession {
    machine: Arc<Mutex<ResultsMachine>>,
    _timer: Option<ScopedTimer>,
}

impl ResultsSession {
    /// Enter the results view with whatever hand-off was waiting.
    ///
    /// With no hand-off the navigator is sent back to the capture screen
    /// immediately and the generator is never called.
    pub fn enter(
        handoff: Option<HandOff>,
        generator: Arc<dyn ListingGenerator>,
        timings: PipelineTimings,
        navigator: SharedNavigator,
    ) -> Self {
        let machine = Arc::new(Mutex::new(ResultsMachine::new()));

        let timer = driver::enter_results(&machine, &*navigator, handoff).then(|| {
            let machine = machine.clone();
            ScopedTimer::spawn(async move {
                let generate = move |request: GenerateListingRequest| async move {
                    generator.generate(&request).await.map_err(|e| e.to_string())
                };
                driver::finish_results(
                    &machine,
                    &*navigator,
                    tokio::time::sleep(timings.results_delay),
                    generate,
                )
                .await;
            })
        });

        Self {
            machine,
            _timer: timer,
        }
    }

    /// Enter using the payload waiting in a slot, which is consumed.
    pub fn enter_from(
        slot: &HandOffSlot,
        generator: Arc<dyn ListingGenerator>,
        timings: PipelineTimings,
    ) -> Self {
        Self::enter(slot.take(), generator, timings, Arc::new(slot.clone()))
    }

    pub fn state(&self) -> ResultsState {
        self.machine.update(|m| m.state())
    }

    pub fn listings(&self) -> Vec<ListingDraft> {
        self.machine.update(|m| m.listings().to_vec())
    }

    pub fn error(&self) -> Option<String> {
        self.machine.update(|m| m.error().map(str::to_string))
    }
}
