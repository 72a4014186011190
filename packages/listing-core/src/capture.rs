//! Capture screen state machine.
//!
//! ```text
//!            files ok             analyze              delay elapsed
//!   Idle ───────────────▶ FilesSelected ──────▶ Analyzing ──────────▶ Complete
//!     │  url typed                                ▲   │
//!     └─────────────▶ UrlEntered ─────────────────┘   └─ aborted: back to the prior state
//! ```
//!
//! Validation failures never move the machine; they come back as
//! [`CaptureCommand::Notify`] so the owner can show a notification.

use tracing::{debug, info, warn};

use crate::error::CaptureError;
use crate::machine::Machine;
use crate::types::{Category, ContentData, HandOff, ListingIncludes, SourceType, DEFAULT_IMAGES};
use crate::validation::{extract_host, require_url, validate_files, CandidateFile};

const URL_DESCRIPTION: &str = "Discover this amazing product that is taking social media by storm. Featured in multiple viral posts.";
const URL_TAGS: [&str; 3] = ["viral", "trending", "musthave"];
const URL_PRICE: f64 = 149.99;

const FILES_TITLE: &str = "Amazing Product from Social Media";
const FILES_DESCRIPTION: &str = "This incredible product was featured in a viral social media post. Perfect for modern lifestyle enthusiasts.";
const FILES_TAGS: [&str; 3] = ["trending", "viral", "lifestyle"];
const FILES_PRICE: f64 = 99.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    #[default]
    Idle,
    FilesSelected,
    UrlEntered,
    Analyzing,
    Complete,
}

/// Which input tab the analyze request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    #[default]
    Url,
    Files,
}

impl CaptureMode {
    pub fn label(&self) -> &'static str {
        match self {
            CaptureMode::Url => "URL",
            CaptureMode::Files => "Upload",
        }
    }

    pub fn variants() -> &'static [CaptureMode] {
        &[CaptureMode::Url, CaptureMode::Files]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureEvent {
    UrlChanged(String),
    /// Files from a drop or the picker; replaces the working set when valid
    FilesProvided(Vec<CandidateFile>),
    FileRemoved(usize),
    CategorySelected(Option<Category>),
    IncludesChanged(ListingIncludes),
    AnalyzeRequested(CaptureMode),
    /// The simulated analysis delay ran out
    AnalysisElapsed,
    /// The pending analysis was abandoned (timer cancelled, owner torn down)
    AnalysisAborted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CaptureCommand {
    /// Surface an error to the user; state is unchanged
    Notify(CaptureError),
    /// Start the analysis delay, then feed back `AnalysisElapsed`
    ScheduleAnalysis,
    /// Hand the captured content to the results screen
    HandOff(HandOff),
}

#[derive(Debug, Clone, Default)]
pub struct CaptureMachine {
    state: CaptureState,
    url: String,
    files: Vec<CandidateFile>,
    category: Option<Category>,
    includes: ListingIncludes,
    pending: Option<HandOff>,
    /// State to fall back to if a pending analysis is aborted
    resume: CaptureState,
}

impl CaptureMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CaptureState {
        self.state
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn files(&self) -> &[CandidateFile] {
        &self.files
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn includes(&self) -> ListingIncludes {
        self.includes
    }

    pub fn is_analyzing(&self) -> bool {
        self.state == CaptureState::Analyzing
    }

    fn is_locked(&self) -> bool {
        matches!(self.state, CaptureState::Analyzing | CaptureState::Complete)
    }

    /// Input state implied by what is currently filled in.
    fn resting_state(&self) -> CaptureState {
        if !self.url.trim().is_empty() {
            CaptureState::UrlEntered
        } else if !self.files.is_empty() {
            CaptureState::FilesSelected
        } else {
            CaptureState::Idle
        }
    }

    fn begin_analysis(&mut self, mode: CaptureMode) -> Result<(), CaptureError> {
        let handoff = match mode {
            CaptureMode::Url => {
                let url = require_url(&self.url)?.to_string();
                HandOff {
                    content_data: content_for_url(&url)?,
                    source_type: SourceType::Url,
                    source: Some(url),
                    category: self.category,
                    includes: self.includes,
                }
            }
            CaptureMode::Files => {
                if self.files.is_empty() {
                    return Err(CaptureError::NoValidFiles);
                }
                HandOff {
                    content_data: content_for_files(&self.files),
                    source_type: SourceType::Files,
                    source: None,
                    category: self.category,
                    includes: self.includes,
                }
            }
        };

        self.resume = self.state;
        self.pending = Some(handoff);
        self.state = CaptureState::Analyzing;
        Ok(())
    }
}

impl Machine for CaptureMachine {
    type Event = CaptureEvent;
    type Command = CaptureCommand;

    fn decide(&mut self, event: CaptureEvent) -> Option<CaptureCommand> {
        match event {
            CaptureEvent::UrlChanged(url) => {
                if self.is_locked() {
                    return None;
                }
                self.url = url;
                self.state = self.resting_state();
                None
            }
            CaptureEvent::FilesProvided(candidates) => {
                if self.is_locked() {
                    return None;
                }
                match validate_files(candidates) {
                    Ok(selection) => {
                        debug!(
                            accepted = selection.accepted.len(),
                            rejected = selection.rejected.len(),
                            "files selected"
                        );
                        self.files = selection.accepted;
                        self.state = CaptureState::FilesSelected;
                        None
                    }
                    Err(e) => Some(CaptureCommand::Notify(e)),
                }
            }
            CaptureEvent::FileRemoved(index) => {
                if self.is_locked() || index >= self.files.len() {
                    return None;
                }
                self.files.remove(index);
                if self.state == CaptureState::FilesSelected && self.files.is_empty() {
                    self.state = self.resting_state();
                }
                None
            }
            CaptureEvent::CategorySelected(category) => {
                self.category = category;
                None
            }
            CaptureEvent::IncludesChanged(includes) => {
                self.includes = includes;
                None
            }
            CaptureEvent::AnalyzeRequested(mode) => match self.state {
                CaptureState::Analyzing | CaptureState::Complete => {
                    debug!(state = ?self.state, "ignoring analyze request");
                    None
                }
                _ => match self.begin_analysis(mode) {
                    Ok(()) => {
                        info!(mode = ?mode, "analysis started");
                        Some(CaptureCommand::ScheduleAnalysis)
                    }
                    Err(e) => {
                        warn!(mode = ?mode, error = ?e, "analyze rejected");
                        Some(CaptureCommand::Notify(e))
                    }
                },
            },
            CaptureEvent::AnalysisElapsed => {
                if self.state != CaptureState::Analyzing {
                    return None;
                }
                let handoff = self.pending.take()?;
                self.state = CaptureState::Complete;
                info!(source_type = handoff.source_type.as_str(), "analysis complete");
                Some(CaptureCommand::HandOff(handoff))
            }
            CaptureEvent::AnalysisAborted => {
                if self.state == CaptureState::Analyzing {
                    self.pending = None;
                    self.state = self.resume;
                }
                None
            }
        }
    }
}

/// Content fabricated for a submitted post URL.
pub fn content_for_url(url: &str) -> Result<ContentData, CaptureError> {
    let host = extract_host(url)?;
    Ok(ContentData {
        title: Some(format!("Trending Product from {}", host)),
        description: Some(URL_DESCRIPTION.to_string()),
        images: DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect(),
        tags: URL_TAGS.iter().map(|s| s.to_string()).collect(),
        price: Some(URL_PRICE),
    })
}

/// Content fabricated for a validated upload set. Images reference only the
/// files passed in.
pub fn content_for_files(files: &[CandidateFile]) -> ContentData {
    ContentData {
        title: Some(FILES_TITLE.to_string()),
        description: Some(FILES_DESCRIPTION.to_string()),
        images: files.iter().map(CandidateFile::display_url).collect(),
        tags: FILES_TAGS.iter().map(|s| s.to_string()).collect(),
        price: Some(FILES_PRICE),
    }
}
