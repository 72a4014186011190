//! Test fixtures: candidate files, navigators and generators with side
//! channels the tests can inspect.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use listing_core::error::GeneratorResult;
use listing_core::{
    CandidateFile, DummyListingGenerator, GenerateListingRequest, GeneratorError, HandOff,
    ListingDraft, ListingGenerator, Navigator, Screen,
};

pub const MB: u64 = 1024 * 1024;

pub fn png(name: &str, megabytes: u64) -> CandidateFile {
    CandidateFile::new(name, "image/png", megabytes * MB).with_url(format!("blob:{}", name))
}

pub fn text_file(name: &str) -> CandidateFile {
    CandidateFile::new(name, "text/plain", 512)
}

/// Navigator that records every navigation.
#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<(Screen, Option<HandOff>)>>,
}

impl RecordingNavigator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn visits(&self) -> Vec<(Screen, Option<HandOff>)> {
        self.visits.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<(Screen, Option<HandOff>)> {
        self.visits.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, screen: Screen, handoff: Option<HandOff>) {
        self.visits.lock().unwrap().push((screen, handoff));
    }
}

/// Dummy generator that counts how often it is asked.
#[derive(Default)]
pub struct CountingGenerator {
    calls: AtomicUsize,
}

impl CountingGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ListingGenerator for CountingGenerator {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn generate(&self, request: &GenerateListingRequest) -> GeneratorResult<Vec<ListingDraft>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        DummyListingGenerator::new().generate(request).await
    }
}

/// Generator that always fails like an unreachable API.
pub struct FailingGenerator;

#[async_trait]
impl ListingGenerator for FailingGenerator {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn generate(&self, _request: &GenerateListingRequest) -> GeneratorResult<Vec<ListingDraft>> {
        Err(GeneratorError::Network("connection refused".into()))
    }
}
