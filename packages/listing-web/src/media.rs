//! Reading uploaded files into validated candidates.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::html::FileEngine;
use listing_core::CandidateFile;

/// Inline `data:` URL for previewing bytes in an `img` tag.
pub fn data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// Turn every file the browser handed over into a candidate.
///
/// Only files of an accepted type that are not already known to be too
/// large are read into memory; the rest keep their name, type and size so
/// validation can report why they were skipped.
pub async fn read_candidates(engine: Arc<dyn FileEngine>) -> Vec<CandidateFile> {
    let mut candidates = Vec::new();

    for name in engine.files() {
        let reported = engine.file_size(&name).await;
        let precheck = CandidateFile::from_name(name.clone(), reported.unwrap_or(0));

        let bytes = if precheck.is_acceptable() {
            let bytes = engine.read_file(&name).await;
            if bytes.is_none() {
                tracing::warn!(file = %name, "could not read file contents");
            }
            bytes
        } else {
            None
        };

        let candidate = build_candidate(name, reported, bytes.as_deref());
        if let Some(reason) = candidate.rejection() {
            tracing::debug!(file = %candidate.name, media_type = %candidate.media_type, reason = ?reason, "skipping candidate");
        }
        candidates.push(candidate);
    }

    candidates
}

/// Size comes from the bytes when they were read, else from what the browser
/// reported. A file with neither has no provable size and is sized past the
/// limit so validation rejects it.
pub fn build_candidate(name: String, reported_size: Option<u64>, bytes: Option<&[u8]>) -> CandidateFile {
    match bytes {
        Some(bytes) => {
            let candidate = CandidateFile::from_name(name, bytes.len() as u64);
            let url = data_url(&candidate.media_type, bytes);
            candidate.with_url(url)
        }
        None => CandidateFile::from_name(name, reported_size.unwrap_or(u64::MAX)),
    }
}
