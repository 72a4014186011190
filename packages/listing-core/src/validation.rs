//! Upload and URL validation for the capture screen.

use tracing::debug;
use url::Url;

use crate::error::CaptureError;

/// Largest accepted upload (50 MiB).
pub const MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// A file offered by drag-drop or the file picker, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    /// Displayable location of the file contents (object or data URL), if read
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    UnsupportedType,
    TooLarge,
}

impl CandidateFile {
    pub fn new(name: impl Into<String>, media_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            media_type: media_type.into(),
            size,
            url: None,
        }
    }

    /// Build a candidate whose media type is guessed from the file extension.
    ///
    /// Browsers don't always expose a type through the file engine, so the
    /// name is the fallback source of truth.
    pub fn from_name(name: impl Into<String>, size: u64) -> Self {
        let name = name.into();
        let media_type = mime_guess::from_path(&name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Self::new(name, media_type, size)
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn media_kind(&self) -> Option<MediaKind> {
        if self.media_type.starts_with("image/") {
            Some(MediaKind::Image)
        } else if self.media_type.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Why this file would be rejected, or `None` if it is acceptable.
    pub fn rejection(&self) -> Option<RejectReason> {
        if self.media_kind().is_none() {
            Some(RejectReason::UnsupportedType)
        } else if self.size > MAX_FILE_SIZE {
            Some(RejectReason::TooLarge)
        } else {
            None
        }
    }

    pub fn is_acceptable(&self) -> bool {
        self.rejection().is_none()
    }

    /// What the content data should reference for this file.
    pub fn display_url(&self) -> String {
        self.url.clone().unwrap_or_else(|| self.name.clone())
    }

    /// Human readable size, e.g. `10.0 MB`.
    pub fn display_size(&self) -> String {
        format!("{:.1} MB", self.size as f64 / (1024.0 * 1024.0))
    }
}

/// Outcome of validating one submitted batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSelection {
    pub accepted: Vec<CandidateFile>,
    pub rejected: Vec<(CandidateFile, RejectReason)>,
}

/// Split a submitted batch into accepted and rejected files.
///
/// A batch with at least one acceptable file goes through and the others are
/// dropped without telling the user. A batch with nothing acceptable is
/// rejected as a whole.
pub fn validate_files(candidates: Vec<CandidateFile>) -> Result<FileSelection, CaptureError> {
    let mut selection = FileSelection::default();

    for file in candidates {
        match file.rejection() {
            None => selection.accepted.push(file),
            Some(reason) => {
                debug!(
                    file = %file.name,
                    media_type = %file.media_type,
                    size = file.size,
                    reason = ?reason,
                    "dropping invalid upload"
                );
                selection.rejected.push((file, reason));
            }
        }
    }

    if selection.accepted.is_empty() {
        return Err(CaptureError::NoValidFiles);
    }

    Ok(selection)
}

/// Require a non-empty URL; returns the trimmed text.
pub fn require_url(raw: &str) -> Result<&str, CaptureError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CaptureError::EmptyUrl);
    }
    Ok(trimmed)
}

/// Host part of a submitted URL. No reachability check is made.
pub fn extract_host(raw: &str) -> Result<String, CaptureError> {
    let url = Url::parse(raw).map_err(|e| CaptureError::InvalidUrl(e.to_string()))?;
    url.host_str()
        .map(str::to_string)
        .ok_or_else(|| CaptureError::InvalidUrl(format!("{} has no host", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn png_under_limit_is_accepted() {
        let file = CandidateFile::new("shot.png", "image/png", 10 * MB);
        assert_eq!(file.rejection(), None);
        assert_eq!(file.media_kind(), Some(MediaKind::Image));
    }

    #[test]
    fn plain_text_is_rejected() {
        let file = CandidateFile::new("notes.txt", "text/plain", 1024);
        assert_eq!(file.rejection(), Some(RejectReason::UnsupportedType));
    }

    #[test]
    fn png_over_limit_is_rejected() {
        let file = CandidateFile::new("huge.png", "image/png", 60 * MB);
        assert_eq!(file.rejection(), Some(RejectReason::TooLarge));
    }

    #[test]
    fn exactly_fifty_mib_is_accepted() {
        let file = CandidateFile::new("clip.mp4", "video/mp4", MAX_FILE_SIZE);
        assert!(file.is_acceptable());
    }

    #[test]
    fn mixed_batch_keeps_only_valid_files() {
        let selection = validate_files(vec![
            CandidateFile::new("shot.png", "image/png", 10 * MB),
            CandidateFile::new("notes.txt", "text/plain", 10),
        ])
        .unwrap();

        assert_eq!(selection.accepted.len(), 1);
        assert_eq!(selection.accepted[0].name, "shot.png");
        assert_eq!(selection.rejected.len(), 1);
        assert_eq!(selection.rejected[0].1, RejectReason::UnsupportedType);
    }

    #[test]
    fn batch_without_valid_files_is_rejected() {
        let result = validate_files(vec![
            CandidateFile::new("notes.txt", "text/plain", 10),
            CandidateFile::new("huge.mov", "video/quicktime", 60 * MB),
        ]);
        assert_eq!(result, Err(CaptureError::NoValidFiles));

        assert_eq!(validate_files(vec![]), Err(CaptureError::NoValidFiles));
    }

    #[test]
    fn media_type_is_guessed_from_name() {
        assert_eq!(CandidateFile::from_name("a.JPG", 1).media_type, "image/jpeg");
        assert_eq!(CandidateFile::from_name("b.mp4", 1).media_type, "video/mp4");
        assert_eq!(
            CandidateFile::from_name("c", 1).media_type,
            "application/octet-stream"
        );
    }

    #[test]
    fn url_must_not_be_blank() {
        assert_eq!(require_url("   "), Err(CaptureError::EmptyUrl));
        assert_eq!(require_url(" https://x.io "), Ok("https://x.io"));
    }

    #[test]
    fn host_extraction() {
        assert_eq!(extract_host("https://example.com/post/1").unwrap(), "example.com");
        assert!(matches!(extract_host("not a url"), Err(CaptureError::InvalidUrl(_))));
        assert!(matches!(extract_host("mailto:someone"), Err(CaptureError::InvalidUrl(_))));
    }
}
