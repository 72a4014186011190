//! Error types for the capture pipeline and listing generators.

use thiserror::Error;

/// Failures raised by a user action on the capture screen.
///
/// None of these are fatal: the machine stays (or returns to) an interactive
/// state and the user can retry straight away. The `Display` text is what the
/// notification shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    /// URL mode with nothing typed
    #[error("Please enter a valid URL")]
    EmptyUrl,

    /// File mode where no candidate passed validation
    #[error("Please upload valid image or video files under 50MB")]
    NoValidFiles,

    /// URL could not be parsed or has no host
    #[error("Failed to analyze URL. Please check the URL and try again.")]
    InvalidUrl(String),

    /// Anything else that broke while building the content data
    #[error("Failed to analyze content. Please try again.")]
    AnalysisFailed(String),

    /// Analyze requested while an analysis is already pending
    #[error("Analysis already in progress")]
    Busy,
}

/// Result type for listing generator operations.
pub type GeneratorResult<T> = std::result::Result<T, GeneratorError>;

/// Listing generator errors.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration error (missing API key, unknown strategy)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Request is missing something the generator needs
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
