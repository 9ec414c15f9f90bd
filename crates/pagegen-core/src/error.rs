//! Error types and handling for pagegen-core operations.
//!
//! Every public fallible operation in this crate returns [`Result<T>`].
//! Per-URL fetch failures are deliberately *not* errors: they are carried
//! in-band as [`crate::fetcher::FetchOutcome::Failed`] so that one bad source
//! never aborts a batch. The only condition that terminates a pipeline run is
//! [`Error::GenerationExhausted`].

use std::fmt;

use thiserror::Error;

/// One failed attempt against a model candidate.
///
/// The generation client records an attempt for every candidate that raised
/// before the first success; on total failure the full ordered list is
/// surfaced inside [`Error::GenerationExhausted`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationAttempt {
    /// Model identifier that was tried.
    pub model: String,
    /// Human-readable failure detail from that attempt.
    pub detail: String,
}

impl fmt::Display for GenerationAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: {}", self.model, self.detail)
    }
}

/// The main error type for pagegen-core operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation failed (config file reads, export writes).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network operation failed outside the candidate-fallback loop.
    ///
    /// Failures of individual generation attempts are folded into
    /// [`Error::GenerationExhausted`] instead; this variant covers client
    /// construction and other direct HTTP errors.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Parsing operation failed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid or inaccessible.
    #[error("Configuration error: {0}")]
    Config(String),

    /// URL is malformed or invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Every model candidate failed; the pipeline run is over.
    ///
    /// Carries the ordered `(model, detail)` pairs for every candidate that
    /// was tried, so callers can show the whole fallback trail.
    #[error("generation failed for all model candidates:\n{}", format_attempts(attempts))]
    GenerationExhausted {
        /// Ordered list of failed attempts, one per candidate tried.
        attempts: Vec<GenerationAttempt>,
    },

    /// Reviews section was present but not a valid JSON array.
    ///
    /// Recoverable: the caller shows the raw section text with a warning
    /// instead of a structured review list.
    #[error("malformed review data: {detail}")]
    MalformedReviews {
        /// Decoder failure detail.
        detail: String,
    },

    /// Raw text carried an upstream `"Error:"` sentinel.
    ///
    /// The typed generation client never produces this; the parser keeps the
    /// guard for raw text that entered from outside the client.
    #[error("{0}")]
    UpstreamFailure(String),
}

fn format_attempts(attempts: &[GenerationAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl Error {
    /// Check if the error might be recoverable through retry or degradation.
    ///
    /// Malformed reviews degrade to raw text; network timeouts and connect
    /// failures may succeed on retry. Exhausted generation is terminal for
    /// the invocation.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_timeout() || e.is_connect(),
            Self::MalformedReviews { .. } => true,
            Self::Io(e) => matches!(
                e.kind(),
                std::io::ErrorKind::TimedOut | std::io::ErrorKind::Interrupted
            ),
            _ => false,
        }
    }

    /// Get the error category as a string identifier for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::Network(_) => "network",
            Self::Parse(_) => "parse",
            Self::Config(_) => "config",
            Self::InvalidUrl(_) => "invalid_url",
            Self::Serialization(_) => "serialization",
            Self::GenerationExhausted { .. } => "generation",
            Self::MalformedReviews { .. } => "reviews",
            Self::UpstreamFailure(_) => "upstream",
        }
    }
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
