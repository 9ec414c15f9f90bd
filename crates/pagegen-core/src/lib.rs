//! # pagegen-core
//!
//! Core functionality for pagegen - a competitor-informed product page
//! generator. It scrapes a short list of competitor URLs into bounded plain
//! text, assembles that text with optional user notes into a prompt, sends
//! the prompt to a text-generation endpoint with an ordered model-fallback
//! chain, and parses the tagged response into metadata, HTML, reviews, and
//! reference links.
//!
//! ## Architecture
//!
//! The pipeline is a straight line; every stage is a pure transform of the
//! previous stage's output:
//!
//! ```text
//! fetcher -> context -> generator -> parser -> {metadata, reviews}
//! ```
//!
//! - **Fetching**: per-URL outcomes, never batch-fatal
//! - **Generation**: first successful candidate wins, exhaustion is typed
//! - **Parsing**: four independent tag extractions, absence is empty content
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pagegen_core::{Pipeline, ReviewsOutcome};
//!
//! # async fn example() -> pagegen_core::Result<()> {
//! let pipeline = Pipeline::new("api-key")?;
//! let urls = vec!["https://competitor.example/item".to_string()];
//! let page = pipeline.run("Anadrin", &urls, Some("Dose is 50mg"), None).await?;
//!
//! println!("title: {}", page.metadata.recommended_title);
//! if let ReviewsOutcome::Parsed(reviews) = &page.reviews {
//!     println!("{} reviews", reviews.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Per-URL fetch failures and malformed review JSON degrade into the result;
//! the only pipeline-fatal condition is [`Error::GenerationExhausted`], which
//! carries the ordered list of failed model attempts.

/// Configuration loading and defaults
pub mod config;
/// Prompt-context assembly from fetched sources and notes
pub mod context;
/// Error types and result aliases
pub mod error;
/// HTTP fetching and plain-text extraction for competitor pages
pub mod fetcher;
/// Generation client with ordered model fallback
pub mod generator;
/// Metadata-section line extraction
pub mod metadata;
/// Tagged-section extraction from raw model output
pub mod parser;
/// The end-to-end pipeline
pub mod pipeline;
/// Pinned system instruction and model candidates
pub mod prompt;
/// Strict review-JSON decoding
pub mod reviews;

// Re-export commonly used types
pub use config::{Config, FetchConfig, GenerationConfig};
pub use context::build_context;
pub use error::{Error, GenerationAttempt, Result};
pub use fetcher::{FetchOutcome, PageExcerpt, PageFetcher, split_url_list, validate_source_urls};
pub use generator::GenerationClient;
pub use metadata::{MetadataFields, parse_metadata};
pub use parser::{ParsedSections, parse_sections};
pub use pipeline::{GeneratedPage, Pipeline, ReviewsOutcome};
pub use reviews::{ReviewRecord, parse_reviews};
