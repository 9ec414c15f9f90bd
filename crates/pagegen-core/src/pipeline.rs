//! The end-to-end generation pipeline.
//!
//! One user action runs one pipeline to completion: fetch every URL
//! sequentially, assemble the context, call the generation client, parse the
//! response, and decode the sub-sections. Each stage is a pure transform of
//! the previous stage's output; nothing is shared across invocations.
//!
//! Fetch failures and malformed reviews degrade into the returned
//! [`GeneratedPage`]; only generation exhaustion aborts the run.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::context::build_context;
use crate::fetcher::{FetchOutcome, PageFetcher};
use crate::generator::GenerationClient;
use crate::metadata::{MetadataFields, parse_metadata};
use crate::parser::{ParsedSections, parse_sections};
use crate::reviews::{ReviewRecord, parse_reviews};
use crate::{Error, Result};

/// Decoded reviews, or the reason decoding failed.
///
/// The raw section text stays available in [`ParsedSections::reviews`] either
/// way, so a caller can always show something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewsOutcome {
    /// Section decoded as a JSON array.
    Parsed(Vec<ReviewRecord>),
    /// Section was missing or not valid JSON.
    Malformed {
        /// Decoder failure detail.
        detail: String,
    },
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone)]
pub struct GeneratedPage {
    /// Per-URL fetch outcomes in input order, including failures.
    pub fetches: Vec<FetchOutcome>,
    /// The four extracted sections (empty string where a tag was absent).
    pub sections: ParsedSections,
    /// Best-effort metadata recommendations.
    pub metadata: MetadataFields,
    /// Decoded reviews or the decode failure.
    pub reviews: ReviewsOutcome,
}

/// The single operation this crate exposes to presentation layers.
pub struct Pipeline {
    fetcher: PageFetcher,
    generator: GenerationClient,
    preferred: Option<String>,
}

impl Pipeline {
    /// Build a pipeline with default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::from_config(api_key, &Config::default())
    }

    /// Build a pipeline from loaded configuration.
    pub fn from_config(api_key: impl Into<String>, config: &Config) -> Result<Self> {
        let fetcher = PageFetcher::with_limits(
            Duration::from_secs(config.fetch.timeout_secs),
            config.fetch.max_content_chars,
        )?;
        let generator = GenerationClient::new(api_key)?
            .with_candidates(config.generation.candidates.clone());
        Ok(Self {
            fetcher,
            generator,
            preferred: config.generation.preferred.clone(),
        })
    }

    /// Override the generation endpoint base URL (primarily for tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.generator = self.generator.with_base_url(base_url);
        self
    }

    /// Run the whole pipeline for one product.
    ///
    /// `preferred_model` (when given) overrides any configured preference and
    /// is tried before the candidate list.
    ///
    /// # Errors
    ///
    /// [`Error::GenerationExhausted`] when every model candidate fails; this
    /// is the only stage failure that aborts the run.
    pub async fn run(
        &self,
        product_name: &str,
        urls: &[String],
        note: Option<&str>,
        preferred_model: Option<&str>,
    ) -> Result<GeneratedPage> {
        info!("fetching {} source urls", urls.len());
        let fetches = self.fetcher.fetch_many(urls).await;
        for outcome in &fetches {
            if let FetchOutcome::Failed { url, error } = outcome {
                warn!("source skipped: {url} ({error})");
            }
        }

        let context = build_context(&fetches, note);

        let preferred = preferred_model.or(self.preferred.as_deref());
        let raw = self
            .generator
            .generate(product_name, &context, preferred)
            .await?;

        let sections = parse_sections(&raw)?;
        let metadata = parse_metadata(&sections.metadata);
        let reviews = match parse_reviews(&sections.reviews) {
            Ok(records) => ReviewsOutcome::Parsed(records),
            Err(Error::MalformedReviews { detail }) => {
                warn!("reviews section not decodable: {detail}");
                ReviewsOutcome::Malformed { detail }
            },
            Err(other) => return Err(other),
        };

        Ok(GeneratedPage {
            fetches,
            sections,
            metadata,
            reviews,
        })
    }
}
