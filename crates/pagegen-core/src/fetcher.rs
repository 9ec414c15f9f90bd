//! HTTP fetching and plain-text extraction for competitor pages.
//!
//! A fetch never fails the batch: each URL yields a [`FetchOutcome`], either a
//! bounded plain-text excerpt or a human-readable error string. Fetches run
//! strictly sequentially; the only bound per request is the client timeout.

use std::time::Duration;

use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

use crate::{Error, Result};

/// Maximum characters kept from a page, to bound downstream token usage.
pub const MAX_CONTENT_CHARS: usize = 10_000;

/// Per-request timeout applied independently to each fetch.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Title reported when a document declares none.
pub const NO_TITLE: &str = "No Title";

/// Browser-like identification header; some competitor sites reject plain
/// library user agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Markup categories removed before text extraction.
const NOISE_TAGS: &[&str] = &["script", "style", "nav", "footer", "header"];

/// A successfully fetched and stripped page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExcerpt {
    /// URL the excerpt came from.
    pub url: String,
    /// Document title, or [`NO_TITLE`] when absent.
    pub title: String,
    /// Whitespace-collapsed plain text, at most [`MAX_CONTENT_CHARS`] chars.
    pub content: String,
}

/// Per-URL result of a fetch; failures are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Page was retrieved and stripped.
    Fetched(PageExcerpt),
    /// Retrieval failed; the batch continues without this source.
    Failed {
        /// URL that failed.
        url: String,
        /// Human-readable failure description.
        error: String,
    },
}

impl FetchOutcome {
    /// URL this outcome refers to.
    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Fetched(page) => &page.url,
            Self::Failed { url, .. } => url,
        }
    }

    /// Whether the fetch succeeded.
    #[must_use]
    pub const fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }
}

/// HTTP client for retrieving competitor pages as bounded plain text.
pub struct PageFetcher {
    client: Client,
    max_content_chars: usize,
}

impl PageFetcher {
    /// Creates a new fetcher with the fixed production bounds.
    pub fn new() -> Result<Self> {
        Self::with_limits(FETCH_TIMEOUT, MAX_CONTENT_CHARS)
    }

    /// Creates a new fetcher with a custom request timeout (primarily for tests).
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        Self::with_limits(timeout, MAX_CONTENT_CHARS)
    }

    /// Creates a new fetcher with explicit timeout and content budget.
    pub fn with_limits(timeout: Duration, max_content_chars: usize) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            max_content_chars,
        })
    }

    /// Fetch one URL and strip it down to title plus bounded text.
    ///
    /// Any network failure or non-2xx status becomes
    /// [`FetchOutcome::Failed`]; this method itself never errors. No retries.
    pub async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.try_fetch(url).await {
            Ok(page) => {
                info!("fetched {} chars from {}", page.content.len(), url);
                FetchOutcome::Fetched(page)
            },
            Err(error) => {
                warn!("fetch failed for {url}: {error}");
                FetchOutcome::Failed {
                    url: url.to_string(),
                    error,
                }
            },
        }
    }

    /// Fetch a list of URLs sequentially, preserving input order.
    ///
    /// Returns exactly one outcome per input URL; failed fetches do not
    /// abort the batch.
    pub async fn fetch_many<S: AsRef<str>>(&self, urls: &[S]) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::with_capacity(urls.len());
        for url in urls {
            outcomes.push(self.fetch(url.as_ref()).await);
        }
        outcomes
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<PageExcerpt, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP status {status}"));
        }

        let body = response.text().await.map_err(|e| e.to_string())?;
        debug!("retrieved {} bytes from {}", body.len(), url);

        let (title, content) = extract_page_text(&body, self.max_content_chars);
        Ok(PageExcerpt {
            url: url.to_string(),
            title,
            content,
        })
    }
}

/// Check that every URL parses and uses an `http` or `https` scheme.
///
/// Meant for presentation layers that want to reject bad input before any
/// network traffic; the fetcher itself folds bad URLs into
/// [`FetchOutcome::Failed`].
///
/// # Errors
///
/// [`Error::InvalidUrl`] naming the first offending URL.
pub fn validate_source_urls<S: AsRef<str>>(urls: &[S]) -> Result<()> {
    for url in urls {
        let url = url.as_ref();
        let parsed = Url::parse(url).map_err(|e| Error::InvalidUrl(format!("{url}: {e}")))?;
        match parsed.scheme() {
            "http" | "https" => {},
            other => {
                return Err(Error::InvalidUrl(format!(
                    "{url}: unsupported scheme '{other}'"
                )));
            },
        }
    }
    Ok(())
}

/// Split a newline-delimited URL list, trimming and dropping blank lines.
#[must_use]
pub fn split_url_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Extract `(title, content)` from an HTML document.
///
/// Text under [`NOISE_TAGS`] is dropped, whitespace runs collapse to single
/// spaces, and the result is truncated to `max_content_chars`.
#[must_use]
pub fn extract_page_text(html: &str, max_content_chars: usize) -> (String, String) {
    let document = Html::parse_document(html);

    let title = Selector::parse("title").ok().and_then(|selector| {
        document
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
    });
    let title = match title {
        Some(t) if !t.is_empty() => t,
        _ => NO_TITLE.to_string(),
    };

    let mut pieces: Vec<&str> = Vec::new();
    for node in document.tree.nodes() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let under_noise = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| NOISE_TAGS.contains(&el.name()))
        });
        if !under_noise {
            pieces.push(&**text);
        }
    }

    let mut content = pieces
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if let Some((idx, _)) = content.char_indices().nth(max_content_chars) {
        content.truncate(idx);
    }

    (title, content)
}
