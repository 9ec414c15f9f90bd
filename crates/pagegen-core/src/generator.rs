//! Text-generation client with ordered model fallback.
//!
//! One generation call per candidate, first success wins. Every failed
//! attempt is recorded; when the whole chain fails the caller gets
//! [`Error::GenerationExhausted`] with the ordered `(model, detail)` list.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::GenerationAttempt;
use crate::prompt::{DEFAULT_MODEL_CANDIDATES, SYSTEM_INSTRUCTION, user_prompt};
use crate::{Error, Result};

/// Production endpoint for the generation API.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the `generateContent` endpoint with candidate fallback.
///
/// The client carries no per-request timeout; the call is bounded only by
/// what the network layer imposes, and there is no cancellation path once a
/// call is in flight.
pub struct GenerationClient {
    client: Client,
    api_key: String,
    base_url: String,
    candidates: Vec<String>,
}

impl GenerationClient {
    /// Create a client with the default endpoint and candidate list.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build().map_err(Error::Network)?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            candidates: DEFAULT_MODEL_CANDIDATES
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
    }

    /// Override the endpoint base URL (primarily for tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Replace the default candidate list.
    #[must_use]
    pub fn with_candidates(mut self, candidates: Vec<String>) -> Self {
        self.candidates = candidates;
        self
    }

    /// Generate page content for `product_name` from the assembled context.
    ///
    /// Tries each model candidate in order (a preferred model, when given, is
    /// tried first) and returns the first successful raw response text. No
    /// comparison across candidates, no retries beyond the list.
    ///
    /// # Errors
    ///
    /// [`Error::GenerationExhausted`] when every candidate fails, carrying
    /// one [`GenerationAttempt`] per candidate in the order tried.
    pub async fn generate(
        &self,
        product_name: &str,
        context_text: &str,
        preferred_model: Option<&str>,
    ) -> Result<String> {
        let prompt = user_prompt(product_name, context_text);

        let mut order: Vec<&str> = Vec::with_capacity(self.candidates.len() + 1);
        if let Some(preferred) = preferred_model {
            order.push(preferred);
        }
        order.extend(self.candidates.iter().map(String::as_str));

        let mut attempts = Vec::new();
        for model in order {
            debug!("trying model candidate {model}");
            match self.call_model(model, &prompt).await {
                Ok(text) => {
                    info!("generation succeeded with {model}");
                    return Ok(text);
                },
                Err(detail) => {
                    warn!("model {model} failed: {detail}");
                    attempts.push(GenerationAttempt {
                        model: model.to_string(),
                        detail,
                    });
                },
            }
        }

        Err(Error::GenerationExhausted { attempts })
    }

    /// One generation call against one model; any failure becomes a detail
    /// string for the attempt log.
    async fn call_model(&self, model: &str, prompt: &str) -> std::result::Result<String, String> {
        let url = format!("{}/v1beta/models/{model}:generateContent", self.base_url);
        let body = GenerateRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", self.api_key.trim())
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(format!("HTTP {status}: {text}"));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| format!("failed to parse generation response: {e}"))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err("response missing text content".to_string());
        }
        Ok(text)
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: ResponseContent,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}
