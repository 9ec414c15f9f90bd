//! Strict decoding of the reviews section.
//!
//! The source text is model-generated, so malformed JSON is a realistic
//! outcome. Decode failure is the recoverable [`Error::MalformedReviews`];
//! there is no lenient repair and no partial decode.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const fn default_rating() -> u8 {
    5
}

/// One generated user review.
///
/// Fields are individually defaulted: a record may omit any of them and
/// still decode. Only the overall shape (a JSON array of objects) is
/// enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReviewRecord {
    /// Reviewer display name.
    #[serde(default)]
    pub name: String,
    /// Review date as free text.
    #[serde(default)]
    pub date: String,
    /// Star rating, nominally 1-5.
    #[serde(default = "default_rating")]
    pub rating: u8,
    /// Review headline.
    #[serde(default)]
    pub title: String,
    /// Review body text.
    #[serde(default)]
    pub body: String,
}

/// Decode the reviews section as a strict JSON array of [`ReviewRecord`].
///
/// # Errors
///
/// [`Error::MalformedReviews`] when the text is not a valid JSON array;
/// this covers the empty string produced by a missing `<reviews>` tag.
pub fn parse_reviews(reviews: &str) -> Result<Vec<ReviewRecord>> {
    serde_json::from_str(reviews).map_err(|e| Error::MalformedReviews {
        detail: e.to_string(),
    })
}
