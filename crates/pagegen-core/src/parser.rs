//! Extraction of the four tagged sections from raw model output.
//!
//! Purely textual: no HTML validation, no JSON validation (reviews decoding
//! lives in [`crate::reviews`]). Each section is extracted independently so a
//! missing tag never blocks the others.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{Error, Result};

/// Legacy upstream failure marker; raw text starting with this is rejected
/// before any tag scanning.
pub const ERROR_SENTINEL: &str = "Error:";

/// The four fixed section names, in contract order.
pub const SECTION_TAGS: [&str; 4] = ["metadata", "html_content", "reviews", "references"];

static SECTION_PATTERNS: Lazy<[Regex; 4]> = Lazy::new(|| {
    SECTION_TAGS.map(|tag| {
        #[allow(clippy::expect_used)]
        Regex::new(&format!("(?s)<{tag}>(.*?)</{tag}>")).expect("section pattern is valid")
    })
});

/// The four sections of a generated response.
///
/// A field is the empty string when its tag was absent from the raw text;
/// absence is content, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    /// Free-text metadata block (recommended title/H1/description, prompts).
    pub metadata: String,
    /// HTML body fragment for direct embedding.
    pub html_content: String,
    /// Reviews payload, expected to be a JSON array.
    pub reviews: String,
    /// Markdown bullet list of reference links.
    pub references: String,
}

/// Extract the four tagged sections from raw generated text.
///
/// Tags are case-sensitive, the first occurrence wins, and inner text is
/// trimmed. Surrounding text and tag order are irrelevant.
///
/// # Errors
///
/// [`Error::UpstreamFailure`] when `raw` starts with the literal
/// [`ERROR_SENTINEL`]; no tag scanning is performed in that case.
pub fn parse_sections(raw: &str) -> Result<ParsedSections> {
    if raw.starts_with(ERROR_SENTINEL) {
        return Err(Error::UpstreamFailure(raw.to_string()));
    }

    let extract = |idx: usize| -> String {
        SECTION_PATTERNS[idx]
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    };

    Ok(ParsedSections {
        metadata: extract(0),
        html_content: extract(1),
        reviews: extract(2),
        references: extract(3),
    })
}
