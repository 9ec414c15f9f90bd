//! Best-effort extraction of recommendation lines and image prompts from the
//! metadata section.
//!
//! Every field defaults to empty when its pattern is absent; this module
//! never errors. Extracted values are advisory, never guaranteed present.

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE_RE: Lazy<Regex> = Lazy::new(|| line_pattern("Recommended Title"));
static H1_RE: Lazy<Regex> = Lazy::new(|| line_pattern("Recommended H1"));
static DESCRIPTION_RE: Lazy<Regex> = Lazy::new(|| line_pattern("Recommended Description"));
static ABSTRACT_RE: Lazy<Regex> = Lazy::new(|| bullet_pattern("Abstract"));
static PERSON_RE: Lazy<Regex> = Lazy::new(|| bullet_pattern("Person"));

fn line_pattern(label: &str) -> Regex {
    #[allow(clippy::expect_used)]
    Regex::new(&format!(r"{label}:\s*(.*)")).expect("line pattern is valid")
}

fn bullet_pattern(tag: &str) -> Regex {
    // Bullet marker, optional bold marks around the tag, optional colon.
    #[allow(clippy::expect_used)]
    Regex::new(&format!(r"(?i)(?:-|\*)\s*(?:\*\*)?\[{tag}\](?:\*\*)?:?\s*(.*)"))
        .expect("bullet pattern is valid")
}

/// Recommendation fields extracted from the metadata section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFields {
    /// Suggested page title, or empty.
    pub recommended_title: String,
    /// Suggested on-page H1 text, or empty.
    pub recommended_h1: String,
    /// Suggested meta description, or empty.
    pub recommended_description: String,
    /// Image-generation prompts in `[abstract, person]` order; absent
    /// entries are skipped.
    pub image_prompts: Vec<String>,
}

/// Extract recommendation lines and image prompts from the metadata section.
#[must_use]
pub fn parse_metadata(metadata: &str) -> MetadataFields {
    let capture = |re: &Regex| -> Option<String> {
        re.captures(metadata)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    let mut image_prompts = Vec::new();
    for re in [&*ABSTRACT_RE, &*PERSON_RE] {
        if let Some(prompt) = capture(re) {
            if !prompt.is_empty() {
                image_prompts.push(prompt);
            }
        }
    }

    MetadataFields {
        recommended_title: capture(&TITLE_RE).unwrap_or_default(),
        recommended_h1: capture(&H1_RE).unwrap_or_default(),
        recommended_description: capture(&DESCRIPTION_RE).unwrap_or_default(),
        image_prompts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_present_lines_and_defaults_absent_ones() {
        let fields = parse_metadata("Recommended Title: Foo Bar\nsome other line\n");

        assert_eq!(fields.recommended_title, "Foo Bar");
        assert_eq!(fields.recommended_h1, "");
        assert_eq!(fields.recommended_description, "");
        assert!(fields.image_prompts.is_empty());
    }

    #[test]
    fn extracts_all_lines() {
        let metadata = "\
            Recommended Title: Anadrin 50mg Guide\n\
            Recommended H1: Everything about Anadrin\n\
            Recommended Description: Learn how Anadrin works.\n";

        let fields = parse_metadata(metadata);

        assert_eq!(fields.recommended_title, "Anadrin 50mg Guide");
        assert_eq!(fields.recommended_h1, "Everything about Anadrin");
        assert_eq!(fields.recommended_description, "Learn how Anadrin works.");
    }

    #[test]
    fn image_prompts_in_abstract_then_person_order() {
        let metadata = "\
            - [Person]: a smiling pharmacist in a bright store\n\
            - [Abstract]: soft light through leaves, relief concept\n";

        let fields = parse_metadata(metadata);

        assert_eq!(
            fields.image_prompts,
            vec![
                "soft light through leaves, relief concept",
                "a smiling pharmacist in a bright store",
            ]
        );
    }

    #[test]
    fn bold_marked_bullets_match() {
        let metadata = "* **[Abstract]** calm water ripples\n";
        let fields = parse_metadata(metadata);
        assert_eq!(fields.image_prompts, vec!["calm water ripples"]);
    }

    #[test]
    fn empty_input_yields_defaults() {
        assert_eq!(parse_metadata(""), MetadataFields::default());
    }
}
