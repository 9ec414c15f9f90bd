//! Assembly of fetched excerpts and user notes into one prompt context.

use crate::fetcher::FetchOutcome;

/// Combine fetch outcomes and an optional free-text note into the prompt
/// context string.
///
/// Sources appear in input order, each as a `--- Source: <url> ---` block;
/// failed fetches contribute nothing (the caller surfaces those separately).
/// A non-empty note is appended as a trailing `--- User Note ---` block.
#[must_use]
pub fn build_context(outcomes: &[FetchOutcome], note: Option<&str>) -> String {
    let mut context = String::new();

    for outcome in outcomes {
        if let FetchOutcome::Fetched(page) = outcome {
            context.push_str(&format!(
                "\n--- Source: {} ---\nTitle: {}\nContent: {}\n",
                page.url, page.title, page.content
            ));
        }
    }

    if let Some(note) = note {
        if !note.trim().is_empty() {
            context.push_str(&format!("\n--- User Note ---\n{note}\n"));
        }
    }

    context
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fetcher::PageExcerpt;

    fn fetched(url: &str, title: &str, content: &str) -> FetchOutcome {
        FetchOutcome::Fetched(PageExcerpt {
            url: url.into(),
            title: title.into(),
            content: content.into(),
        })
    }

    #[test]
    fn sources_render_in_order_with_headers() {
        let outcomes = vec![
            fetched("https://a.example", "A", "alpha"),
            fetched("https://b.example", "B", "beta"),
        ];

        let context = build_context(&outcomes, None);

        let pos_a = context.find("--- Source: https://a.example ---").unwrap();
        let pos_b = context.find("--- Source: https://b.example ---").unwrap();
        assert!(pos_a < pos_b);
        assert!(context.contains("Title: A\nContent: alpha"));
        assert!(!context.contains("User Note"));
    }

    #[test]
    fn failed_fetches_contribute_nothing() {
        let outcomes = vec![
            FetchOutcome::Failed {
                url: "https://down.example".into(),
                error: "HTTP status 500".into(),
            },
            fetched("https://up.example", "Up", "works"),
        ];

        let context = build_context(&outcomes, None);

        assert!(!context.contains("down.example"));
        assert!(!context.contains("500"));
        assert!(context.contains("up.example"));
    }

    #[test]
    fn note_appends_trailing_block() {
        let context = build_context(&[], Some("Dose is 50mg."));
        assert!(context.ends_with("--- User Note ---\nDose is 50mg.\n"));
    }

    #[test]
    fn blank_note_is_dropped() {
        assert_eq!(build_context(&[], Some("   ")), "");
        assert_eq!(build_context(&[], None), "");
    }
}
