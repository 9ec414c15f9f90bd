//! Fetch command implementation

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use pagegen_core::{Config, FetchOutcome, PageFetcher};

const PREVIEW_CHARS: usize = 280;

/// Fetch the given URLs and print what the pipeline would see.
pub async fn execute(urls: &[String], config: &Config) -> Result<()> {
    let fetcher = PageFetcher::with_limits(
        Duration::from_secs(config.fetch.timeout_secs),
        config.fetch.max_content_chars,
    )?;

    let outcomes = fetcher.fetch_many(urls).await;
    for outcome in &outcomes {
        match outcome {
            FetchOutcome::Fetched(excerpt) => {
                println!("{} {}", "✓".green(), excerpt.url);
                println!("  Title: {}", excerpt.title.bold());
                println!("  {}", preview(&excerpt.content));
            },
            FetchOutcome::Failed { url, error } => {
                println!("{} {url}", "✗".red());
                println!("  {}", error.red());
            },
        }
        println!();
    }

    Ok(())
}

fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((byte_index, _)) => format!("{}…", &content[..byte_index]),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_on_char_boundary() {
        let long = "é".repeat(PREVIEW_CHARS + 10);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
    }

    #[test]
    fn preview_keeps_short_content_whole() {
        assert_eq!(preview("short"), "short");
    }
}
