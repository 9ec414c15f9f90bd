//! Generate command implementation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pagegen_core::{
    Config, FetchOutcome, GeneratedPage, Pipeline, ReviewsOutcome, split_url_list,
    validate_source_urls,
};

use crate::cli::GenerateArgs;

/// Run the full generation pipeline for one product and export the HTML.
///
/// # Arguments
///
/// * `args` - Parsed `generate` subcommand arguments
/// * `config` - Loaded configuration (candidates, fetch limits)
/// * `quiet` - Suppress the progress report (errors still print)
pub async fn execute(args: &GenerateArgs, config: &Config, quiet: bool) -> Result<()> {
    let product = args.product.trim();
    if product.is_empty() {
        anyhow::bail!("Product name must not be empty or whitespace.");
    }

    let urls = collect_urls(args)?;
    if urls.is_empty() {
        anyhow::bail!(
            "No competitor URLs given. Pass at least one --url, or a --urls-file with one URL per line."
        );
    }
    validate_source_urls(&urls)?;

    let pipeline = Pipeline::from_config(&args.api_key, config)?;

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        create_spinner("Fetching competitor pages...")
    };
    spinner.set_message(format!("Generating page for {product}..."));

    let page = pipeline
        .run(
            product,
            &urls,
            args.note.as_deref(),
            args.model.as_deref(),
        )
        .await?;

    spinner.finish_and_clear();

    if !quiet {
        print_fetch_report(&page.fetches);
        print_page_report(&page);
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(product));
    export_html(&page, &output_path, quiet)?;

    Ok(())
}

fn collect_urls(args: &GenerateArgs) -> Result<Vec<String>> {
    let mut urls: Vec<String> = args
        .urls
        .iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect();

    if let Some(path) = &args.urls_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read URL file {}", path.display()))?;
        urls.extend(split_url_list(&text));
    }

    Ok(urls)
}

fn print_fetch_report(fetches: &[FetchOutcome]) {
    for outcome in fetches {
        match outcome {
            FetchOutcome::Fetched(excerpt) => {
                println!(
                    "{} {} ({}, {} chars)",
                    "✓ Fetched".green(),
                    excerpt.url,
                    excerpt.title,
                    excerpt.content.chars().count()
                );
            },
            FetchOutcome::Failed { url, error } => {
                println!("{} {} ({error})", "✗ Skipped".red(), url);
            },
        }
    }
}

fn print_page_report(page: &GeneratedPage) {
    println!();
    println!("{}", "Metadata".bold());
    println!("  Title:       {}", page.metadata.recommended_title);
    println!("  H1:          {}", page.metadata.recommended_h1);
    println!("  Description: {}", page.metadata.recommended_description);
    for prompt in &page.metadata.image_prompts {
        println!("  Image:       {prompt}");
    }

    println!();
    match &page.reviews {
        ReviewsOutcome::Parsed(reviews) => {
            println!("{} ({})", "Reviews".bold(), reviews.len());
            for review in reviews {
                let stars = "★".repeat(usize::from(review.rating.min(5)));
                println!("  {} {} — {}", stars.yellow(), review.title, review.name);
            }
        },
        ReviewsOutcome::Malformed { detail } => {
            println!("{} {detail}", "Reviews section not decodable:".yellow());
            if !page.sections.reviews.is_empty() {
                println!("  Raw text:\n{}", page.sections.reviews);
            }
        },
    }

    if !page.sections.references.is_empty() {
        println!();
        println!("{}", "References".bold());
        for line in page.sections.references.lines() {
            println!("  {line}");
        }
    }
}

fn default_output_path(product: &str) -> PathBuf {
    let stamp = Utc::now().format("%Y%m%d");
    let slug: String = product
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    PathBuf::from(format!("{slug}_{stamp}.html"))
}

fn export_html(page: &GeneratedPage, path: &Path, quiet: bool) -> Result<()> {
    if page.sections.html_content.is_empty() {
        if !quiet {
            println!(
                "{}",
                "No HTML content in the response; nothing exported.".yellow()
            );
        }
        return Ok(());
    }

    std::fs::write(path, &page.sections.html_content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    if !quiet {
        println!();
        println!("{} {}", "✓ Exported".green(), path.display());
    }
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}
