#![allow(missing_docs)]

mod common;

use common::pagegen_cmd;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_usage_and_fails() {
    pagegen_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn generate_without_api_key_fails() {
    pagegen_cmd()
        .args(["generate", "Anadrin", "--url", "https://example.com/rival"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("api-key").or(predicate::str::contains("GEMINI_API_KEY")));
}

#[test]
fn generate_without_urls_fails_before_any_network() {
    pagegen_cmd()
        .args(["generate", "Anadrin", "-k", "test-key"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL"));
}

#[test]
fn generate_rejects_whitespace_product_name() {
    pagegen_cmd()
        .args([
            "generate",
            "   ",
            "-k",
            "test-key",
            "--url",
            "https://example.com/rival",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Product name"));
}

#[test]
fn generate_rejects_malformed_url_before_any_network() {
    pagegen_cmd()
        .args(["generate", "Anadrin", "-k", "test-key", "--url", "notaurl"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid URL"));
}

#[test]
fn fetch_requires_at_least_one_url() {
    pagegen_cmd()
        .arg("fetch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL"));
}

#[test]
fn generate_reads_urls_file_but_rejects_blank_one() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let file = dir.path().join("urls.txt");
    std::fs::write(&file, "\n   \n\n")?;

    pagegen_cmd()
        .args(["generate", "Anadrin", "-k", "test-key", "--urls-file"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL"));
    Ok(())
}
