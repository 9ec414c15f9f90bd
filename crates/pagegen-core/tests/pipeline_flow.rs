//! End-to-end pipeline tests against mock HTTP servers.

#![allow(clippy::unwrap_used, clippy::panic)]

use pagegen_core::{Config, Error, FetchOutcome, Pipeline, ReviewsOutcome};
use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const COMPETITOR_PAGE: &str = r"<html>
    <head><title>Rival Anadrin Page</title></head>
    <body>
        <nav>menu</nav>
        <p>Anadrin relieves everyday symptoms fast.</p>
        <footer>legal</footer>
    </body>
    </html>";

const MODEL_OUTPUT: &str = r#"<metadata>
Recommended Title: Anadrin 50mg, Explained
Recommended H1: Anadrin: What It Does
Recommended Description: The complete Anadrin guide.
- [Abstract]: sunlight breaking through clouds, relief concept
- [Person]: smiling pharmacist at a counter
</metadata>
<html_content>
<h2>Overview</h2><p>Anadrin is...</p>
</html_content>
<reviews>
[{"name": "Ken", "date": "2026-07-01", "rating": 4, "title": "Works", "body": "Helped in a week."}]
</reviews>
<references>
- [Health Agency](https://health.example.gov/anadrin)
</references>"#;

fn generation_ok(server_response: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "candidates": [
            { "content": { "parts": [ { "text": server_response } ] } }
        ]
    }))
}

fn pipeline_for(server: &MockServer) -> Pipeline {
    Pipeline::new("test-key")
        .unwrap()
        .with_base_url(server.uri())
}

#[tokio::test]
async fn full_run_produces_all_sections() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rival"))
        .respond_with(ResponseTemplate::new(200).set_body_string(COMPETITOR_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/.*:generateContent$"))
        .and(body_string_contains("Rival Anadrin Page"))
        .respond_with(generation_ok(MODEL_OUTPUT))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server);
    let urls = vec![format!("{}/rival", server.uri())];
    let page = pipeline
        .run("Anadrin", &urls, Some("Dose is 50mg."), None)
        .await
        .unwrap();

    assert_eq!(page.fetches.len(), 1);
    assert!(page.fetches[0].is_fetched());
    assert_eq!(page.metadata.recommended_title, "Anadrin 50mg, Explained");
    assert_eq!(page.metadata.recommended_h1, "Anadrin: What It Does");
    assert_eq!(page.metadata.image_prompts.len(), 2);
    assert!(page.sections.html_content.contains("<h2>Overview</h2>"));
    assert!(page.sections.references.contains("Health Agency"));
    match &page.reviews {
        ReviewsOutcome::Parsed(reviews) => {
            assert_eq!(reviews.len(), 1);
            assert_eq!(reviews[0].name, "Ken");
        },
        ReviewsOutcome::Malformed { detail } => panic!("reviews should decode: {detail}"),
    }
}

#[tokio::test]
async fn failed_fetch_degrades_but_run_continues() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/down"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/.*:generateContent$"))
        .respond_with(generation_ok(MODEL_OUTPUT))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server);
    let urls = vec![format!("{}/down", server.uri())];
    let page = pipeline.run("Anadrin", &urls, None, None).await.unwrap();

    match &page.fetches[0] {
        FetchOutcome::Failed { error, .. } => assert!(error.contains("503")),
        FetchOutcome::Fetched(_) => panic!("fetch should have failed"),
    }
    // Generation still ran and parsed.
    assert!(!page.sections.html_content.is_empty());

    // The failed source contributed nothing to the prompt context.
    let generation_calls: Vec<Request> = server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|req| req.url.path().ends_with(":generateContent"))
        .collect();
    assert_eq!(generation_calls.len(), 1);
    let body = String::from_utf8_lossy(&generation_calls[0].body).to_string();
    assert!(!body.contains("--- Source:"));
}

#[tokio::test]
async fn malformed_reviews_degrade_to_outcome() {
    let server = MockServer::start().await;

    let output = MODEL_OUTPUT.replace(
        "[{\"name\": \"Ken\", \"date\": \"2026-07-01\", \"rating\": 4, \"title\": \"Works\", \"body\": \"Helped in a week.\"}]",
        "[{broken json",
    );
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/.*:generateContent$"))
        .respond_with(generation_ok(&output))
        .mount(&server)
        .await;

    let pipeline = pipeline_for(&server);
    let page = pipeline.run("Anadrin", &[], None, None).await.unwrap();

    match &page.reviews {
        ReviewsOutcome::Malformed { detail } => assert!(!detail.is_empty()),
        ReviewsOutcome::Parsed(_) => panic!("broken JSON must not decode"),
    }
    // Raw text is still available for display.
    assert_eq!(page.sections.reviews, "[{broken json");
}

#[tokio::test]
async fn generation_exhaustion_aborts_the_run() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path_regex(r"^/v1beta/models/.*:generateContent$"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;

    let config = Config::default();
    let candidate_count = config.generation.candidates.len();

    let pipeline = pipeline_for(&server);
    let err = pipeline.run("Anadrin", &[], None, None).await.unwrap_err();

    match err {
        Error::GenerationExhausted { attempts } => {
            assert_eq!(attempts.len(), candidate_count);
        },
        other => panic!("expected GenerationExhausted, got {other:?}"),
    }
}
