// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::*;
use crate::domain::errors::ContentError;
use crate::engines::traits::FetchResponse;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// 返回固定响应的抓取引擎
struct StubFetcher {
    result: fn() -> Result<FetchResponse, EngineError>,
    calls: AtomicUsize,
}

impl StubFetcher {
    fn new(result: fn() -> Result<FetchResponse, EngineError>) -> Arc<Self> {
        Arc::new(Self {
            result,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.result)()
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

fn html_response(status_code: u16, content: String) -> Result<FetchResponse, EngineError> {
    Ok(FetchResponse {
        status_code,
        content,
        content_type: "text/html".to_string(),
        response_time_ms: 1,
    })
}

fn long_article() -> Result<FetchResponse, EngineError> {
    let paragraph = "Rust services parse markup and score keywords for a rendered cloud.";
    let body = (0..10)
        .map(|_| format!("<p>{}</p>", paragraph))
        .collect::<String>();
    html_response(200, format!("<html><body><h1>Title</h1>{}</body></html>", body))
}

#[tokio::test]
async fn test_extracts_long_article() {
    let fetcher = StubFetcher::new(long_article);
    let extractor = ArticleExtractor::new(fetcher.clone(), "test-agent");

    let document = extractor.extract("https://example.com/article").await.unwrap();

    assert_eq!(document.word_count(), 110);
    assert!(document.text().starts_with("Rust services parse"));
    assert!(!document.text().contains("Title"));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_not_found_is_fetch_error() {
    let fetcher = StubFetcher::new(|| html_response(404, "<p>gone</p>".to_string()));
    let extractor = ArticleExtractor::new(fetcher.clone(), "test-agent");

    let err = extractor.extract("https://example.com/missing").await.unwrap_err();

    assert!(matches!(err, AnalysisError::Fetch(FetchError::Status(404))));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_timeout_is_fetch_error_without_retry() {
    let fetcher = StubFetcher::new(|| Err(EngineError::Timeout(Duration::from_secs(10))));
    let extractor = ArticleExtractor::new(fetcher.clone(), "test-agent");

    let err = extractor.extract("https://slow.example.com").await.unwrap_err();

    assert!(matches!(err, AnalysisError::Fetch(FetchError::Transport(_))));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_oversized_body_is_fetch_error() {
    let fetcher = StubFetcher::new(|| Err(EngineError::BodyTooLarge(1024)));
    let extractor = ArticleExtractor::new(fetcher, "test-agent");

    let err = extractor.extract("https://example.com/huge").await.unwrap_err();

    assert!(matches!(err, AnalysisError::Fetch(FetchError::BodyTooLarge(1024))));
}

#[tokio::test]
async fn test_client_build_failure_is_internal_error() {
    let fetcher =
        StubFetcher::new(|| Err(EngineError::ClientBuild("invalid header value".into())));
    let extractor = ArticleExtractor::new(fetcher.clone(), "test-agent");

    let err = extractor.extract("https://example.com").await.unwrap_err();

    assert!(matches!(err, AnalysisError::Internal(_)));
    assert_eq!(err.kind(), "internal");
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_three_short_paragraphs_is_content_error() {
    let fetcher = StubFetcher::new(|| {
        html_response(
            200,
            "<p>One two three four.</p><p>Five six seven eight.</p><p>Nine ten eleven twelve.</p>"
                .to_string(),
        )
    });
    let extractor = ArticleExtractor::new(fetcher, "test-agent");

    let err = extractor.extract("https://example.com/short").await.unwrap_err();

    match err {
        AnalysisError::Content(ContentError::NotEnoughText { found, .. }) => {
            assert_eq!(found, 12)
        }
        other => panic!("expected content error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_page_without_paragraphs_is_content_error() {
    let fetcher = StubFetcher::new(|| {
        html_response(200, format!("<div>{}</div>", "word ".repeat(200)))
    });
    let extractor = ArticleExtractor::new(fetcher, "test-agent");

    let err = extractor.extract("https://example.com/divs").await.unwrap_err();

    assert!(matches!(err, AnalysisError::Content(_)));
}
