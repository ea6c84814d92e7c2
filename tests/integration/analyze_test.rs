// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use cloudrs::application::dto::analyze_request::AnalyzeResponseDto;
use serde_json::{json, Value};

use super::helpers::{create_test_server, long_article_html, mock_page};

/// 500 词文章返回不超过 60 个关键词，最高权重为 1.0
#[tokio::test]
async fn analyze_long_article_returns_weighted_words() {
    let page = mock_page("/article", 200, long_article_html()).await;
    let server = create_test_server();

    let response = server
        .post("/analyze")
        .json(&json!({ "url": format!("{}/article", page.uri()) }))
        .await;

    response.assert_status(StatusCode::OK);
    let body: AnalyzeResponseDto = response.json();

    assert!(!body.words.is_empty());
    assert!(body.words.len() <= 60);
    assert!((body.words[0].weight - 1.0).abs() < 1e-9);
    for word in &body.words {
        assert!(word.weight >= 0.2 && word.weight <= 1.0);
        assert!(!word.word.is_empty());
    }
    for pair in body.words.windows(2) {
        assert!(pair[0].weight >= pair[1].weight);
    }
    // Navigation and title text are not part of any paragraph
    assert!(body.words.iter().all(|w| w.word != "home"));
}

/// 上游 404 视为抓取失败
#[tokio::test]
async fn analyze_not_found_page_is_fetch_error() {
    let page = mock_page("/missing", 404, "<p>gone</p>".to_string()).await;
    let server = create_test_server();

    let response = server
        .post("/analyze")
        .json(&json!({ "url": format!("{}/missing", page.uri()) }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("failed to fetch or retrieve URL"));
}

/// 三段共 12 个词的页面内容不足
#[tokio::test]
async fn analyze_short_page_is_content_error() {
    let html = "<p>One two three four.</p><p>Five six seven eight.</p><p>Nine ten eleven twelve.</p>";
    let page = mock_page("/short", 200, html.to_string()).await;
    let server = create_test_server();

    let response = server
        .post("/analyze")
        .json(&json!({ "url": format!("{}/short", page.uri()) }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("not enough text found"));
}

/// 全部为停用词的文章无法提取关键词
#[tokio::test]
async fn analyze_stop_word_page_is_scoring_error() {
    let html = format!("<p>{}</p>", "the a an of ".repeat(20));
    let page = mock_page("/stop", 200, html).await;
    let server = create_test_server();

    let response = server
        .post("/analyze")
        .json(&json!({ "url": format!("{}/stop", page.uri()) }))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["error"], "could not extract keywords");
}

/// 空 URL 在抓取前被拒绝
#[tokio::test]
async fn analyze_empty_url_is_bad_request() {
    let server = create_test_server();

    let response = server.post("/analyze").json(&json!({ "url": "" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("URL cannot be empty"));
}

/// 无法连接的地址视为抓取失败
#[tokio::test]
async fn analyze_unreachable_host_is_fetch_error() {
    let server = create_test_server();

    let response = server
        .post("/analyze")
        .json(&json!({ "url": "http://127.0.0.1:1/unreachable" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// 相同页面两次分析结果一致
#[tokio::test]
async fn analyze_is_deterministic() {
    let page = mock_page("/article", 200, long_article_html()).await;
    let server = create_test_server();
    let url = format!("{}/article", page.uri());

    let first: AnalyzeResponseDto = server
        .post("/analyze")
        .json(&json!({ "url": url }))
        .await
        .json();
    let second: AnalyzeResponseDto = server
        .post("/analyze")
        .json(&json!({ "url": url }))
        .await
        .json();

    assert_eq!(first, second);
}
