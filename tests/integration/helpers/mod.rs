// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::Router;
use axum_test::TestServer;
use cloudrs::application::usecases::analyze_url::AnalyzeUrlUseCase;
use cloudrs::config::settings::CorsSettings;
use cloudrs::domain::services::article_extractor::ArticleExtractor;
use cloudrs::domain::services::keyword_scorer::TfIdfScorerFactory;
use cloudrs::engines::reqwest_engine::ReqwestEngine;
use cloudrs::presentation::routes;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// 使用真实抓取引擎和打分器构建路由
pub fn create_app() -> Router {
    let extractor = ArticleExtractor::new(Arc::new(ReqwestEngine), "cloudrs-integration-test");
    let use_case = Arc::new(AnalyzeUrlUseCase::new(
        extractor,
        Arc::new(TfIdfScorerFactory),
    ));
    let cors = CorsSettings {
        allowed_origins: vec!["http://localhost:5173".to_string()],
    };
    routes::routes(use_case, &cors)
}

pub fn create_test_server() -> TestServer {
    TestServer::new(create_app()).expect("test server should start")
}

/// 启动模拟网页服务器，在 `route` 上返回给定状态和 HTML
pub async fn mock_page(route: &str, status: u16, html: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(html),
        )
        .mount(&server)
        .await;
    server
}

const TOPICS: &[&str] = &[
    "Researchers", "measured", "how", "coastal", "wetlands", "absorb", "carbon", "during",
    "seasonal", "storms", "and", "found", "that", "restored", "marshes", "store", "sediment",
    "faster", "than", "degraded", "sites", "while", "local", "fishermen", "reported",
    "healthier", "nurseries", "for", "juvenile", "crabs", "shrimp", "along", "tidal",
    "channels", "where", "mangrove", "roots", "slow", "water", "currents", "trap", "organic",
    "matter", "climate", "models", "suggest", "rising", "seas", "could", "drown", "marsh",
    "platforms", "unless", "planners", "allow", "inland", "migration", "corridors",
];

/// 约 500 词、词汇多样的英文文章
pub fn long_article_html() -> String {
    let mut paragraphs = Vec::new();
    let mut index = 0usize;
    for p in 0..10 {
        let words: Vec<&str> = (0..50)
            .map(|i| {
                index = (index + 7 + i % 3 + p) % TOPICS.len();
                TOPICS[index]
            })
            .collect();
        paragraphs.push(format!("<p>{}.</p>", words.join(" ")));
    }
    format!(
        "<html><head><title>Wetlands</title></head><body><nav>Home News</nav>{}</body></html>",
        paragraphs.join("\n")
    )
}
