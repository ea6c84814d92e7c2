// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use cloudrs::application::usecases::analyze_url::AnalyzeUrlUseCase;
use cloudrs::config::settings::Settings;
use cloudrs::domain::services::article_extractor::ArticleExtractor;
use cloudrs::domain::services::keyword_scorer::TfIdfScorerFactory;
use cloudrs::engines::reqwest_engine::ReqwestEngine;
use cloudrs::presentation::routes;
use cloudrs::utils::telemetry;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(settings.telemetry.json);
    info!("Starting cloudrs...");

    // 3. Initialize Prometheus Metrics
    if settings.metrics.enabled {
        let addr: SocketAddr = settings.metrics.listen_addr.parse()?;
        cloudrs::infrastructure::metrics::init_metrics(addr);
    }

    // 4. Initialize Components
    let extractor = ArticleExtractor::new(Arc::new(ReqwestEngine), settings.fetch.user_agent.clone());
    let use_case = Arc::new(AnalyzeUrlUseCase::new(
        extractor,
        Arc::new(TfIdfScorerFactory),
    ));

    // 5. Start HTTP server
    let app = routes::routes(use_case, &settings.cors);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
