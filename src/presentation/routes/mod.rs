// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::usecases::analyze_url::AnalyzeUrlUseCase;
use crate::config::settings::CorsSettings;
use crate::presentation::handlers::analyze_handler;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Extension, Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// 创建应用路由
///
/// # 参数
///
/// * `use_case` - 分析用例，每个请求共享同一个无状态实例
/// * `cors` - 跨域配置
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(use_case: Arc<AnalyzeUrlUseCase>, cors: &CorsSettings) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/analyze", post(analyze_handler::analyze))
        .layer(Extension(use_case))
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// 根据配置构建跨域中间件，`*` 表示允许任意来源
fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if settings.allowed_origins.iter().any(|origin| origin == "*") {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {}: {}", origin, e);
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(origins))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回固定的 `{"status": "ok"}`
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
