// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::dto::analyze_request::{AnalyzeRequestDto, AnalyzeResponseDto};
use crate::application::usecases::analyze_url::AnalyzeUrlUseCase;
use crate::presentation::errors::AppError;

/// 处理分析请求
///
/// # 参数
///
/// * `use_case` - 分析用例实例
/// * `payload` - 包含目标URL的请求体
///
/// # 返回值
///
/// 成功时返回按权重降序的关键词列表
///
/// # 错误
///
/// - URL 为空或抓取失败：400
/// - 正文不足或无法提取关键词：422
pub async fn analyze(
    Extension(use_case): Extension<Arc<AnalyzeUrlUseCase>>,
    Json(payload): Json<AnalyzeRequestDto>,
) -> Result<Json<AnalyzeResponseDto>, AppError> {
    let response = use_case.execute(payload).await?;
    Ok(Json(response))
}
