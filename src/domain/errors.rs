// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 页面抓取错误
///
/// URL 不可达、请求超时或返回非成功状态码
#[derive(Error, Debug)]
pub enum FetchError {
    /// 传输层失败（连接错误、超时、非法URL等）
    #[error("failed to fetch or retrieve URL: {0}")]
    Transport(String),
    /// 服务端返回非 2xx 状态码
    #[error("failed to fetch or retrieve URL: upstream responded with status {0}")]
    Status(u16),
    /// 响应体超过上限
    #[error("failed to fetch or retrieve URL: response body exceeds {0} bytes")]
    BodyTooLarge(usize),
}

/// 页面内容不足错误
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("not enough text found: {found} words, at least {required} required")]
    NotEnoughText { found: usize, required: usize },
}

/// 关键词提取错误
#[derive(Error, Debug)]
pub enum ScoringError {
    #[error("could not extract keywords")]
    NoKeywords,
}

/// 分析流程错误
///
/// 汇总请求校验、抓取、内容校验和打分阶段的失败，
/// 其余未分类的协作方失败归入 `Internal`
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error(transparent)]
    Scoring(#[from] ScoringError),

    /// 请求参数校验失败
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// 用于日志和指标标签的错误类别
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::Fetch(_) => "fetch",
            AnalysisError::Content(_) => "content",
            AnalysisError::Scoring(_) => "scoring",
            AnalysisError::Validation(_) => "validation",
            AnalysisError::Internal(_) => "internal",
        }
    }
}
