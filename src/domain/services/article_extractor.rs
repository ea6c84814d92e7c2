// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::errors::{AnalysisError, FetchError};
use crate::domain::models::source_document::SourceDocument;
use crate::engines::traits::{EngineError, FetchRequest, PageFetcher};
use crate::utils::html_text::extract_paragraph_text;

/// 正文抽取服务
///
/// 抓取页面后拼接所有段落文本，词数不足时拒绝
pub struct ArticleExtractor {
    fetcher: Arc<dyn PageFetcher>,
    user_agent: String,
}

impl ArticleExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>, user_agent: impl Into<String>) -> Self {
        Self {
            fetcher,
            user_agent: user_agent.into(),
        }
    }

    /// 抽取文章正文
    ///
    /// # 参数
    ///
    /// * `url` - 目标页面地址，不做格式校验
    ///
    /// # 返回值
    ///
    /// * `Ok(SourceDocument)` - 至少 50 个词的正文
    /// * `Err(AnalysisError::Fetch)` - 网络失败、超时或非 2xx 状态
    /// * `Err(AnalysisError::Content)` - 正文为空或词数不足
    /// * `Err(AnalysisError::Internal)` - HTTP 客户端配置非法
    pub async fn extract(&self, url: &str) -> Result<SourceDocument, AnalysisError> {
        let request = FetchRequest::new(url, self.user_agent.as_str());

        let response = self.fetcher.fetch(&request).await.map_err(|e| {
            warn!(url, engine = self.fetcher.name(), "Fetch failed: {}", e);
            AnalysisError::from(e)
        })?;

        metrics::histogram!(crate::infrastructure::metrics::FETCH_DURATION_SECONDS)
            .record(response.response_time_ms as f64 / 1000.0);

        if !response.is_success() {
            warn!(url, status = response.status_code, "Upstream returned non-success status");
            return Err(FetchError::Status(response.status_code).into());
        }

        let text = extract_paragraph_text(&response.content);
        let document = SourceDocument::new(&text)?;
        debug!(url, words = document.word_count(), "Article text extracted");

        Ok(document)
    }
}

impl From<EngineError> for AnalysisError {
    fn from(err: EngineError) -> Self {
        match err {
            // A client that cannot be built is a server misconfiguration, not a bad URL
            EngineError::ClientBuild(reason) => AnalysisError::Internal(reason),
            EngineError::BodyTooLarge(limit) => FetchError::BodyTooLarge(limit).into(),
            other => FetchError::Transport(other.to_string()).into(),
        }
    }
}

#[cfg(test)]
#[path = "article_extractor_test.rs"]
mod tests;
