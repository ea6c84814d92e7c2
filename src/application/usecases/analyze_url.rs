// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Instant;

use tracing::{info, warn};
use validator::Validate;

use crate::application::dto::analyze_request::{AnalyzeRequestDto, AnalyzeResponseDto};
use crate::domain::errors::AnalysisError;
use crate::domain::services::article_extractor::ArticleExtractor;
use crate::domain::services::keyword_scorer::{ScorerFactory, DEFAULT_TOP_K};
use crate::infrastructure::metrics::{
    ANALYZE_DURATION_SECONDS, ANALYZE_FAILURES_TOTAL, ANALYZE_REQUESTS_TOTAL, KEYWORDS_RETURNED,
};

// === Section: Use Case Definition ===

/// 网页关键词分析用例
///
/// 抽取正文后交给新建的打分器，请求之间不共享任何可变状态
pub struct AnalyzeUrlUseCase {
    extractor: ArticleExtractor,
    scorer_factory: Arc<dyn ScorerFactory>,
    top_k: usize,
}

// === Section: Implementation ===

impl AnalyzeUrlUseCase {
    pub fn new(extractor: ArticleExtractor, scorer_factory: Arc<dyn ScorerFactory>) -> Self {
        Self {
            extractor,
            scorer_factory,
            top_k: DEFAULT_TOP_K,
        }
    }

    pub async fn execute(
        &self,
        request_dto: AnalyzeRequestDto,
    ) -> Result<AnalyzeResponseDto, AnalysisError> {
        metrics::counter!(ANALYZE_REQUESTS_TOTAL).increment(1);
        let start = Instant::now();

        let result = self.run(request_dto).await;

        metrics::histogram!(ANALYZE_DURATION_SECONDS).record(start.elapsed().as_secs_f64());
        if let Err(e) = &result {
            metrics::counter!(ANALYZE_FAILURES_TOTAL, "kind" => e.kind()).increment(1);
        }

        result
    }

    async fn run(&self, request_dto: AnalyzeRequestDto) -> Result<AnalyzeResponseDto, AnalysisError> {
        request_dto
            .validate()
            .map_err(|e| AnalysisError::Validation(e.to_string()))?;

        let url = request_dto.url;
        let document = self.extractor.extract(&url).await?;

        let scorer = self.scorer_factory.create();
        let keywords = scorer.score(document.text(), self.top_k).map_err(|e| {
            warn!(url = %url, scorer = scorer.name(), "Keyword scoring failed: {}", e);
            e
        })?;

        metrics::histogram!(KEYWORDS_RETURNED).record(keywords.len() as f64);
        info!(
            url = %url,
            words = document.word_count(),
            keywords = keywords.len(),
            "Analysis completed"
        );

        Ok(AnalyzeResponseDto::from(keywords))
    }
}
