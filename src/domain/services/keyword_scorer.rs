// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::cmp::Ordering;
use tracing::debug;

use crate::domain::errors::{AnalysisError, ScoringError};
use crate::domain::models::keyword::{KeywordSet, ScoredTerm};
use crate::infrastructure::vectorizer::{TfidfVectorizer, VectorizerConfig, VectorizerError};

/// 默认返回的关键词数量
pub const DEFAULT_TOP_K: usize = 60;
/// 词表上限
pub const MAX_VOCABULARY: usize = 2000;

/// 关键词打分策略
///
/// 输入清洗后的正文，输出按分数降序、权重已归一化的关键词集合
pub trait KeywordScorer: Send {
    fn score(&self, text: &str, top_k: usize) -> Result<KeywordSet, AnalysisError>;

    fn name(&self) -> &'static str;
}

/// 打分器工厂
///
/// 每次请求创建新的打分器，词表与分数状态不跨请求共享
pub trait ScorerFactory: Send + Sync {
    fn create(&self) -> Box<dyn KeywordScorer>;
}

/// 单文档 TF-IDF 打分器
///
/// 候选为去停用词后的 unigram 和 bigram，重叠的短语与单词各自独立保留
pub struct TfIdfKeywordScorer {
    vectorizer: TfidfVectorizer,
}

impl TfIdfKeywordScorer {
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(VectorizerConfig {
                ngram_range: 1..=2,
                max_features: Some(MAX_VOCABULARY),
                remove_stop_words: true,
                ..VectorizerConfig::default()
            }),
        }
    }

    pub fn with_vectorizer(vectorizer: TfidfVectorizer) -> Self {
        Self { vectorizer }
    }
}

impl Default for TfIdfKeywordScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordScorer for TfIdfKeywordScorer {
    fn score(&self, text: &str, top_k: usize) -> Result<KeywordSet, AnalysisError> {
        let matrix = match self.vectorizer.fit_transform(&[text]) {
            Ok(matrix) => matrix,
            Err(VectorizerError::EmptyVocabulary) => return Err(ScoringError::NoKeywords.into()),
            Err(e) => return Err(AnalysisError::Internal(e.to_string())),
        };

        let mut ranked: Vec<ScoredTerm> = matrix
            .document_scores(0)
            .into_iter()
            .map(|(term, score)| ScoredTerm::new(term, score))
            .collect();

        rank_terms(&mut ranked);
        ranked.truncate(top_k);

        if ranked.is_empty() {
            return Err(ScoringError::NoKeywords.into());
        }

        debug!(
            candidates = matrix.vocabulary().len(),
            kept = ranked.len(),
            top = %ranked[0].term,
            "Keywords scored"
        );

        Ok(KeywordSet::from_ranked(ranked))
    }

    fn name(&self) -> &'static str {
        "tfidf"
    }
}

/// 创建 [`TfIdfKeywordScorer`] 的工厂
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorerFactory;

impl ScorerFactory for TfIdfScorerFactory {
    fn create(&self) -> Box<dyn KeywordScorer> {
        Box::new(TfIdfKeywordScorer::new())
    }
}

/// 分数降序，同分按字典序
pub fn rank_terms(terms: &mut [ScoredTerm]) {
    terms.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.term.cmp(&b.term))
    });
}

#[cfg(test)]
#[path = "keyword_scorer_test.rs"]
mod tests;
