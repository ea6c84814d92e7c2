// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::{BTreeMap, HashMap};
use std::ops::RangeInclusive;
use thiserror::Error;
use tracing::debug;

use super::tokenizer::{ngrams, tokenize};

/// 向量化错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VectorizerError {
    /// 过滤后没有任何特征
    #[error("empty vocabulary; documents may only contain stop words")]
    EmptyVocabulary,
    /// 配置不合法
    #[error("invalid vectorizer configuration: {0}")]
    InvalidConfig(String),
}

/// 向量化配置
#[derive(Debug, Clone)]
pub struct VectorizerConfig {
    /// n-gram 长度范围
    pub ngram_range: RangeInclusive<usize>,
    /// 词表上限，按语料总词频保留
    pub max_features: Option<usize>,
    /// 是否去除英文停用词
    pub remove_stop_words: bool,
    /// 使用 `1 + ln(tf)` 代替原始词频
    pub sublinear_tf: bool,
    /// 平滑 IDF：`ln((1 + n) / (1 + df)) + 1`
    pub smooth_idf: bool,
    /// 每行做 L2 归一化
    pub l2_normalize: bool,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            ngram_range: 1..=1,
            max_features: None,
            remove_stop_words: false,
            sublinear_tf: false,
            smooth_idf: true,
            l2_normalize: true,
        }
    }
}

/// TF-IDF 向量化器
///
/// 每次 `fit_transform` 都从零构建词表，实例之间不共享任何状态
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
}

/// 向量化结果：按字典序排列的词表和每个文档的稠密行
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    vocabulary: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn n_documents(&self) -> usize {
        self.rows.len()
    }

    /// 返回指定文档中非零特征及其分数，按词表顺序
    pub fn document_scores(&self, doc: usize) -> Vec<(&str, f64)> {
        match self.rows.get(doc) {
            Some(row) => self
                .vocabulary
                .iter()
                .zip(row.iter())
                .filter(|(_, score)| **score > 0.0)
                .map(|(term, score)| (term.as_str(), *score))
                .collect(),
            None => Vec::new(),
        }
    }
}

impl TfidfVectorizer {
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    /// 在给定语料上学习词表并计算 TF-IDF 矩阵
    ///
    /// # 返回值
    ///
    /// * `Ok(TfidfMatrix)` - 至少包含一个特征
    /// * `Err(VectorizerError)` - 配置非法或词表为空
    pub fn fit_transform(&self, documents: &[&str]) -> Result<TfidfMatrix, VectorizerError> {
        self.validate()?;

        let counts: Vec<HashMap<String, usize>> = documents
            .iter()
            .map(|doc| self.count_features(doc))
            .collect();

        // Corpus-wide term and document frequencies, ordered for deterministic output.
        let mut corpus_tf: BTreeMap<&str, usize> = BTreeMap::new();
        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for doc_counts in &counts {
            for (term, count) in doc_counts {
                *corpus_tf.entry(term.as_str()).or_insert(0) += count;
                *doc_freq.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        if corpus_tf.is_empty() {
            return Err(VectorizerError::EmptyVocabulary);
        }

        let vocabulary = self.limit_features(&corpus_tf);
        debug!(
            "TF-IDF vocabulary built: {} candidates, {} kept",
            corpus_tf.len(),
            vocabulary.len()
        );

        let n_docs = documents.len() as f64;
        let idf: Vec<f64> = vocabulary
            .iter()
            .map(|term| {
                let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
                if self.config.smooth_idf {
                    ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
                } else {
                    (n_docs / df).ln() + 1.0
                }
            })
            .collect();

        let rows = counts
            .iter()
            .map(|doc_counts| {
                let mut row: Vec<f64> = vocabulary
                    .iter()
                    .zip(idf.iter())
                    .map(|(term, idf)| match doc_counts.get(term) {
                        Some(&count) => self.term_frequency(count) * idf,
                        None => 0.0,
                    })
                    .collect();

                if self.config.l2_normalize {
                    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
                    if norm > 0.0 {
                        row.iter_mut().for_each(|v| *v /= norm);
                    }
                }
                row
            })
            .collect();

        Ok(TfidfMatrix { vocabulary, rows })
    }

    fn validate(&self) -> Result<(), VectorizerError> {
        let range = &self.config.ngram_range;
        if *range.start() == 0 || range.start() > range.end() {
            return Err(VectorizerError::InvalidConfig(format!(
                "ngram range {}..={} is not valid",
                range.start(),
                range.end()
            )));
        }
        if self.config.max_features == Some(0) {
            return Err(VectorizerError::InvalidConfig(
                "max_features must be positive".to_string(),
            ));
        }
        Ok(())
    }

    fn count_features(&self, document: &str) -> HashMap<String, usize> {
        let tokens = tokenize(document, self.config.remove_stop_words);
        let mut counts = HashMap::new();
        for gram in ngrams(&tokens, self.config.ngram_range.clone()) {
            *counts.entry(gram).or_insert(0) += 1;
        }
        counts
    }

    /// 按语料总词频截断词表，同频按字典序，结果按字典序返回
    fn limit_features(&self, corpus_tf: &BTreeMap<&str, usize>) -> Vec<String> {
        let mut features: Vec<(&str, usize)> =
            corpus_tf.iter().map(|(term, tf)| (*term, *tf)).collect();

        if let Some(limit) = self.config.max_features {
            if features.len() > limit {
                features.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
                features.truncate(limit);
                features.sort_by(|a, b| a.0.cmp(b.0));
            }
        }

        features.into_iter().map(|(term, _)| term.to_string()).collect()
    }

    fn term_frequency(&self, count: usize) -> f64 {
        if self.config.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }
}
