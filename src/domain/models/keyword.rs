// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 最低可视化权重
pub const MIN_WEIGHT: f64 = 0.2;
/// 最高可视化权重
pub const MAX_WEIGHT: f64 = 1.0;

/// 带原始分数的候选词
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

impl ScoredTerm {
    pub fn new(term: impl Into<String>, score: f64) -> Self {
        Self {
            term: term.into(),
            score,
        }
    }
}

/// 关键词及其可视化权重
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordItem {
    /// 单词或双词短语
    pub token: String,
    /// 取值范围 [0.2, 1.0]
    pub weight: f64,
}

/// 按原始分数降序排列的关键词集合
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordSet {
    items: Vec<KeywordItem>,
}

impl KeywordSet {
    /// 由已排序的候选词构造关键词集合
    ///
    /// 调用方负责排序和截断；这里把分数线性映射到
    /// `0.2 + 0.8 * score / max_score`，最高分为 0 时按 1.0 处理
    pub fn from_ranked(ranked: Vec<ScoredTerm>) -> Self {
        let max_score = match ranked.first() {
            Some(top) if top.score > 0.0 => top.score,
            _ => 1.0,
        };
        let span = MAX_WEIGHT - MIN_WEIGHT;

        let items = ranked
            .into_iter()
            .map(|scored| KeywordItem {
                weight: (MIN_WEIGHT + span * (scored.score / max_score))
                    .clamp(MIN_WEIGHT, MAX_WEIGHT),
                token: scored.term,
            })
            .collect();

        Self { items }
    }

    pub fn items(&self) -> &[KeywordItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl IntoIterator for KeywordSet {
    type Item = KeywordItem;
    type IntoIter = std::vec::IntoIter<KeywordItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
