// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::keyword::{KeywordItem, KeywordSet};

/// 分析请求数据传输对象
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct AnalyzeRequestDto {
    /// 要分析的网页URL
    #[validate(length(min = 1, message = "URL cannot be empty"))]
    pub url: String,
}

/// 分析响应，按权重降序
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct AnalyzeResponseDto {
    pub words: Vec<WordItemDto>,
}

#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub struct WordItemDto {
    pub word: String,
    pub weight: f64,
}

impl From<KeywordItem> for WordItemDto {
    fn from(item: KeywordItem) -> Self {
        Self {
            word: item.token,
            weight: item.weight,
        }
    }
}

impl From<KeywordSet> for AnalyzeResponseDto {
    fn from(set: KeywordSet) -> Self {
        Self {
            words: set.into_iter().map(WordItemDto::from).collect(),
        }
    }
}
