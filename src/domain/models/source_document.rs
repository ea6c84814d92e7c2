// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::errors::ContentError;
use crate::utils::text_processing::{collapse_whitespace, word_count};

/// 文章最少词数，低于该值的单文档 TF-IDF 排名不稳定
pub const MIN_WORD_COUNT: usize = 50;

/// 清洗后的文章正文
///
/// 只能通过 [`SourceDocument::new`] 构造，保证空白已规范化且词数不少于
/// [`MIN_WORD_COUNT`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
    word_count: usize,
}

impl SourceDocument {
    /// 校验并创建文档
    ///
    /// # 参数
    ///
    /// * `text` - 原始拼接文本，内部会再做一次空白折叠
    ///
    /// # 返回值
    ///
    /// * `Ok(SourceDocument)` - 词数满足要求
    /// * `Err(ContentError)` - 文本为空或词数不足
    pub fn new(text: &str) -> Result<Self, ContentError> {
        let text = collapse_whitespace(text);
        let word_count = word_count(&text);

        if word_count < MIN_WORD_COUNT {
            return Err(ContentError::NotEnoughText {
                found: word_count,
                required: MIN_WORD_COUNT,
            });
        }

        Ok(Self { text, word_count })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}
