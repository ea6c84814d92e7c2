// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 分词与 n-gram 生成
//!
//! 文本先转为小写，再按 `\b\w\w+\b` 切出至少两个字符的词，
//! 去掉停用词后在剩余序列上生成连续 n-gram。

use once_cell::sync::Lazy;
use regex::Regex;
use std::ops::RangeInclusive;

use super::stop_words::is_stop_word;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("token pattern is valid"));

/// 切词并过滤停用词
pub fn tokenize(text: &str, remove_stop_words: bool) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !(remove_stop_words && is_stop_word(token)))
        .map(str::to_string)
        .collect()
}

/// 在词序列上生成指定长度范围内的 n-gram，词之间以单个空格连接
///
/// 输出顺序：先所有 unigram，再所有 bigram，依此类推
pub fn ngrams(tokens: &[String], range: RangeInclusive<usize>) -> Vec<String> {
    let mut out = Vec::new();
    for n in range {
        if n == 0 || n > tokens.len() {
            continue;
        }
        out.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    out
}
