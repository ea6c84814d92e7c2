// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 文本规范化工具
//!
//! 提供空白折叠和词数统计，抽取器和文档校验共用同一套规则：
//! 任意连续空白（含换行、制表符、不换行空格）折叠为单个空格并去除首尾空白。

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// 折叠连续空白并去除首尾空白
///
/// 对已经规范化的文本再次调用不会产生变化
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// 以空白分隔统计词数
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
