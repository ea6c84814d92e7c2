// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::utils::text_processing::collapse_whitespace;

static PARAGRAPH_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("p").expect("paragraph selector is valid"));

/// 提取网页中所有段落的可见文本
///
/// 按文档顺序取每个 `<p>` 元素下的全部文本节点，段落之间以单个空格连接，
/// 最后折叠空白。HTML 实体由解析器负责解码。
///
/// # 参数
///
/// * `html` - 原始网页内容
///
/// # 返回值
///
/// 规范化后的正文，没有段落时返回空字符串
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let joined = document
        .select(&PARAGRAPH_SELECTOR)
        .map(|element| element.text().collect::<Vec<_>>().join(""))
        .collect::<Vec<_>>()
        .join(" ");

    collapse_whitespace(&joined)
}
