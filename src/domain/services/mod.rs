// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 正文抽取（article_extractor）：抓取页面并拼接段落文本，校验最少词数
/// - 关键词打分（keyword_scorer）：单文档 TF-IDF 打分、排序、截断和权重归一化
pub mod article_extractor;
pub mod keyword_scorer;
