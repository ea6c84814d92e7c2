// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 文章正文（source_document）：抽取并校验后的单文档文本
/// - 关键词（keyword）：带可视化权重的关键词及其有序集合
pub mod keyword;
pub mod source_document;
