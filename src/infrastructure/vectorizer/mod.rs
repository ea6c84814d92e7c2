// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 文本向量化模块
///
/// 提供分词、停用词过滤和 TF-IDF 计算，供关键词打分使用
pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;

pub use tfidf::{TfidfMatrix, TfidfVectorizer, VectorizerConfig, VectorizerError};
