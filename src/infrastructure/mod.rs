// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施模块
///
/// 提供指标导出和文本向量化等外部能力
pub mod metrics;
pub mod vectorizer;
