// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 错误类型（errors）：抓取、内容校验和打分阶段的失败分类
/// - 领域模型（models）：文章正文和关键词集合
/// - 服务（services）：正文抽取与关键词打分
///
/// 领域层只通过特质依赖抓取引擎和向量化器，不关心具体实现。
pub mod errors;
pub mod models;
pub mod services;
