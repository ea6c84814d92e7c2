// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 页面抓取超时
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// 响应体大小上限（字节）
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 超时
    #[error("Timeout after {0:?}")]
    Timeout(Duration),
    /// 响应体过大
    #[error("Response body exceeds {0} bytes")]
    BodyTooLarge(usize),
    /// HTTP 客户端构建失败（例如 User-Agent 配置非法）
    #[error("HTTP client misconfigured: {0}")]
    ClientBuild(String),
}

/// 抓取请求
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// 目标URL
    pub url: String,
    /// 超时时间
    pub timeout: Duration,
    /// User-Agent 请求头
    pub user_agent: String,
    /// 响应体大小上限
    pub max_body_bytes: usize,
}

impl FetchRequest {
    /// 使用固定超时和大小上限创建请求
    pub fn new(url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: FETCH_TIMEOUT,
            user_agent: user_agent.into(),
            max_body_bytes: MAX_BODY_BYTES,
        }
    }
}

/// 抓取响应
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP状态码
    pub status_code: u16,
    /// 响应内容（已按字符集解码）
    pub content: String,
    /// 内容类型
    pub content_type: String,
    /// 响应时间（毫秒）
    pub response_time_ms: u64,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// 页面抓取特质
///
/// 非 2xx 状态码不视为错误，由调用方根据 `status_code` 判断
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 执行单次 GET 请求，不做重试
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError>;

    /// 引擎名称
    fn name(&self) -> &'static str;
}
