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

use crate::engines::traits::{EngineError, FetchRequest, FetchResponse, PageFetcher};
use async_trait::async_trait;
use encoding_rs::{Encoding, UTF_8};
use std::time::Instant;
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎
pub struct ReqwestEngine;

#[async_trait]
impl PageFetcher for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// # 参数
    ///
    /// * `request` - 抓取请求
    ///
    /// # 返回值
    ///
    /// * `Ok(FetchResponse)` - 抓取响应，包括非 2xx 状态
    /// * `Err(EngineError)` - 连接失败、超时或响应体过大
    async fn fetch(&self, request: &FetchRequest) -> Result<FetchResponse, EngineError> {
        // Each request gets a fresh client so no pooled connection outlives the analysis
        let client = reqwest::Client::builder()
            .user_agent(request.user_agent.as_str())
            .timeout(request.timeout)
            .build()
            .map_err(|e| EngineError::ClientBuild(e.to_string()))?;

        let start = Instant::now();
        let mut response = client
            .get(&request.url)
            .send()
            .await
            .map_err(|e| classify(e, request))?;

        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("text/html")
            .to_string();

        if let Some(length) = response.content_length() {
            if length as usize > request.max_body_bytes {
                return Err(EngineError::BodyTooLarge(request.max_body_bytes));
            }
        }

        // Chunked responses carry no Content-Length, so the cap is checked while the body streams in
        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| classify(e, request))? {
            if body.len() + chunk.len() > request.max_body_bytes {
                return Err(EngineError::BodyTooLarge(request.max_body_bytes));
            }
            body.extend_from_slice(&chunk);
        }

        let content = decode_body(&body, &content_type);

        let response_time_ms = start.elapsed().as_millis() as u64;
        debug!(
            url = %request.url,
            status = status_code,
            bytes = content.len(),
            elapsed_ms = response_time_ms,
            "Page fetched"
        );

        Ok(FetchResponse {
            status_code,
            content,
            content_type,
            response_time_ms,
        })
    }

    /// 获取引擎名称
    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// 按 Content-Type 声明的字符集解码响应体
///
/// 未声明或无法识别时按 UTF-8 处理，BOM 优先于声明，非法字节替换为 U+FFFD
fn decode_body(body: &[u8], content_type: &str) -> String {
    let encoding = content_type
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("charset"))
        .and_then(|(_, label)| Encoding::for_label(label.trim().trim_matches('"').as_bytes()))
        .unwrap_or(UTF_8);

    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn classify(err: reqwest::Error, request: &FetchRequest) -> EngineError {
    if err.is_timeout() {
        EngineError::Timeout(request.timeout)
    } else {
        EngineError::RequestFailed(err)
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
