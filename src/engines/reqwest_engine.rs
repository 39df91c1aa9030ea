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

use crate::config::settings::HttpSettings;
use crate::engines::traits::{Document, FetchError, PageFetcher};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::{Duration, Instant};
use tracing::debug;
use url::Url;

/// 页面获取引擎
///
/// 基于reqwest实现的HTTP页面获取器，每次请求使用独立连接
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    /// 根据HTTP配置创建获取器
    ///
    /// # 参数
    ///
    /// * `settings` - HTTP配置（User-Agent、可选超时）
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestFetcher)` - 获取器
    /// * `Err(FetchError)` - 客户端构建失败
    pub fn new(settings: &HttpSettings) -> Result<Self, FetchError> {
        // No idle pooling: each fetch owns its connection for the duration of the call
        let mut builder = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .pool_max_idle_per_host(0);

        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    /// 执行HTTP获取
    ///
    /// # 参数
    ///
    /// * `url` - 绝对URL
    ///
    /// # 返回值
    ///
    /// * `Ok(Document)` - 解析后的页面
    /// * `Err(FetchError)` - 请求失败或状态码不是 200
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        let start = Instant::now();
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        debug!(
            url = %url,
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Page fetched"
        );

        if status != StatusCode::OK {
            return Err(FetchError::NonSuccessStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content = response.text().await?;
        Ok(Document::parse(url.clone(), &content))
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
