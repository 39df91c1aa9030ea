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
use scraper::Html;
use thiserror::Error;
use url::Url;

/// 页面获取错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 响应状态码不是 200
    #[error("Non-success status {status} for {url}")]
    NonSuccessStatus { url: String, status: u16 },
    /// 请求失败
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl FetchError {
    /// 收到的状态码（仅 `NonSuccessStatus`）
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::NonSuccessStatus { status, .. } => Some(*status),
            FetchError::RequestFailed(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// 已解析的页面
///
/// 创建后不可变，只在单个流水线阶段内使用
pub struct Document {
    url: Url,
    html: Html,
}

impl Document {
    /// 解析页面内容
    pub fn parse(url: Url, content: &str) -> Self {
        Self {
            url,
            html: Html::parse_document(content),
        }
    }

    /// 页面自身的URL
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// 解析后的文档树
    pub fn html(&self) -> &Html {
        &self.html
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document").field("url", &self.url.as_str()).finish()
    }
}

/// 页面获取特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取并解析一个页面
    ///
    /// 非 200 状态码返回 `FetchError::NonSuccessStatus`，不重试
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError>;

    /// 获取器名称
    fn name(&self) -> &'static str;
}
