// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{Document, FetchError, PageFetcher};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// 测试用的内存页面获取器
///
/// 按URL返回预置页面，并记录每一次请求
#[derive(Default)]
pub struct FixtureFetcher {
    pages: HashMap<String, (u16, String)>,
    requested: Mutex<Vec<String>>,
}

impl FixtureFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一个返回 200 的页面
    pub fn page(mut self, url: &str, html: impl Into<String>) -> Self {
        self.pages.insert(url.to_string(), (200, html.into()));
        self
    }

    /// 预置一个返回指定状态码的页面
    pub fn status(mut self, url: &str, status: u16) -> Self {
        self.pages.insert(url.to_string(), (status, String::new()));
        self
    }

    /// 已请求的URL（按请求顺序）
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for FixtureFetcher {
    async fn fetch(&self, url: &Url) -> Result<Document, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());

        // Unknown pages behave like a missing page on the real site
        let (status, html) = self
            .pages
            .get(url.as_str())
            .cloned()
            .unwrap_or((404, String::new()));

        if status != 200 {
            return Err(FetchError::NonSuccessStatus {
                url: url.to_string(),
                status,
            });
        }
        Ok(Document::parse(url.clone(), &html))
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}
