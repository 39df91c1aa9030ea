// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::site::SiteProfile;
use crate::domain::models::WordRecord;
use crate::engines::traits::{Document, PageFetcher};
use crate::utils::errors::{CrawlError, StructureError};
use scraper::{ElementRef, Selector};
use std::sync::Arc;
use url::Url;

/// 词条提取服务
///
/// 获取词条页并从固定的结构位置提取声调、词目、音读和可选的释义
pub struct EntryExtractor {
    fetcher: Arc<dyn PageFetcher>,
    site: Arc<SiteProfile>,
}

impl EntryExtractor {
    pub fn new(fetcher: Arc<dyn PageFetcher>, site: Arc<SiteProfile>) -> Self {
        Self { fetcher, site }
    }

    /// 获取词条页并提取记录
    ///
    /// # 参数
    ///
    /// * `url` - 词条页绝对URL
    ///
    /// # 返回值
    ///
    /// * `Ok(WordRecord)` - 提取到的记录
    /// * `Err(CrawlError)` - 获取失败或缺少必需字段
    pub async fn extract(&self, url: &Url) -> Result<WordRecord, CrawlError> {
        let doc = self.fetcher.fetch(url).await?;
        Ok(self.parse(&doc)?)
    }

    /// 从已解析的词条页提取记录
    ///
    /// 声调在整个文档中查找，其余字段在主表格内查找。
    /// 释义缺失时返回 `meaning: None`
    pub fn parse(&self, doc: &Document) -> Result<WordRecord, StructureError> {
        let layout = &self.site.layout;
        let missing = |field: &'static str| StructureError::MissingRequiredField {
            field,
            url: doc.url().to_string(),
        };

        let tone = doc
            .html()
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|e| {
                e.value()
                    .attr("href")
                    .is_some_and(|href| layout.tone_href.is_match(href))
            })
            .map(element_text)
            .ok_or_else(|| missing("tone"))?;

        let table = doc.html().select(&layout.results_table).next();
        let within_table = |selector: &Selector| {
            table.and_then(|t| t.select(selector).next()).map(element_text)
        };

        let word = within_table(&layout.word).ok_or_else(|| missing("word"))?;
        let pronunciation =
            within_table(&layout.pronunciation).ok_or_else(|| missing("pronunciation"))?;
        let meaning = within_table(&layout.meaning);

        Ok(WordRecord::new(tone, word, pronunciation, meaning))
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
#[path = "entry_service_test.rs"]
mod tests;
