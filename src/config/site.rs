// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::{LayoutSettings, Settings};
use crate::utils::errors::CrawlError;
use regex::Regex;
use scraper::Selector;
use url::Url;

/// 编译后的页面结构查询
#[derive(Debug, Clone)]
pub struct SiteLayout {
    /// 主结果表格（取文档中第一个匹配元素）
    pub results_table: Selector,
    pub index_href: Regex,
    pub pagination_href: Regex,
    pub page_number: Regex,
    pub tone_href: Regex,
    pub word: Selector,
    pub pronunciation: Selector,
    pub meaning: Selector,
}

impl SiteLayout {
    /// 从配置编译选择器与正则
    ///
    /// # 返回值
    ///
    /// * `Ok(SiteLayout)` - 编译后的结构查询
    /// * `Err(CrawlError)` - 选择器或正则无效
    pub fn from_settings(layout: &LayoutSettings) -> Result<Self, CrawlError> {
        Ok(Self {
            results_table: parse_selector(&layout.results_table)?,
            index_href: Regex::new(&layout.index_href_pattern)?,
            pagination_href: Regex::new(&layout.pagination_href_pattern)?,
            page_number: Regex::new(&layout.page_number_pattern)?,
            tone_href: Regex::new(&layout.tone_href_pattern)?,
            word: parse_selector(&layout.word_selector)?,
            pronunciation: parse_selector(&layout.pronunciation_selector)?,
            meaning: parse_selector(&layout.meaning_selector)?,
        })
    }
}

/// 站点配置
///
/// 站点根URL与页面结构只在此处定义一次，并显式传递给每个需要解析链接的组件
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// 词条链接与分页链接的解析基准
    pub base_url: Url,
    pub layout: SiteLayout,
}

impl SiteProfile {
    pub fn new(base_url: Url, layout: SiteLayout) -> Self {
        Self { base_url, layout }
    }

    /// 从应用配置构建站点配置
    pub fn from_settings(settings: &Settings) -> Result<Self, CrawlError> {
        let base_url = Url::parse(&settings.site.base_url)
            .map_err(|e| CrawlError::invalid_url(&settings.site.base_url, e))?;
        let layout = SiteLayout::from_settings(&settings.layout)?;
        Ok(Self::new(base_url, layout))
    }
}

pub(crate) fn parse_selector(css: &str) -> Result<Selector, CrawlError> {
    Selector::parse(css).map_err(|e| CrawlError::InvalidSelector(format!("{}: {:?}", css, e)))
}

/// 测试用站点配置（默认页面结构）
#[cfg(test)]
pub(crate) fn test_profile(base_url: &str) -> SiteProfile {
    SiteProfile::new(
        Url::parse(base_url).unwrap(),
        SiteLayout::from_settings(&LayoutSettings::default()).unwrap(),
    )
}
