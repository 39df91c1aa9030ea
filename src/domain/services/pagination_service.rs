// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::site::SiteProfile;
use crate::domain::models::Link;
use crate::domain::services::link_extractor::{LinkExtractor, LinkPredicate};
use crate::engines::traits::{Document, PageFetcher};
use crate::utils::errors::CrawlError;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// 分页服务
///
/// 汇总一个列表页及其所有续页上的词条链接
pub struct Paginator {
    fetcher: Arc<dyn PageFetcher>,
    site: Arc<SiteProfile>,
    links: LinkExtractor,
    entries: LinkPredicate,
    pages: LinkPredicate,
}

impl Paginator {
    /// 创建分页服务
    ///
    /// 词条链接取自主表格，分页链接在整个文档中按 href 模式查找，
    /// 两者都以站点根URL为基准解析
    pub fn new(fetcher: Arc<dyn PageFetcher>, site: Arc<SiteProfile>) -> Self {
        let links = LinkExtractor::new(site.base_url.clone());
        let entries = LinkPredicate::within_first(site.layout.results_table.clone());
        let pages = LinkPredicate::anywhere().with_href(site.layout.pagination_href.clone());
        Self {
            fetcher,
            site,
            links,
            entries,
            pages,
        }
    }

    /// 收集列表页的全部词条链接
    ///
    /// 结果顺序：基础页词条，然后按发现顺序依次为各续页的词条。
    /// 任何一页获取失败都会中止整个列表页，不返回部分结果
    ///
    /// # 参数
    ///
    /// * `list_url` - 列表页绝对URL
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Link>)` - 所有词条链接
    /// * `Err(CrawlError)` - 获取失败
    pub async fn collect_entry_links(&self, list_url: &Url) -> Result<Vec<Link>, CrawlError> {
        let base = self.fetcher.fetch(list_url).await?;
        let (mut entries, continuations) = self.scan(base);

        debug!(
            list = %list_url,
            base_entries = entries.len(),
            continuation_pages = continuations.len(),
            "List page scanned"
        );

        for page in continuations {
            let doc = self.fetcher.fetch(&page.url).await?;
            entries.extend(self.entry_links(&doc));
        }

        Ok(entries)
    }

    /// 基础页的词条链接与续页链接
    fn scan(&self, doc: Document) -> (Vec<Link>, Vec<Link>) {
        (self.entry_links(&doc), self.continuation_links(&doc))
    }

    /// 页面主表格内的词条链接
    pub fn entry_links(&self, doc: &Document) -> Vec<Link> {
        self.links.extract(doc, &self.entries)
    }

    /// 续页链接
    ///
    /// 只保留显示文字含有数字的分页链接，排除“下一页”等导航按钮
    pub fn continuation_links(&self, doc: &Document) -> Vec<Link> {
        self.links
            .extract(doc, &self.pages)
            .into_iter()
            .filter(|link| self.site.layout.page_number.is_match(&link.text))
            .collect()
    }
}

#[cfg(test)]
#[path = "pagination_service_test.rs"]
mod tests;
