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

use crate::{
    config::site::SiteProfile,
    domain::{
        models::WordRecord,
        services::{
            collector_service::{Decision, FilteringCollector},
            entry_service::EntryExtractor,
            index_service::IndexEnumerator,
            pagination_service::Paginator,
        },
    },
    engines::traits::PageFetcher,
    utils::errors::CrawlError,
};
use futures::{pin_mut, TryStreamExt};
use std::sync::Arc;
use tracing::info;
use url::Url;

/// 一次分类爬取的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlSummary {
    /// 列表页数量
    pub list_pages: usize,
    /// 发现的词条链接数量
    pub links_seen: usize,
    /// 已提取的词条数量
    pub fetched: usize,
    /// 跳过的词条数量
    pub skipped: usize,
}

/// 分类爬取用例
///
/// 串联分类索引、分页、过滤收集与词条提取，产出一个分类的全部词条记录
pub struct CategoryCrawl {
    index: IndexEnumerator,
    paginator: Paginator,
    collector: FilteringCollector,
}

impl CategoryCrawl {
    pub fn new(fetcher: Arc<dyn PageFetcher>, site: Arc<SiteProfile>, length_limit: usize) -> Self {
        let index = IndexEnumerator::new(fetcher.clone(), &site);
        let paginator = Paginator::new(fetcher.clone(), site.clone());
        let extractor = EntryExtractor::new(fetcher, site);
        Self {
            index,
            paginator,
            collector: FilteringCollector::new(extractor, length_limit),
        }
    }

    /// 爬取一个分类
    ///
    /// 按链接发现顺序返回所有列表页的记录；任何错误都会中止整个爬取
    pub async fn run(&self, category_url: &Url) -> Result<Vec<WordRecord>, CrawlError> {
        self.run_with_summary(category_url)
            .await
            .map(|(records, _)| records)
    }

    /// 爬取一个分类并返回统计
    pub async fn run_with_summary(
        &self,
        category_url: &Url,
    ) -> Result<(Vec<WordRecord>, CrawlSummary), CrawlError> {
        let list_pages = self.index.enumerate(category_url).await?;
        let mut summary = CrawlSummary {
            list_pages: list_pages.len(),
            ..CrawlSummary::default()
        };
        info!(category = %category_url, list_pages = list_pages.len(), "Crawling category");

        let mut records = Vec::new();
        for (i, list_url) in list_pages.iter().enumerate() {
            let links = self.paginator.collect_entry_links(list_url).await?;
            summary.links_seen += links.len();
            summary.fetched += links
                .iter()
                .filter(|link| self.collector.decide(link) == Decision::Fetched)
                .count();
            info!(
                list = %list_url,
                page = i + 1,
                of = list_pages.len(),
                entries = links.len(),
                "Collecting list page"
            );

            let stream = self.collector.collect(links);
            pin_mut!(stream);
            while let Some(record) = stream.try_next().await? {
                records.push(record);
            }
        }
        summary.skipped = summary.links_seen - summary.fetched;

        info!(
            category = %category_url,
            list_pages = summary.list_pages,
            links_seen = summary.links_seen,
            fetched = summary.fetched,
            skipped = summary.skipped,
            "Category crawl finished"
        );
        Ok((records, summary))
    }
}
