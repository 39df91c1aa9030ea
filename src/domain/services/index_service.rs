// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::site::SiteProfile;
use crate::domain::services::link_extractor::{LinkExtractor, LinkPredicate};
use crate::engines::traits::PageFetcher;
use crate::utils::errors::CrawlError;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// 分类索引服务
///
/// 列出一个分类索引页上的所有列表页
pub struct IndexEnumerator {
    fetcher: Arc<dyn PageFetcher>,
    predicate: LinkPredicate,
}

impl IndexEnumerator {
    pub fn new(fetcher: Arc<dyn PageFetcher>, site: &SiteProfile) -> Self {
        let predicate = LinkPredicate::within_first(site.layout.results_table.clone())
            .with_href(site.layout.index_href.clone());
        Self { fetcher, predicate }
    }

    /// 获取分类索引并返回列表页URL
    ///
    /// 链接相对于索引页自身解析；按文档顺序返回，不去重
    ///
    /// # 参数
    ///
    /// * `category_url` - 分类索引绝对URL
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<Url>)` - 列表页URL
    /// * `Err(CrawlError)` - 获取失败
    pub async fn enumerate(&self, category_url: &Url) -> Result<Vec<Url>, CrawlError> {
        let doc = self.fetcher.fetch(category_url).await?;
        let links = LinkExtractor::new(category_url.clone()).extract(&doc, &self.predicate);

        debug!(category = %category_url, list_pages = links.len(), "Category index scanned");
        Ok(links.into_iter().map(|link| link.url).collect())
    }
}
