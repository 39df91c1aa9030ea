// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::{Link, WordRecord};
use crate::domain::services::entry_service::EntryExtractor;
use crate::utils::errors::CrawlError;
use futures::stream::{self, Stream, StreamExt};
use std::fmt;
use tracing::info;

/// 默认的词条显示文字长度
pub const DEFAULT_LENGTH_LIMIT: usize = 2;

/// 单个链接的处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Fetched,
    Skipped,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Fetched => write!(f, "Fetched"),
            Decision::Skipped => write!(f, "Skipped"),
        }
    }
}

/// 过滤收集服务
///
/// 只对显示文字长度恰好等于 `length_limit` 的链接提取词条
pub struct FilteringCollector {
    extractor: EntryExtractor,
    length_limit: usize,
}

impl FilteringCollector {
    pub fn new(extractor: EntryExtractor, length_limit: usize) -> Self {
        Self {
            extractor,
            length_limit,
        }
    }

    /// 精确长度匹配；更短和更长的都跳过
    pub fn decide(&self, link: &Link) -> Decision {
        if link.text_len() == self.length_limit {
            Decision::Fetched
        } else {
            Decision::Skipped
        }
    }

    /// 按输入顺序惰性地产生词条记录
    ///
    /// 每个链接都会记录一条进度日志（词目与 Fetched/Skipped）。
    /// 流被轮询时才会获取页面；提取失败以 `Err` 项产出
    ///
    /// # 参数
    ///
    /// * `links` - 词条链接
    ///
    /// # 返回值
    ///
    /// 词条记录流，只能消费一次
    pub fn collect(
        &self,
        links: Vec<Link>,
    ) -> impl Stream<Item = Result<WordRecord, CrawlError>> + '_ {
        stream::iter(links).filter_map(move |link| async move {
            let decision = self.decide(&link);
            info!(word = %link.text, url = %link.url, decision = %decision, "{}\t{}", link.text, decision);

            match decision {
                Decision::Fetched => Some(self.extractor.extract(&link.url).await),
                Decision::Skipped => None,
            }
        })
    }
}
