// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::Link;
use crate::engines::traits::Document;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::warn;
use url::Url;

/// 链接查找范围
#[derive(Debug, Clone)]
pub enum LinkScope {
    /// 整个文档
    Document,
    /// 文档中第一个匹配选择器的元素内部
    FirstMatch(Selector),
}

/// 链接选择条件
///
/// 由查找范围和可选的 href 模式组成
#[derive(Debug, Clone)]
pub struct LinkPredicate {
    scope: LinkScope,
    href: Option<Regex>,
}

impl LinkPredicate {
    /// 在整个文档中查找
    pub fn anywhere() -> Self {
        Self {
            scope: LinkScope::Document,
            href: None,
        }
    }

    /// 只在第一个匹配 `selector` 的元素内查找
    pub fn within_first(selector: Selector) -> Self {
        Self {
            scope: LinkScope::FirstMatch(selector),
            href: None,
        }
    }

    /// 要求 href 匹配 `pattern`（非锚定匹配）
    pub fn with_href(mut self, pattern: Regex) -> Self {
        self.href = Some(pattern);
        self
    }

    fn accepts(&self, href: &str) -> bool {
        self.href.as_ref().map_or(true, |re| re.is_match(href))
    }
}

/// 链接提取器
///
/// 从文档中按条件查找锚点元素，并将 href 解析为绝对URL
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    base: Url,
}

impl LinkExtractor {
    /// 创建链接提取器
    ///
    /// # 参数
    ///
    /// * `base` - 解析相对链接使用的基准URL
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    /// 按文档顺序提取匹配的链接
    ///
    /// 没有匹配时返回空列表。无法解析为绝对URL的 href 会被跳过
    ///
    /// # 参数
    ///
    /// * `doc` - 已解析的页面
    /// * `predicate` - 选择条件
    ///
    /// # 返回值
    ///
    /// 绝对URL链接列表
    pub fn extract(&self, doc: &Document, predicate: &LinkPredicate) -> Vec<Link> {
        let root = match &predicate.scope {
            LinkScope::Document => Some(doc.html().root_element()),
            LinkScope::FirstMatch(selector) => doc.html().select(selector).next(),
        };
        let Some(root) = root else {
            return Vec::new();
        };

        let mut links = Vec::new();
        for element in root.descendants().filter_map(ElementRef::wrap) {
            if element.value().name() != "a" {
                continue;
            }
            let Some(href) = element.value().attr("href") else {
                continue;
            };
            if !predicate.accepts(href) {
                continue;
            }

            match self.base.join(href) {
                Ok(url) => {
                    let text = element.text().collect::<String>();
                    links.push(Link::new(text.trim(), url));
                }
                Err(e) => {
                    warn!(href = href, page = %doc.url(), error = %e, "Skipping unresolvable link");
                }
            }
        }

        links
    }
}
