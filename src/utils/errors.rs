// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::FetchError;
use thiserror::Error;

/// 页面结构错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// 词条页缺少必需字段
    #[error("Missing required field `{field}` on {url}")]
    MissingRequiredField {
        /// 字段名 (tone, word, pronunciation)
        field: &'static str,
        /// 词条页URL
        url: String,
    },
}

impl StructureError {
    /// 缺失字段名
    pub fn field(&self) -> &'static str {
        match self {
            StructureError::MissingRequiredField { field, .. } => field,
        }
    }
}

/// 爬取流水线错误类型
///
/// 流水线中任何一个阶段的错误都会直接向上传播，不做本地恢复
#[derive(Error, Debug)]
pub enum CrawlError {
    /// 页面获取失败
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// 词条页结构不符合预期
    #[error(transparent)]
    Structure(#[from] StructureError),

    /// URL 无效
    #[error("Invalid URL `{input}`: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    /// CSS 选择器无效
    #[error("Invalid selector `{0}`")]
    InvalidSelector(String),

    /// 正则表达式无效
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

impl CrawlError {
    /// 构造 URL 解析错误
    pub fn invalid_url(input: impl Into<String>, source: url::ParseError) -> Self {
        CrawlError::InvalidUrl {
            input: input.into(),
            source,
        }
    }
}
