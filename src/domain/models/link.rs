// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

/// 页面链接
///
/// 显示文字与绝对目标URL。URL 在创建时已根据基准URL解析完成
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// 显示文字（已去除首尾空白）
    pub text: String,
    /// 绝对目标URL
    pub url: Url,
}

impl Link {
    pub fn new(text: impl Into<String>, url: Url) -> Self {
        Self {
            text: text.into(),
            url,
        }
    }

    /// 显示文字的字符数（按 Unicode 标量值计）
    pub fn text_len(&self) -> usize {
        self.text.chars().count()
    }
}
