// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 词条记录
///
/// 由词条提取器构建后不可变。`meaning` 缺失是正常状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// 声调
    pub tone: String,
    /// 词目
    pub word: String,
    /// 音读
    pub pronunciation: String,
    /// 释义
    pub meaning: Option<String>,
}

impl WordRecord {
    /// 导出时的列名
    pub const COLUMNS: [&'static str; 4] = ["tone", "word", "pronunciation", "meaning"];

    pub fn new(
        tone: String,
        word: String,
        pronunciation: String,
        meaning: Option<String>,
    ) -> Self {
        Self {
            tone,
            word,
            pronunciation,
            meaning,
        }
    }

    /// 按列顺序展开为一行，缺失的释义为空字符串
    pub fn to_row(&self) -> [&str; 4] {
        [
            self.tone.as_str(),
            self.word.as_str(),
            self.pronunciation.as_str(),
            self.meaning.as_deref().unwrap_or(""),
        ]
    }
}
