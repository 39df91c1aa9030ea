// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心数据结构，包括：
/// - 链接（link）：显示文字与绝对URL
/// - 词条记录（word_record）：声调、词目、音读与可选释义
pub mod link;
pub mod word_record;

pub use link::Link;
pub use word_record::WordRecord;
