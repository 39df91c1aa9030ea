// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 该模块包含爬取与提取流水线的各个阶段：
/// - 链接提取（link_extractor）：按范围与 href 模式查找链接并解析为绝对URL
/// - 分类索引（index_service）：列出分类下的所有列表页
/// - 分页（pagination_service）：汇总列表页及其续页上的词条链接
/// - 词条提取（entry_service）：从词条页提取固定结构的记录
/// - 过滤收集（collector_service）：按显示文字长度筛选词条并惰性提取
pub mod collector_service;
pub mod entry_service;
pub mod index_service;
pub mod link_extractor;
pub mod pagination_service;
