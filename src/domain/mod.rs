// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心逻辑，包括：
/// - 领域模型（models）：链接与词条记录
/// - 服务（services）：链接发现、分页汇总、过滤与词条提取
pub mod models;
pub mod services;
