// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置模块
///
/// 处理应用程序的配置设置，包括站点、HTTP、爬取、导出和页面结构配置
pub mod settings;
pub mod site;
