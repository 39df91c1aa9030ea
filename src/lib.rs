// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含把各阶段串联为完整分类爬取的用例
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含词条记录、链接以及爬取与提取服务
pub mod domain;

/// 引擎模块
///
/// 实现页面获取
pub mod engines;

/// 基础设施模块
///
/// 提供数据集导出
pub mod infrastructure;

/// 工具模块
///
/// 提供错误类型与日志初始化
pub mod utils;
