// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::LogSettings;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 未配置时使用的日志过滤规则
pub const DEFAULT_FILTER: &str = "info,holodict=debug";

/// 日志过滤规则：`RUST_LOG` 优先，其次为配置，最后为默认值
pub fn build_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.filter.as_deref().unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// 初始化全局日志订阅器
pub fn init_telemetry(settings: &LogSettings) {
    let registry = tracing_subscriber::registry().with(build_filter(settings));

    if settings.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}
