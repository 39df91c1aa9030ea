// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 目标站点根路径
pub const DEFAULT_BASE_URL: &str = "https://twblg.dict.edu.tw/holodict_new/";

/// 默认分类索引（声母 b）
pub const DEFAULT_CATEGORY_URL: &str = "https://twblg.dict.edu.tw/holodict_new/index/shengmu_level4.jsp?shengmu=b&yunmu=0&shengdiao=0&in_idx=0";

/// 伪装的浏览器标识，目标站点会拒绝默认的客户端标识
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/89.0.4389.90 Safari/537.36";

/// 应用程序配置设置
///
/// 包含站点、HTTP、爬取、导出和页面结构等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 站点配置
    pub site: SiteSettings,
    /// HTTP配置
    pub http: HttpSettings,
    /// 爬取配置
    pub crawl: CrawlSettings,
    /// 导出配置
    pub export: ExportSettings,
    /// 页面结构配置
    #[serde(default)]
    pub layout: LayoutSettings,
    /// 日志配置
    #[serde(default)]
    pub log: LogSettings,
}

/// 站点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SiteSettings {
    /// 用于解析词条链接和分页链接的站点根URL
    pub base_url: String,
}

/// HTTP配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求使用的 User-Agent
    pub user_agent: String,
    /// 请求超时时间（秒），未设置时不超时
    pub timeout_secs: Option<u64>,
}

/// 爬取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// 分类索引URL
    pub category_url: String,
    /// 词条显示文字的精确长度
    pub length_limit: usize,
}

/// 导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ExportSettings {
    /// 输出文件路径
    pub output_path: String,
    /// 输出格式 (csv, tsv, json, xlsx)，未设置时按扩展名推断
    pub format: Option<String>,
}

/// 日志配置设置
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// 是否输出 JSON 格式日志
    pub json: bool,
    /// 日志过滤规则（`RUST_LOG` 优先）
    pub filter: Option<String>,
}

/// 页面结构配置设置
///
/// 选择器使用 CSS 语法，模式使用正则表达式（非锚定匹配）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// 主结果表格
    pub results_table: String,
    /// 分类索引中列表页链接的 href 模式
    pub index_href_pattern: String,
    /// 分页链接的 href 模式
    pub pagination_href_pattern: String,
    /// 分页链接显示文字必须匹配的模式
    pub page_number_pattern: String,
    /// 声调链接的 href 模式
    pub tone_href_pattern: String,
    /// 词目元素
    pub word_selector: String,
    /// 音读元素
    pub pronunciation_selector: String,
    /// 释义元素
    pub meaning_selector: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            results_table: "table".to_string(),
            index_href_pattern: r"\.\./result\.jsp".to_string(),
            pagination_href_pattern: r"result_page\.jsp".to_string(),
            page_number_pattern: r"\d".to_string(),
            tone_href_pattern: "shengdiao".to_string(),
            word_selector: r#"[itemprop="name"]"#.to_string(),
            pronunciation_selector: "font.tlsound".to_string(),
            meaning_selector: r#"[itemprop="description"]"#.to_string(),
        }
    }
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载内置默认值、`config/default`、`config/{APP_ENVIRONMENT}`（默认 development）
    /// 以及 `HOLODICT__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = Self::environment();
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("HOLODICT").separator("__"));

        builder.build()?.try_deserialize()
    }

    /// 运行环境名，未设置 `APP_ENVIRONMENT` 时为 development
    pub fn environment() -> String {
        std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "development".to_string())
    }

    /// 仅使用内置默认值创建配置，不读取文件和环境变量
    pub fn with_defaults() -> Result<Self, ConfigError> {
        Self::defaults()?.build()?.try_deserialize()
    }

    fn defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("site.base_url", DEFAULT_BASE_URL)?
            .set_default("http.user_agent", DEFAULT_USER_AGENT)?
            .set_default("crawl.category_url", DEFAULT_CATEGORY_URL)?
            .set_default("crawl.length_limit", 2)?
            .set_default("export.output_path", "b_shengmu.xlsx")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
