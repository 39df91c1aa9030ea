// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use anyhow::Context;
use holodict::application::use_cases::crawl_use_case::CategoryCrawl;
use holodict::config::settings::Settings;
use holodict::config::site::SiteProfile;
use holodict::engines::reqwest_engine::ReqwestFetcher;
use holodict::engines::traits::PageFetcher;
use holodict::infrastructure::export::{ExportFormat, LocalExporter};
use holodict::utils::telemetry;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use url::Url;

/// 主函数
///
/// 爬取配置中的分类索引，并把全部词条写入一个输出文件
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.log);
    info!("Starting holodict...");

    let site = Arc::new(SiteProfile::from_settings(&settings)?);
    let category_url = Url::parse(&settings.crawl.category_url)
        .with_context(|| format!("Invalid category URL: {}", settings.crawl.category_url))?;
    info!(
        category = %category_url,
        base_url = %site.base_url,
        length_limit = settings.crawl.length_limit,
        "Configuration loaded"
    );

    // Resolve the output format before crawling so a bad path fails fast
    let output_path = Path::new(&settings.export.output_path);
    let format = match &settings.export.format {
        Some(name) => name.parse::<ExportFormat>()?,
        None => ExportFormat::from_path(output_path)?,
    };

    // 3. Crawl
    let fetcher = Arc::new(ReqwestFetcher::new(&settings.http)?);
    info!(engine = fetcher.name(), "Fetcher ready");
    let crawl = CategoryCrawl::new(fetcher, site, settings.crawl.length_limit);
    let records = crawl.run(&category_url).await?;

    // 4. Export
    LocalExporter::write(output_path, &records, format).await?;
    info!(path = %output_path.display(), rows = records.len(), "Wrote {} rows", records.len());

    Ok(())
}
