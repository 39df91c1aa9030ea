// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{entry_page, list_page, start_test_site, TestSite};
use holodict::application::use_cases::crawl_use_case::{CategoryCrawl, CrawlSummary};
use holodict::config::settings::Settings;
use holodict::config::site::SiteProfile;
use holodict::engines::reqwest_engine::ReqwestFetcher;
use holodict::engines::traits::FetchError;
use holodict::infrastructure::export::{ExportFormat, LocalExporter};
use holodict::utils::errors::CrawlError;
use std::collections::HashMap;
use std::sync::Arc;
use url::Url;

const INDEX: &str = "/holodict_new/index/shengmu_level4.jsp?shengmu=b";
const LIST_BA: &str = "/holodict_new/result.jsp?sample=ba";
const LIST_BA_2: &str = "/holodict_new/result_page.jsp?sample=ba&page=2";
const LIST_BE: &str = "/holodict_new/result.jsp?sample=be";
const LIST_BE_2: &str = "/holodict_new/result_page.jsp?sample=be&page=2";

fn entry(id: u32) -> String {
    format!("/holodict_new/result_detail.jsp?n_no={}", id)
}

/// 两个列表页，各有一个续页
fn site_pages() -> HashMap<String, String> {
    let mut pages = HashMap::new();
    pages.insert(
        INDEX.to_string(),
        r#"<html><body><table>
            <tr><td><a href="../result.jsp?sample=ba">ba</a></td></tr>
            <tr><td><a href="shengmu_level3.jsp">上一層</a></td></tr>
            <tr><td><a href="../result.jsp?sample=be">be</a></td></tr>
        </table></body></html>"#
            .to_string(),
    );
    pages.insert(
        LIST_BA.to_string(),
        list_page(
            &[("巴", 1), ("巴士", 2)],
            r#"<a href="result_page.jsp?sample=ba&amp;page=2">2</a>
               <a href="result_page.jsp?sample=ba&amp;page=2">下一頁</a>"#,
        ),
    );
    pages.insert(
        LIST_BA_2.to_string(),
        list_page(&[("爸爸", 3), ("白", 4)], ""),
    );
    pages.insert(
        LIST_BE.to_string(),
        list_page(
            &[("白菜", 5), ("北部人", 6)],
            r#"<a href="result_page.jsp?sample=be&amp;page=2">2</a>"#,
        ),
    );
    pages.insert(LIST_BE_2.to_string(), list_page(&[("北方", 7)], ""));

    pages.insert(entry(2), entry_page("第2調", "巴士", "bá-sù", Some("公共汽車。")));
    pages.insert(entry(3), entry_page("第7調", "爸爸", "pâ-pâ", None));
    pages.insert(entry(5), entry_page("第8調", "白菜", "pe̍h-tshài", Some("蔬菜名。")));
    pages.insert(entry(7), entry_page("第4調", "北方", "pak-hng", Some("北邊。")));
    pages
}

fn crawl_for(site: &TestSite) -> CategoryCrawl {
    let mut settings = Settings::with_defaults().unwrap();
    settings.site.base_url = site.base_url();
    settings.http.timeout_secs = Some(10);

    let profile = Arc::new(SiteProfile::from_settings(&settings).unwrap());
    let fetcher = Arc::new(ReqwestFetcher::new(&settings.http).unwrap());
    CategoryCrawl::new(fetcher, profile, settings.crawl.length_limit)
}

fn category_url(site: &TestSite) -> Url {
    Url::parse(&format!("{}{}", site.origin, INDEX)).unwrap()
}

#[tokio::test]
async fn test_category_crawl_end_to_end() {
    let site = start_test_site(site_pages()).await;
    let crawl = crawl_for(&site);

    let (records, summary) = crawl.run_with_summary(&category_url(&site)).await.unwrap();

    let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["巴士", "爸爸", "白菜", "北方"]);
    assert_eq!(records[0].tone, "第2調");
    assert_eq!(records[0].pronunciation, "bá-sù");
    assert_eq!(records[0].meaning.as_deref(), Some("公共汽車。"));
    assert!(records[1].meaning.is_none());

    assert_eq!(
        summary,
        CrawlSummary {
            list_pages: 2,
            links_seen: 7,
            fetched: 4,
            skipped: 3,
        }
    );

    // The "next" control shares the pagination pattern but carries no page number
    let requests = site.requests();
    assert_eq!(requests.iter().filter(|r| r.as_str() == LIST_BA_2).count(), 1);
    assert_eq!(requests[0], INDEX);
    assert!(!requests.contains(&entry(1)));
    assert!(!requests.contains(&entry(6)));
}

#[tokio::test]
async fn test_crawl_then_export_csv() {
    let site = start_test_site(site_pages()).await;
    let crawl = crawl_for(&site);
    let records = crawl.run(&category_url(&site)).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("b_shengmu.csv");
    LocalExporter::write(&path, &records, ExportFormat::from_path(&path).unwrap())
        .await
        .unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "tone,word,pronunciation,meaning");
    assert_eq!(lines[2], "第7調,爸爸,pâ-pâ,");
}

#[tokio::test]
async fn test_missing_continuation_page_aborts_run() {
    let mut pages = site_pages();
    pages.remove(LIST_BE_2);
    let site = start_test_site(pages).await;
    let crawl = crawl_for(&site);

    let err = crawl.run(&category_url(&site)).await.unwrap_err();

    match err {
        CrawlError::Fetch(FetchError::NonSuccessStatus { url, status }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with(LIST_BE_2));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    // No entries of the failing list page are extracted
    assert!(!site.requests().contains(&entry(5)));
}

#[tokio::test]
async fn test_unreachable_index_fails() {
    let site = start_test_site(HashMap::new()).await;
    let crawl = crawl_for(&site);

    let err = crawl.run(&category_url(&site)).await.unwrap_err();
    assert!(matches!(
        err,
        CrawlError::Fetch(FetchError::NonSuccessStatus { status: 404, .. })
    ));
}
