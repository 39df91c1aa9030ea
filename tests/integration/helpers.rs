// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// 本地测试站点
///
/// 按 path+query 精确匹配返回预置页面，未知页面返回 404
pub struct TestSite {
    pub origin: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl TestSite {
    /// 站点根路径（与真实站点一样位于 `/holodict_new/` 下）
    pub fn base_url(&self) -> String {
        format!("{}/holodict_new/", self.origin)
    }

    /// 已收到的请求（path+query）
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

pub async fn start_test_site(pages: HashMap<String, String>) -> TestSite {
    let pages = Arc::new(pages);
    let requests = Arc::new(Mutex::new(Vec::new()));

    let recorded = requests.clone();
    let app = Router::new().fallback(move |uri: Uri| {
        let pages = pages.clone();
        let recorded = recorded.clone();
        async move {
            let key = uri
                .path_and_query()
                .map(|p| p.as_str().to_string())
                .unwrap_or_default();
            recorded.lock().unwrap().push(key.clone());

            let response: Response = match pages.get(&key) {
                Some(html) => Html(html.clone()).into_response(),
                None => StatusCode::NOT_FOUND.into_response(),
            };
            response
        }
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestSite {
        origin: format!("http://{}", addr),
        requests,
    }
}

pub fn list_page(entries: &[(&str, u32)], pager: &str) -> String {
    let rows: String = entries
        .iter()
        .map(|(word, id)| {
            format!(r#"<tr><td><a href="result_detail.jsp?n_no={id}">{word}</a></td></tr>"#)
        })
        .collect();
    format!(
        r#"<html><body>
            <table class="result">{rows}</table>
            <div class="pager">{pager}</div>
        </body></html>"#
    )
}

pub fn entry_page(tone: &str, word: &str, pronunciation: &str, meaning: Option<&str>) -> String {
    let meaning = meaning
        .map(|m| format!(r#"<tr><th>釋義</th><td><span itemprop="description">{m}</span></td></tr>"#))
        .unwrap_or_default();
    format!(
        r#"<html><body>
            <div class="crumb"><a href="index/shengdiao_level4.jsp?shengdiao=1">{tone}</a></div>
            <table>
                <tr><th>詞目</th><td><span itemprop="name">{word}</span></td></tr>
                <tr><th>音讀</th><td><font class="tlsound">{pronunciation}</font></td></tr>
                {meaning}
            </table>
        </body></html>"#
    )
}
