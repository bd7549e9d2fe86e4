#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use folio::{router, AppState, BlogRecord, BlogStore, Config, TemplateComponent};

pub fn record(id: u64, slug: &str, tags: &[&str]) -> BlogRecord {
    BlogRecord {
        id,
        slug: slug.to_string(),
        title: format!("Title {}", slug),
        excerpt: format!("Excerpt {}", slug),
        content: "## A\n\ntext\n### B".to_string(),
        image: format!("/images/{}.png", slug),
        author: "Dhinova Technology".to_string(),
        date: "2025-01-05".to_string(),
        category: "Engineering".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

pub fn static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

pub fn app(records: Vec<BlogRecord>) -> Router {
    let store = BlogStore::from_records(records).expect("valid test records");
    let config = Config { static_dir: static_dir(), ..Config::new() };
    let templates = TemplateComponent::load(&config.static_dir).expect("shell template");
    router(AppState { store: Arc::new(store), config: Arc::new(config), templates: Arc::new(templates) })
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, String) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
