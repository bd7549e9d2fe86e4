use std::sync::Arc;

use serde::Deserialize;

use crate::components::TemplateComponent;
use crate::config::Config;
use crate::services::BlogStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BlogStore>,
    pub config: Arc<Config>,
    pub templates: Arc<TemplateComponent>,
}

/// A single blog post as authored in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogRecord {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub image: String,
    pub author: String,
    pub date: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// One presentational block produced from a post's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    Heading2(&'a str),
    Heading3(&'a str),
    Break,
    Paragraph(&'a str),
}

/// Summary card data for the listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub tags: Vec<String>,
    pub date: String,
    pub date_iso: String,
    pub author: String,
    pub href: String,
    pub image: String,
}

/// Document head data handed to the page shell
#[derive(Debug, Clone, Default)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub author: Option<String>,
    pub canonical: String,
    /// `<meta property=..>` pairs, Open Graph and `article:*`
    pub properties: Vec<(String, String)>,
    /// `<meta name=..>` pairs, Twitter card tags
    pub names: Vec<(String, String)>,
    pub structured_data: Vec<serde_json::Value>,
}

/// Template rendering context
#[derive(Debug, Clone)]
pub struct TemplateContext {
    pub meta: PageMeta,
    pub content: String,
    pub site_name: String,
}
