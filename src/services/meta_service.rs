use log::debug;
use serde_json::{json, Value};

use crate::config::SiteConfig;
use crate::types::{BlogRecord, PageMeta};
use crate::utils::format_iso_date;

pub const LISTING_DESCRIPTION: &str = "Explore our blog for insights, tutorials, and updates on technology, web development, mobile apps, blockchain, AI, and software engineering.";
pub const LISTING_KEYWORDS: &str = "technology blog, web development, mobile apps, blockchain, AI, software engineering, tutorials, tech insights";

/// Service deriving document head metadata and schema.org documents
pub struct MetaService<'a> {
    site: &'a SiteConfig,
}

impl<'a> MetaService<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Head metadata for the listing page
    pub fn listing_meta(&self, records: &[BlogRecord]) -> PageMeta {
        debug!("Deriving listing metadata for {} records", records.len());
        let url = self.site.blog_url();
        let short_title = format!("Our Blog | {}", self.site.name);

        PageMeta {
            title: format!("Our Blog | Technology Insights & Tutorials | {}", self.site.name),
            description: LISTING_DESCRIPTION.to_string(),
            keywords: LISTING_KEYWORDS.to_string(),
            author: None,
            canonical: url.clone(),
            properties: pairs([
                ("og:type", "website"),
                ("og:url", url.as_str()),
                ("og:title", short_title.as_str()),
                ("og:description", LISTING_DESCRIPTION),
                ("og:site_name", self.site.name.as_str()),
            ]),
            names: pairs([
                ("twitter:card", "summary_large_image"),
                ("twitter:url", url.as_str()),
                ("twitter:title", short_title.as_str()),
                ("twitter:description", LISTING_DESCRIPTION),
            ]),
            structured_data: vec![self.blog_document(records)],
        }
    }

    /// Head metadata for a single post
    pub fn post_meta(&self, record: &BlogRecord) -> PageMeta {
        debug!("Deriving post metadata for '{}'", record.slug);
        let url = self.site.post_url(&record.slug);
        let image = self.site.absolute_url(&record.image);
        let published = format_iso_date(&record.date);

        let mut properties = pairs([
            ("og:type", "article"),
            ("og:url", url.as_str()),
            ("og:title", record.title.as_str()),
            ("og:description", record.excerpt.as_str()),
            ("og:image", image.as_str()),
            ("og:site_name", self.site.name.as_str()),
            ("article:published_time", published.as_str()),
            ("article:author", record.author.as_str()),
            ("article:section", record.category.as_str()),
        ]);
        properties.extend(record.tags.iter().map(|tag| ("article:tag".to_string(), tag.clone())));

        PageMeta {
            title: format!("{} | {} Blog", record.title, self.site.name),
            description: record.excerpt.clone(),
            keywords: record.tags.join(", "),
            author: Some(record.author.clone()),
            canonical: url.clone(),
            properties,
            names: pairs([
                ("twitter:card", "summary_large_image"),
                ("twitter:url", url.as_str()),
                ("twitter:title", record.title.as_str()),
                ("twitter:description", record.excerpt.as_str()),
                ("twitter:image", image.as_str()),
            ]),
            structured_data: vec![self.posting_document(record), self.article_document(record)],
        }
    }

    /// `Blog` document listing every post
    pub fn blog_document(&self, records: &[BlogRecord]) -> Value {
        let posts: Vec<Value> = records
            .iter()
            .map(|record| {
                json!({
                    "@type": "BlogPosting",
                    "headline": record.title,
                    "description": record.excerpt,
                    "url": self.site.post_url(&record.slug),
                    "datePublished": format_iso_date(&record.date),
                    "author": { "@type": "Organization", "name": record.author },
                    "image": self.site.absolute_url(&record.image),
                })
            })
            .collect();

        json!({
            "@context": "https://schema.org",
            "@type": "Blog",
            "name": format!("{} Blog", self.site.name),
            "description": LISTING_DESCRIPTION,
            "url": self.site.blog_url(),
            "publisher": { "@type": "Organization", "name": self.site.publisher, "url": self.site.url },
            "blogPost": posts,
        })
    }

    /// `BlogPosting` document for one post
    pub fn posting_document(&self, record: &BlogRecord) -> Value {
        let url = self.site.post_url(&record.slug);
        let published = format_iso_date(&record.date);
        json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": record.title,
            "description": record.excerpt,
            "image": self.site.absolute_url(&record.image),
            "datePublished": published,
            "dateModified": published,
            "author": { "@type": "Organization", "name": record.author, "url": self.site.url },
            "publisher": { "@type": "Organization", "name": self.site.publisher, "url": self.site.url },
            "mainEntityOfPage": { "@type": "WebPage", "@id": url },
            "articleSection": record.category,
            "keywords": record.tags.join(", "),
        })
    }

    /// `Article` document for one post
    pub fn article_document(&self, record: &BlogRecord) -> Value {
        let published = format_iso_date(&record.date);
        json!({
            "@context": "https://schema.org",
            "@type": "Article",
            "headline": record.title,
            "description": record.excerpt,
            "image": self.site.absolute_url(&record.image),
            "datePublished": published,
            "dateModified": published,
            "author": { "@type": "Organization", "name": record.author },
            "publisher": {
                "@type": "Organization",
                "name": self.site.publisher,
                "logo": { "@type": "ImageObject", "url": format!("{}/favicon.ico", self.site.url) },
            },
            "mainEntityOfPage": self.site.post_url(&record.slug),
            "articleSection": record.category,
            "keywords": record.tags.join(", "),
        })
    }
}

fn pairs<const N: usize>(items: [(&str, &str); N]) -> Vec<(String, String)> {
    items.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}
