use log::{debug, info};

use crate::config::SiteConfig;
use crate::services::MetaService;
use crate::types::{BlogRecord, PageMeta, PostSummary};
use crate::utils::{escape_attr, escape_html, format_iso_date, format_long_date};

/// Tags shown per summary card
pub const SUMMARY_TAG_LIMIT: usize = 3;

pub const EMPTY_LISTING_MESSAGE: &str = "No blogs available at the moment.";

/// Component for the blog listing page
pub struct ListingComponent<'a> {
    site: &'a SiteConfig,
}

impl<'a> ListingComponent<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Summary card data for every record, in collection order
    pub fn summaries(&self, records: &[BlogRecord]) -> Vec<PostSummary> {
        records.iter().map(|record| self.summarize(record)).collect()
    }

    fn summarize(&self, record: &BlogRecord) -> PostSummary {
        PostSummary {
            title: record.title.clone(),
            excerpt: record.excerpt.clone(),
            category: record.category.clone(),
            tags: record.tags.iter().take(SUMMARY_TAG_LIMIT).cloned().collect(),
            date: format_long_date(&record.date),
            date_iso: format_iso_date(&record.date),
            author: record.author.clone(),
            href: format!("/blogs/{}", record.slug),
            image: record.image.clone(),
        }
    }

    /// Page metadata derived from the whole collection
    pub fn meta(&self, records: &[BlogRecord]) -> PageMeta {
        MetaService::new(self.site).listing_meta(records)
    }

    /// Listing body HTML
    pub fn render(&self, records: &[BlogRecord]) -> String {
        debug!("Rendering listing for {} records", records.len());
        let start_time = std::time::Instant::now();

        let mut html = String::new();
        html.push_str("<header class=\"blog-hero\"><h1>Our Blog</h1>");
        html.push_str("<p>Insights, tutorials, and updates on technology, development, and innovation</p></header>");
        html.push_str("<main class=\"blog-listing\">");

        if records.is_empty() {
            html.push_str(&format!("<div class=\"empty-state\"><p>{}</p></div>", EMPTY_LISTING_MESSAGE));
        } else {
            html.push_str("<div class=\"post-grid\">");
            for summary in self.summaries(records) {
                html.push_str(&self.render_card(&summary));
            }
            html.push_str("</div>");
        }

        html.push_str("</main>");

        let duration = start_time.elapsed();
        info!("Listing rendered in {:?}ms", duration.as_millis());
        html
    }

    fn render_card(&self, summary: &PostSummary) -> String {
        let mut html = String::new();
        html.push_str("<article class=\"post-card\">");
        html.push_str(&format!("<a class=\"post-link\" href=\"{}\">", escape_attr(&summary.href)));
        html.push_str("<div class=\"post-image\">");
        html.push_str(&image_tag(&summary.image, &summary.title, &self.site.placeholder_image));
        html.push_str(&format!("<span class=\"badge category\">{}</span>", escape_html(&summary.category)));
        html.push_str("</div>");
        html.push_str(&format!("<h2 class=\"post-title\">{}</h2>", escape_html(&summary.title)));
        html.push_str(&format!("<p class=\"post-excerpt\">{}</p>", escape_html(&summary.excerpt)));
        html.push_str("<div class=\"post-meta\">");
        html.push_str(&format!(
            "<time datetime=\"{}\">{}</time>",
            escape_attr(&summary.date_iso),
            escape_html(&summary.date)
        ));
        html.push_str(&format!("<span class=\"author\">{}</span>", escape_html(&summary.author)));
        html.push_str("</div>");
        html.push_str("<ul class=\"tags\">");
        for tag in &summary.tags {
            html.push_str(&format!("<li class=\"badge tag\">{}</li>", escape_html(tag)));
        }
        html.push_str("</ul>");
        html.push_str("</a></article>");
        html
    }
}

/// `<img>` that swaps to the placeholder when the primary image fails to load
pub fn image_tag(src: &str, alt: &str, placeholder: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" onerror=\"this.onerror=null;this.src='{}'\">",
        escape_attr(src),
        escape_attr(alt),
        escape_attr(placeholder)
    )
}
