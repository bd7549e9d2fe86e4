use log::{debug, warn};

use crate::components::listing::image_tag;
use crate::config::SiteConfig;
use crate::services::{render_content, BlogStore, MetaService};
use crate::types::{BlogRecord, PageMeta};
use crate::utils::{escape_attr, escape_html, format_iso_date, format_long_date};

/// Lookup state of the detail page for one slug.
///
/// `Found` and `NotFound` are terminal until the slug changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState<'s> {
    Loading,
    Found(&'s BlogRecord),
    NotFound,
}

/// Detail page for the post named by a route slug
#[derive(Debug)]
pub struct DetailView<'s> {
    slug: Option<String>,
    state: DetailState<'s>,
}

impl<'s> DetailView<'s> {
    pub fn new(slug: Option<&str>) -> Self {
        Self { slug: slug.map(str::to_string), state: DetailState::Loading }
    }

    pub fn state(&self) -> DetailState<'s> {
        self.state
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    /// Replace the slug and start over from `Loading`
    pub fn set_slug(&mut self, slug: Option<&str>) {
        if self.slug.as_deref() != slug {
            debug!("Detail slug changed to {:?}", slug);
            self.slug = slug.map(str::to_string);
            self.state = DetailState::Loading;
        }
    }

    /// Resolve the slug against the store; a settled state is left as is.
    pub fn resolve(&mut self, store: &'s BlogStore) -> DetailState<'s> {
        if self.state == DetailState::Loading {
            self.state = match self.slug.as_deref().and_then(|slug| store.by_slug(slug)) {
                Some(record) => DetailState::Found(record),
                None => {
                    warn!("No blog post for slug {:?}", self.slug);
                    DetailState::NotFound
                }
            };
        }
        self.state
    }
}

/// Renders the detail states into page bodies and metadata
pub struct DetailComponent<'a> {
    site: &'a SiteConfig,
}

impl<'a> DetailComponent<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Metadata and body HTML for a state
    pub fn render(&self, state: DetailState<'_>) -> (PageMeta, String) {
        match state {
            DetailState::Loading => (self.bare_meta("Loading"), render_loading()),
            DetailState::Found(record) => (MetaService::new(self.site).post_meta(record), self.render_post(record)),
            DetailState::NotFound => (self.bare_meta("Blog Post Not Found"), render_not_found()),
        }
    }

    fn bare_meta(&self, title: &str) -> PageMeta {
        PageMeta {
            title: format!("{} | {}", title, self.site.name),
            description: String::new(),
            ..PageMeta::default()
        }
    }

    /// Full post body
    pub fn render_post(&self, record: &BlogRecord) -> String {
        let mut html = String::new();
        html.push_str("<nav class=\"back\"><a class=\"button ghost\" href=\"/blogs\">&larr; Back to Blogs</a></nav>");
        html.push_str("<article class=\"post\">");

        html.push_str("<header class=\"post-header\">");
        html.push_str(&format!("<span class=\"badge category\">{}</span>", escape_html(&record.category)));
        html.push_str(&format!("<h1>{}</h1>", escape_html(&record.title)));
        html.push_str(&format!("<p class=\"post-excerpt\">{}</p>", escape_html(&record.excerpt)));
        html.push_str("<div class=\"post-meta\">");
        html.push_str(&format!(
            "<time datetime=\"{}\">{}</time>",
            escape_attr(&format_iso_date(&record.date)),
            escape_html(&format_long_date(&record.date))
        ));
        html.push_str(&format!("<span class=\"author\">{}</span>", escape_html(&record.author)));
        html.push_str("</div></header>");

        html.push_str("<figure class=\"post-image\">");
        html.push_str(&image_tag(&record.image, &record.title, &self.site.placeholder_image));
        html.push_str("</figure>");

        html.push_str("<div class=\"post-content\">");
        html.push_str(&render_content(&record.content));
        html.push_str("</div>");

        html.push_str("<footer class=\"post-tags\"><span class=\"label\">Tags:</span><ul class=\"tags\">");
        for tag in &record.tags {
            html.push_str(&format!("<li class=\"badge tag\">{}</li>", escape_html(tag)));
        }
        html.push_str("</ul></footer>");

        html.push_str("<p class=\"all-posts\"><a class=\"button outline\" href=\"/blogs\">&larr; View All Blogs</a></p>");
        html.push_str("</article>");
        html
    }
}

fn render_loading() -> String {
    "<div class=\"status\"><p>Loading...</p></div>".to_string()
}

/// Terminal state for an unknown slug
pub fn render_not_found() -> String {
    render_missing("Blog Post Not Found", "The blog post you're looking for doesn't exist.")
}

/// Not-found body with a way back to the listing
pub fn render_missing(title: &str, message: &str) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"status not-found\">");
    html.push_str(&format!("<h1>{}</h1>", escape_html(title)));
    html.push_str(&format!("<p>{}</p>", escape_html(message)));
    html.push_str("<a class=\"button\" href=\"/blogs\">Back to Blogs</a>");
    html.push_str("</div>");
    html
}
