use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::{debug, warn};
use time::OffsetDateTime;

use crate::errors::FolioError;
use crate::types::{PageMeta, TemplateContext};
use crate::utils::{escape_attr, escape_html, script_safe_json};

/// Component for handling HTML page shell rendering.
///
/// The shell is read once when the component is built; rendering does no I/O.
#[derive(Debug, Clone)]
pub struct TemplateComponent {
    shell: Option<String>,
}

impl TemplateComponent {
    /// Read `html/base.html` from the static dir. A missing file selects the inline shell.
    pub fn load(static_dir: &Path) -> Result<Self, FolioError> {
        let path = static_dir.join("html").join("base.html");
        match fs::read_to_string(&path) {
            Ok(base) => {
                debug!("Loaded shell template {:?}", path);
                Self::from_shell(base)
                    .map_err(|_| FolioError::Render(format!("{:?} has no {{{{CONTENT}}}} placeholder", path)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("Shell template {:?} not found; using the inline shell", path);
                Ok(Self::inline())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Use `base` as the shell; it must have a `{{CONTENT}}` slot
    pub fn from_shell(base: String) -> Result<Self, FolioError> {
        if !base.contains("{{CONTENT}}") {
            return Err(FolioError::Render("shell template has no {{CONTENT}} placeholder".to_string()));
        }
        Ok(Self { shell: Some(base) })
    }

    /// Built-in shell used when no template file exists
    pub fn inline() -> Self {
        Self { shell: None }
    }

    /// Render the main HTML shell around the context
    pub fn render_shell_template(&self, context: &TemplateContext) -> Result<String, FolioError> {
        let title = escape_html(&context.meta.title);
        let head = render_head(&context.meta);
        let footer = render_footer(&context.site_name);

        if let Some(base) = &self.shell {
            return Ok(fill_shell(base, &title, &head, &context.content, &footer));
        }

        // Fallback inline shell
        Ok(format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\"><meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"><title>{}</title>{}<link rel=\"stylesheet\" href=\"/static/css/folio.css\"></head><body><div class=\"page\">{}</div>{}</body></html>",
            title, head, context.content, footer
        ))
    }

    /// Wrap page content and metadata into a complete document
    pub fn render_page(&self, meta: PageMeta, content: String, site_name: &str) -> Result<String, FolioError> {
        let context = TemplateContext { meta, content, site_name: site_name.to_string() };
        self.render_shell_template(&context)
    }
}

/// Fill every `{{TITLE}}`, `{{HEAD}}`, `{{CONTENT}}` and `{{FOOTER}}` slot of
/// `base` in one left-to-right pass. Inserted values are never scanned, and
/// unknown `{{...}}` text is kept as written.
fn fill_shell(base: &str, title: &str, head: &str, content: &str, footer: &str) -> String {
    let mut html = String::with_capacity(base.len() + head.len() + content.len() + footer.len());
    let mut rest = base;
    while let Some(start) = rest.find("{{") {
        html.push_str(&rest[..start]);
        let tail = &rest[start + 2..];
        let slot = tail.find("}}").and_then(|end| {
            let value = match &tail[..end] {
                "TITLE" => title,
                "HEAD" => head,
                "CONTENT" => content,
                "FOOTER" => footer,
                _ => return None,
            };
            Some((value, end + 2))
        });
        match slot {
            Some((value, consumed)) => {
                html.push_str(value);
                rest = &tail[consumed..];
            }
            None => {
                html.push_str("{{");
                rest = tail;
            }
        }
    }
    html.push_str(rest);
    html
}

/// Meta, link and JSON-LD tags for the document head
fn render_head(meta: &PageMeta) -> String {
    let mut html = String::new();
    html.push_str(&format!("<meta name=\"title\" content=\"{}\">", escape_attr(&meta.title)));
    if !meta.description.is_empty() {
        html.push_str(&format!("<meta name=\"description\" content=\"{}\">", escape_attr(&meta.description)));
    }
    if !meta.keywords.is_empty() {
        html.push_str(&format!("<meta name=\"keywords\" content=\"{}\">", escape_attr(&meta.keywords)));
    }
    if let Some(author) = &meta.author {
        html.push_str(&format!("<meta name=\"author\" content=\"{}\">", escape_attr(author)));
    }
    for (property, content) in &meta.properties {
        html.push_str(&format!(
            "<meta property=\"{}\" content=\"{}\">",
            escape_attr(property),
            escape_attr(content)
        ));
    }
    for (name, content) in &meta.names {
        html.push_str(&format!(
            "<meta name=\"{}\" content=\"{}\">",
            escape_attr(name),
            escape_attr(content)
        ));
    }
    if !meta.canonical.is_empty() {
        html.push_str(&format!("<link rel=\"canonical\" href=\"{}\">", escape_attr(&meta.canonical)));
    }
    for document in &meta.structured_data {
        html.push_str("<script type=\"application/ld+json\">");
        html.push_str(&script_safe_json(document));
        html.push_str("</script>");
    }
    html
}

fn render_footer(site_name: &str) -> String {
    let year = OffsetDateTime::now_utc().year();
    format!(
        "<footer class=\"site-footer\"><p>&copy; {} {}. All rights reserved.</p></footer>",
        year,
        escape_html(site_name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta() -> PageMeta {
        PageMeta {
            title: "Hello <World>".to_string(),
            description: "desc".to_string(),
            canonical: "https://example.com/blogs".to_string(),
            properties: vec![("og:type".to_string(), "website".to_string())],
            names: vec![("twitter:card".to_string(), "summary_large_image".to_string())],
            structured_data: vec![serde_json::json!({ "@type": "Blog" })],
            ..PageMeta::default()
        }
    }

    const SHELL: &str = "<html><head><title>{{TITLE}}</title>{{HEAD}}</head><body>{{CONTENT}}{{FOOTER}}</body></html>";

    fn write_shell(dir: &Path, shell: &str) {
        fs::create_dir_all(dir.join("html")).unwrap();
        fs::write(dir.join("html/base.html"), shell).unwrap();
    }

    #[test]
    fn fallback_shell_carries_head_and_content() {
        let templates = TemplateComponent::load(Path::new("does-not-exist")).unwrap();
        let page = templates.render_page(meta(), "<p>body</p>".to_string(), "Acme").unwrap();
        assert!(page.contains("<title>Hello &lt;World&gt;</title>"));
        assert!(page.contains("<meta name=\"description\" content=\"desc\">"));
        assert!(page.contains("<meta property=\"og:type\" content=\"website\">"));
        assert!(page.contains("<meta name=\"twitter:card\" content=\"summary_large_image\">"));
        assert!(page.contains("<link rel=\"canonical\" href=\"https://example.com/blogs\">"));
        assert!(page.contains("<script type=\"application/ld+json\">{\"@type\":\"Blog\"}</script>"));
        assert!(page.contains("<p>body</p>"));
        assert!(page.contains("Acme. All rights reserved."));
    }

    #[test]
    fn file_template_placeholders_are_filled() {
        let dir = tempfile::tempdir().unwrap();
        write_shell(dir.path(), SHELL);
        let templates = TemplateComponent::load(dir.path()).unwrap();
        let page = templates.render_page(meta(), "<p>body</p>".to_string(), "Acme").unwrap();
        assert!(page.starts_with("<html><head><title>Hello &lt;World&gt;</title><meta name=\"title\""));
        assert!(page.contains("<body><p>body</p><footer"));
    }

    #[test]
    fn template_without_content_slot_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        write_shell(dir.path(), "<html></html>");
        assert!(matches!(TemplateComponent::load(dir.path()), Err(FolioError::Render(_))));
    }

    #[test]
    fn shell_is_read_once() {
        let dir = tempfile::tempdir().unwrap();
        write_shell(dir.path(), SHELL);
        let templates = TemplateComponent::load(dir.path()).unwrap();
        write_shell(dir.path(), "<main>{{CONTENT}}</main>");
        let page = templates.render_page(meta(), "<p>body</p>".to_string(), "Acme").unwrap();
        assert!(page.starts_with("<html><head>"));
        assert!(!page.contains("<main>"));
    }

    #[test]
    fn inserted_text_is_not_scanned_for_slots() {
        let templates = TemplateComponent::from_shell(SHELL.to_string()).unwrap();
        let meta = PageMeta { title: "{{CONTENT}} guide".to_string(), ..meta() };
        let content = "<p>Put {{FOOTER}} in your layout</p><p>Where {{CONTENT}} goes</p>".to_string();
        let page = templates.render_page(meta, content, "Acme").unwrap();
        assert!(page.contains("<title>{{CONTENT}} guide</title>"));
        assert!(page.contains("<body><p>Put {{FOOTER}} in your layout</p><p>Where {{CONTENT}} goes</p><footer"));
        assert_eq!(page.matches("All rights reserved.").count(), 1);
        assert_eq!(page.matches("<p>Put {{FOOTER}}").count(), 1);
    }

    #[test]
    fn every_slot_occurrence_is_filled_and_unknown_slots_kept() {
        let templates = TemplateComponent::from_shell("{{TITLE}}|{{CONTENT}}|{{TITLE}}|{{OTHER}}|{{".to_string()).unwrap();
        let page = templates.render_page(PageMeta { title: "T".to_string(), ..PageMeta::default() }, "C".to_string(), "Acme").unwrap();
        assert_eq!(page, "T|C|T|{{OTHER}}|{{");
    }

    #[test]
    fn empty_description_is_left_out() {
        let templates = TemplateComponent::inline();
        let meta = PageMeta { title: "Loading | Acme".to_string(), ..PageMeta::default() };
        let page = templates.render_page(meta, String::new(), "Acme").unwrap();
        assert!(!page.contains("name=\"description\""));
        assert!(!page.contains("name=\"keywords\""));
        assert!(page.contains("<meta name=\"title\" content=\"Loading | Acme\">"));
    }
}
