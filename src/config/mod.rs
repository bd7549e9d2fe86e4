use std::path::PathBuf;

use crate::cli::Cli;

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: Option<PathBuf>,
    pub static_dir: PathBuf,
    pub port: u16,
    pub host: String,
    pub site: SiteConfig,
}

/// Site identity used for canonical URLs and structured data
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub url: String,
    pub name: String,
    pub publisher: String,
    pub placeholder_image: String,
}

impl SiteConfig {
    pub fn blog_url(&self) -> String {
        format!("{}/blogs", self.url)
    }

    pub fn post_url(&self, slug: &str) -> String {
        format!("{}/blogs/{}", self.url, slug)
    }

    /// Make a site-relative image path absolute; absolute URLs pass through.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            path.to_string()
        } else {
            format!("{}{}", self.url, path)
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://dhinova.com".to_string(),
            name: "Dhinova Technology".to_string(),
            publisher: "Dhinova Technology Pvt Ltd".to_string(),
            placeholder_image: "/static/placeholder.svg".to_string(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_path: None,
            static_dir: PathBuf::from("static"),
            port: 5004,
            host: "0.0.0.0".to_string(),
            site: SiteConfig::default(),
        }
    }

    /// Build the configuration from parsed command line arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::new();
        let mut site = defaults.site;
        if let Some(url) = &cli.site_url {
            site.url = url.trim_end_matches('/').to_string();
        }
        Self {
            data_path: cli.data.clone(),
            static_dir: cli.static_dir.clone().unwrap_or(defaults.static_dir),
            port: cli.port.unwrap_or(defaults.port),
            host: cli.host.clone().unwrap_or(defaults.host),
            site,
        }
    }

    /// Bind address as "host:port"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn relative_images_become_absolute() {
        let site = SiteConfig::default();
        assert_eq!(site.absolute_url("/img/a.png"), "https://dhinova.com/img/a.png");
        assert_eq!(site.absolute_url("https://cdn.example.com/a.png"), "https://cdn.example.com/a.png");
    }

    #[test]
    fn cli_overrides_defaults() {
        let cli = Cli::parse_from(["folio", "--port", "8080", "--site-url", "https://example.com/"]);
        let config = Config::from_cli(&cli);
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.site.post_url("a"), "https://example.com/blogs/a");
    }
}
