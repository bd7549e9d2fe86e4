//! Folio - the company blog, served by a small Rust web application
//!
//! Posts come from a static JSON dataset that is validated once at startup
//! and shared read-only with every request handler.

pub mod cli;
pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{Config, SiteConfig};
pub use errors::FolioError;
pub use types::{AppState, Block, BlogRecord, PageMeta, PostSummary, TemplateContext};
pub use services::{blocks, BlogStore, MetaService};
pub use components::{DetailComponent, DetailState, DetailView, ListingComponent, TemplateComponent};
pub use handlers::router;
