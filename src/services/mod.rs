pub mod blog_store;
pub mod content_service;
pub mod meta_service;

pub use blog_store::BlogStore;
pub use content_service::{blocks, render_content, Blocks};
pub use meta_service::MetaService;
