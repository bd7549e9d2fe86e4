pub mod detail;
pub mod listing;
pub mod templates;

pub use detail::{DetailComponent, DetailState, DetailView};
pub use listing::ListingComponent;
pub use templates::TemplateComponent;
