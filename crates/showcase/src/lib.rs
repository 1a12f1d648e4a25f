//! Showcase is the core of the Services marketing page: the fixed catalog
//! of service offerings and the renderer that turns that catalog into the
//! page markup.

pub mod catalog;
pub mod clock;
pub mod icon;
pub mod page;

// Re-export core types
pub use catalog::{CatalogPayload, ServiceOffering, service_catalog};
pub use clock::{Clock, FixedClock, SystemClock};
pub use icon::ServiceIcon;
pub use page::render_page;
