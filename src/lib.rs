pub mod catalog;
pub mod choice;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod repository;
pub mod templates;

// Repository implementations (HTTP, in-memory)
pub mod infra;

pub use catalog::{legacy, CatalogVersion, WidgetCatalog, WidgetName};
pub use choice::WidgetChoice;
pub use error::{Result, WidgetError};
pub use repository::{CommonError, DyResult, WidgetRepository, WidgetSelection};
