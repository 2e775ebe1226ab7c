//! Widget repository implementations

pub mod http_client;
pub mod in_memory;

pub use http_client::HttpWidgetRepository;
pub use in_memory::InMemoryWidgetRepository;
