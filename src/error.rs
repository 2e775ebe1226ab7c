use thiserror::Error;

use crate::catalog::CatalogError;
use crate::repository::SelectionError;
use crate::templates::TemplateError;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

pub type Result<T> = std::result::Result<T, WidgetError>;
