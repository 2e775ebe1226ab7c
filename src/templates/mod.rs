//! Typed template properties decoded from choice payloads
//!
//! Rendering lives in the client apps; this module only turns the JSON data of
//! a choice variation into properties with the template defaults applied.

pub mod card_promotion;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::WidgetName;

pub use card_promotion::{ButtonBackground, CardPromotionProperties};

/// Common interface for DY templates
pub trait DyWidget {
    fn widget_name(&self) -> WidgetName;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageScaleType {
    #[default]
    Fit,
    Fill,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("choice '{found}' is not a {expected} widget")]
    WrongWidget { expected: WidgetName, found: String },

    #[error("choice for {0} has no variation payload")]
    MissingPayload(WidgetName),

    #[error("invalid {widget} payload: {message}")]
    InvalidPayload { widget: WidgetName, message: String },
}
