use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{DyWidget, ImageScaleType, TemplateError};
use crate::catalog::WidgetName;
use crate::choice::WidgetChoice;

/// Properties of the card promotion template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CardPromotionProperties {
    pub corner_radius: f32,
    /// Solid background; takes precedence over the gradient when set
    pub background_color: Option<String>,
    pub gradient_top_color: String,
    pub gradient_bottom_color: String,
    pub image_url: Option<String>,
    pub image_scale_type: ImageScaleType,
    pub bottom_panel_color: Option<String>,
    pub bottom_text: Option<String>,
    pub bottom_text_color: Option<String>,
    pub bottom_text_size: Option<f32>,
    pub button_text: Option<String>,
    pub button_text_color: Option<String>,
    pub button_text_size: Option<f32>,
    pub button: ButtonBackground,
}

impl Default for CardPromotionProperties {
    fn default() -> Self {
        Self {
            corner_radius: 16.0,
            background_color: None,
            gradient_top_color: "#222433".to_string(),
            gradient_bottom_color: "#0038353F".to_string(),
            image_url: None,
            image_scale_type: ImageScaleType::Fit,
            bottom_panel_color: None,
            bottom_text: None,
            bottom_text_color: None,
            bottom_text_size: None,
            button_text: None,
            button_text_color: None,
            button_text_size: None,
            button: ButtonBackground::default(),
        }
    }
}

/// Normal and pressed background of the bottom panel button.
///
/// Pressed values that are not set fall back to the normal ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonBackground {
    pub background_color: Option<String>,
    pub border_color: Option<String>,
    pub border_width: u32,
    pub corner_radius: u32,
    pub pressed_background_color: Option<String>,
    pub pressed_border_color: Option<String>,
    pub pressed_border_width: Option<u32>,
    pub pressed_corner_radius: Option<u32>,
}

impl Default for ButtonBackground {
    fn default() -> Self {
        Self {
            background_color: Some("#FFFFFF".to_string()),
            border_color: None,
            border_width: 0,
            corner_radius: 32,
            pressed_background_color: Some("#F3F2F2".to_string()),
            pressed_border_color: None,
            pressed_border_width: None,
            pressed_corner_radius: None,
        }
    }
}

impl ButtonBackground {
    pub fn pressed_border_color(&self) -> Option<&str> {
        self.pressed_border_color
            .as_deref()
            .or(self.border_color.as_deref())
    }

    pub fn pressed_border_width(&self) -> u32 {
        self.pressed_border_width.unwrap_or(self.border_width)
    }

    pub fn pressed_corner_radius(&self) -> u32 {
        self.pressed_corner_radius.unwrap_or(self.corner_radius)
    }
}

impl CardPromotionProperties {
    pub fn from_payload(data: &Value) -> Result<Self, TemplateError> {
        if data.is_null() {
            return Ok(Self::default());
        }
        Self::deserialize(data).map_err(|e| TemplateError::InvalidPayload {
            widget: WidgetName::CreditCardPromotion,
            message: e.to_string(),
        })
    }

    /// Decode the first variation of a card promotion choice
    pub fn from_choice(choice: &WidgetChoice) -> Result<Self, TemplateError> {
        if choice.widget::<WidgetName>() != Some(WidgetName::CreditCardPromotion) {
            return Err(TemplateError::WrongWidget {
                expected: WidgetName::CreditCardPromotion,
                found: choice.name.clone(),
            });
        }
        let data = choice
            .first_payload_data()
            .ok_or(TemplateError::MissingPayload(WidgetName::CreditCardPromotion))?;
        Self::from_payload(data)
    }

    /// Blank text hides the bottom panel label
    pub fn bottom_text_visible(&self) -> bool {
        is_visible(&self.bottom_text)
    }

    /// Blank text hides the bottom panel button
    pub fn button_visible(&self) -> bool {
        is_visible(&self.button_text)
    }
}

impl DyWidget for CardPromotionProperties {
    fn widget_name(&self) -> WidgetName {
        WidgetName::CreditCardPromotion
    }
}

fn is_visible(text: &Option<String>) -> bool {
    text.as_deref().is_some_and(|t| !t.trim().is_empty())
}
