use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::WidgetCatalog;
use crate::constants::{CUSTOM_JSON_PAYLOAD, DECISIONS_CHOICE_TYPE};

/// The remote service's decision for one requested widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetChoice {
    pub id: u64,
    /// Selector the service resolved this choice for
    pub name: String,
    #[serde(rename = "type", default)]
    pub choice_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision_id: Option<String>,
    #[serde(default)]
    pub variations: Vec<Variation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: u64,
    pub payload: VariationPayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationPayload {
    #[serde(rename = "type")]
    pub payload_type: String,
    #[serde(default)]
    pub data: Value,
}

impl WidgetChoice {
    pub fn new<C: WidgetCatalog>(id: u64, widget: C) -> Self {
        Self {
            id,
            name: widget.selector().to_string(),
            choice_type: DECISIONS_CHOICE_TYPE.to_string(),
            decision_id: None,
            variations: Vec::new(),
        }
    }

    /// Append a custom JSON variation
    pub fn with_payload(mut self, variation_id: u64, data: Value) -> Self {
        self.variations.push(Variation {
            id: variation_id,
            payload: VariationPayload {
                payload_type: CUSTOM_JSON_PAYLOAD.to_string(),
                data,
            },
        });
        self
    }

    /// Resolve the choice name through catalog `C`
    pub fn widget<C: WidgetCatalog>(&self) -> Option<C> {
        C::from_selector(&self.name)
    }

    pub fn first_payload_data(&self) -> Option<&Value> {
        self.variations.first().map(|v| &v.payload.data)
    }
}
