//! Widget choice repository contract
//!
//! A repository resolves a [`WidgetSelection`] into the remote service's
//! [`WidgetChoice`]s. Implementations own transport, caching and error
//! mapping; the contract only fixes the request and result shapes:
//!
//! - the selection is never empty, and each distinct selector is dispatched once;
//! - choices come back ordered by the first occurrence of their selector in the
//!   selection, selectors without an answer are omitted;
//! - a failure is exactly one [`CommonError`], passed through unchanged.
//!
//! No retry, backoff or timeout policy is part of the contract. Dropping the
//! returned future cancels the call.

mod error;
mod selection;

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::warn;

use crate::catalog::{WidgetCatalog, WidgetName};
use crate::choice::WidgetChoice;

pub use error::{CommonError, DyResult};
pub use selection::{SelectionError, WidgetSelection};

#[async_trait]
pub trait WidgetRepository<C: WidgetCatalog = WidgetName>: Send + Sync {
    async fn choose_widgets(&self, selection: &WidgetSelection<C>) -> DyResult<Vec<WidgetChoice>>;
}

/// Arrange service choices to follow the selection order.
///
/// Choices for selectors that were not requested are dropped, and only the
/// first choice per selector is kept.
pub fn order_choices<C: WidgetCatalog>(
    selection: &WidgetSelection<C>,
    choices: Vec<WidgetChoice>,
) -> Vec<WidgetChoice> {
    let mut by_name: HashMap<String, WidgetChoice> = HashMap::with_capacity(choices.len());
    for choice in choices {
        if by_name.contains_key(&choice.name) {
            warn!(widget = %choice.name, "Duplicate choice in response, keeping the first");
            continue;
        }
        by_name.insert(choice.name.clone(), choice);
    }

    let ordered: Vec<WidgetChoice> = selection
        .selectors()
        .into_iter()
        .filter_map(|selector| by_name.remove(selector))
        .collect();

    for name in by_name.keys() {
        warn!(widget = %name, catalog = %C::VERSION, "Dropping choice that was not requested");
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::legacy;

    #[test]
    fn test_choices_follow_selection_order() {
        let selection = WidgetSelection::new(vec![
            WidgetName::Stories,
            WidgetName::Offers,
            WidgetName::Activation,
        ])
        .unwrap();

        let choices = vec![
            WidgetChoice::new(1, WidgetName::Activation),
            WidgetChoice::new(2, WidgetName::Stories),
            WidgetChoice::new(3, WidgetName::Offers),
        ];

        let ordered = order_choices(&selection, choices);
        let ids: Vec<u64> = ordered.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_missing_and_unrequested_choices() {
        let selection = WidgetSelection::new(vec![WidgetName::Offers, WidgetName::Refinance]).unwrap();

        let choices = vec![
            WidgetChoice::new(1, WidgetName::Stories),
            WidgetChoice::new(2, WidgetName::Refinance),
            // same variant name in the legacy catalog resolves to another selector
            WidgetChoice::new(3, legacy::WidgetName::Offers),
        ];

        let ordered = order_choices(&selection, choices);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].widget::<WidgetName>(), Some(WidgetName::Refinance));
    }

    #[test]
    fn test_duplicate_request_yields_one_choice() {
        let selection = WidgetSelection::new(vec![WidgetName::Offers, WidgetName::Offers]).unwrap();
        let choices = vec![
            WidgetChoice::new(1, WidgetName::Offers),
            WidgetChoice::new(2, WidgetName::Offers),
        ];

        let ordered = order_choices(&selection, choices);
        assert_eq!(ordered.len(), 1);
        assert_eq!(ordered[0].id, 1);
    }
}
