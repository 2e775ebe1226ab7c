use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{CatalogError, WidgetCatalog};

/// Precomputed selector → identifier mapping for one catalog
#[derive(Debug)]
pub struct SelectorIndex<C> {
    by_selector: HashMap<&'static str, C>,
}

impl<C: WidgetCatalog> SelectorIndex<C> {
    /// Build an index, rejecting the first selector that appears twice
    pub fn build<I: IntoIterator<Item = C>>(entries: I) -> Result<Self, CatalogError> {
        let mut by_selector = HashMap::new();

        for widget in entries {
            match by_selector.entry(widget.selector()) {
                Entry::Occupied(existing) => {
                    let first: C = *existing.get();
                    return Err(CatalogError::DuplicateSelector {
                        catalog: C::VERSION,
                        selector: widget.selector(),
                        first: first.name(),
                        second: widget.name(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(widget);
                }
            }
        }

        Ok(Self { by_selector })
    }

    /// Index for a built-in catalog. A selector collision here is a definition bug.
    pub(crate) fn for_catalog() -> Self {
        match Self::build(C::iter()) {
            Ok(index) => index,
            Err(e) => panic!("invalid widget catalog: {}", e),
        }
    }

    pub fn get(&self, selector: &str) -> Option<C> {
        self.by_selector.get(selector).copied()
    }

    pub fn len(&self) -> usize {
        self.by_selector.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_selector.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::legacy;

    #[test]
    fn test_index_covers_every_widget() {
        let index = SelectorIndex::<legacy::WidgetName>::build(legacy::WidgetName::iter()).unwrap();
        assert_eq!(index.len(), legacy::WidgetName::all().len());
        assert_eq!(index.get("offers"), Some(legacy::WidgetName::Offers));
    }

    #[test]
    fn test_index_from_subset() {
        let index = SelectorIndex::build([legacy::WidgetName::Activation]).unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("offers"), None);
    }

    #[test]
    fn test_repeated_entry_is_a_duplicate() {
        let err = SelectorIndex::build([legacy::WidgetName::Offers, legacy::WidgetName::Offers])
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateSelector { selector: "offers", .. }
        ));
    }

    #[test]
    fn test_empty_index() {
        let index = SelectorIndex::<legacy::WidgetName>::build(Vec::new()).unwrap();
        assert!(index.is_empty());
    }
}
