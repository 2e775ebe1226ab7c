use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::WidgetCatalog;
use crate::error::Result;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("a widget selection needs at least one widget")]
    Empty,
}

/// Non-empty, ordered list of widgets to resolve in one request.
///
/// Duplicates are kept as given; [`WidgetSelection::selectors`] collapses them
/// for dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetSelection<C> {
    widgets: Vec<C>,
}

impl<C: WidgetCatalog> WidgetSelection<C> {
    pub fn new(widgets: Vec<C>) -> std::result::Result<Self, SelectionError> {
        if widgets.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(Self { widgets })
    }

    pub fn one(widget: C) -> Self {
        Self { widgets: vec![widget] }
    }

    /// Every widget of the catalog, in definition order
    pub fn all() -> std::result::Result<Self, SelectionError> {
        Self::new(C::all().to_vec())
    }

    /// Parse selector strings through catalog `C`
    pub fn from_selectors<I, S>(selectors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let widgets = selectors
            .into_iter()
            .map(|s| C::parse_selector(s.as_ref()))
            .collect::<std::result::Result<Vec<C>, _>>()?;
        Ok(Self::new(widgets)?)
    }

    pub fn widgets(&self) -> &[C] {
        &self.widgets
    }

    /// Distinct selectors in order of first occurrence
    pub fn selectors(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.widgets
            .iter()
            .map(|w| w.selector())
            .filter(|s| seen.insert(*s))
            .collect()
    }
}

impl<C: WidgetCatalog> TryFrom<Vec<C>> for WidgetSelection<C> {
    type Error = SelectionError;

    fn try_from(widgets: Vec<C>) -> std::result::Result<Self, Self::Error> {
        Self::new(widgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{legacy, WidgetName};
    use crate::error::WidgetError;

    #[test]
    fn test_empty_selection_is_rejected() {
        assert_eq!(WidgetSelection::<WidgetName>::new(vec![]), Err(SelectionError::Empty));
        assert!(WidgetSelection::<WidgetName>::try_from(Vec::new()).is_err());
    }

    #[test]
    fn test_duplicates_kept_but_dispatched_once() {
        let selection = WidgetSelection::new(vec![
            WidgetName::Offers,
            WidgetName::Stories,
            WidgetName::Offers,
        ])
        .unwrap();

        assert_eq!(selection.widgets().len(), 3);
        assert_eq!(selection.selectors(), vec!["offers-2", "stories"]);
    }

    #[test]
    fn test_all_follows_catalog_order() {
        let selection = WidgetSelection::<legacy::WidgetName>::all().unwrap();
        assert_eq!(selection.widgets(), legacy::WidgetName::all());
    }

    #[test]
    fn test_from_selectors() {
        let selection =
            WidgetSelection::<legacy::WidgetName>::from_selectors(["offers", "activation"]).unwrap();
        assert_eq!(
            selection.widgets(),
            &[legacy::WidgetName::Offers, legacy::WidgetName::Activation]
        );

        let unknown = WidgetSelection::<legacy::WidgetName>::from_selectors(["offers-2"]);
        assert!(matches!(unknown, Err(WidgetError::Catalog(_))));

        let empty = WidgetSelection::<legacy::WidgetName>::from_selectors(Vec::<String>::new());
        assert!(matches!(empty, Err(WidgetError::Selection(SelectionError::Empty))));
    }
}
