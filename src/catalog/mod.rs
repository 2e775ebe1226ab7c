//! Versioned widget catalogs
//!
//! A catalog is a closed set of widget identifiers. Every identifier carries an
//! immutable selector string that addresses the widget type on the remote
//! personalization service. Two catalog versions exist side by side and are
//! never interchangeable: a selector valid in one may be unknown, or mean a
//! different widget, in the other.
//!
//! Reverse lookups go through a [`SelectorIndex`] built once per catalog. The
//! index refuses to build when two identifiers share a selector, so an
//! ambiguous catalog can never serve lookups.

mod index;
mod macros;

pub mod legacy;
mod v2;

use std::fmt;
use std::hash::Hash;

use thiserror::Error;
use tracing::debug;

pub use index::SelectorIndex;
pub(crate) use macros::widget_catalog;
pub use v2::WidgetName;

/// Version tag of a widget catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum CatalogVersion {
    /// Legacy catalog without the `-2` selector suffix
    V1,
    /// Current catalog
    V2,
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogVersion::V1 => write!(f, "v1"),
            CatalogVersion::V2 => write!(f, "v2"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate selector '{selector}' in catalog {catalog}: {first} and {second}")]
    DuplicateSelector {
        catalog: CatalogVersion,
        selector: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("unknown selector '{selector}' in catalog {catalog}")]
    UnknownSelector {
        catalog: CatalogVersion,
        selector: String,
    },
}

/// A closed set of widget identifiers with a bidirectional selector mapping.
///
/// Implemented by the [`widget_catalog!`] macro; the macro guarantees that
/// `all()` lists every variant in definition order.
pub trait WidgetCatalog:
    Copy + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const VERSION: CatalogVersion;

    /// Every identifier of the catalog, in definition order
    fn all() -> &'static [Self];

    /// Selector string used to address this widget on the remote service
    fn selector(self) -> &'static str;

    /// Symbolic name of the identifier
    fn name(self) -> &'static str;

    /// Reverse index of the catalog, built on first use
    fn index() -> &'static SelectorIndex<Self>;

    /// Exact, case-sensitive reverse lookup
    fn from_selector(selector: &str) -> Option<Self> {
        Self::index().get(selector)
    }

    /// Reverse lookup that reports a miss as [`CatalogError::UnknownSelector`]
    fn parse_selector(selector: &str) -> Result<Self, CatalogError> {
        Self::from_selector(selector).ok_or_else(|| CatalogError::UnknownSelector {
            catalog: Self::VERSION,
            selector: selector.to_string(),
        })
    }

    fn iter() -> std::iter::Copied<std::slice::Iter<'static, Self>> {
        Self::all().iter().copied()
    }
}

/// Build the reverse index of one catalog without touching its lazy index
pub fn validate<C: WidgetCatalog>() -> Result<(), CatalogError> {
    let index = SelectorIndex::<C>::build(C::iter())?;
    debug!(catalog = %C::VERSION, widgets = index.len(), "Widget catalog validated");
    Ok(())
}

/// Validate every built-in catalog.
///
/// Binaries call this at startup so that a catalog definition bug surfaces as
/// an error before any lookup can hit the panicking lazy index.
pub fn validate_catalogs() -> Result<(), CatalogError> {
    validate::<legacy::WidgetName>()?;
    validate::<WidgetName>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    widget_catalog! {
        /// Catalog with a selector collision
        enum BrokenCatalog in V1 {
            Offers => "offers",
            OffersSlider => "offers-slider",
            OffersCopy => "offers",
        }
    }

    fn assert_round_trip<C: WidgetCatalog>() {
        for widget in C::iter() {
            assert_eq!(C::from_selector(widget.selector()), Some(widget));
        }
    }

    fn assert_unique_selectors<C: WidgetCatalog>() {
        let selectors: HashSet<&str> = C::iter().map(|w| w.selector()).collect();
        assert_eq!(selectors.len(), C::all().len());
    }

    #[test]
    fn test_selector_round_trip_in_both_catalogs() {
        assert_round_trip::<WidgetName>();
        assert_round_trip::<legacy::WidgetName>();
    }

    #[test]
    fn test_selectors_are_unique_in_both_catalogs() {
        assert_unique_selectors::<WidgetName>();
        assert_unique_selectors::<legacy::WidgetName>();
    }

    #[test]
    fn test_unknown_selector_is_absent() {
        assert_eq!(WidgetName::from_selector("credit-card-promotion-x"), None);
        assert_eq!(WidgetName::from_selector(""), None);
        assert_eq!(WidgetName::from_selector("Credit-Card-Promotion"), None);
        assert_eq!(legacy::WidgetName::from_selector("stories"), None);
    }

    #[test]
    fn test_catalogs_are_independent() {
        assert_eq!(
            legacy::WidgetName::from_selector("quick-actions"),
            Some(legacy::WidgetName::QuickActions)
        );
        assert_eq!(WidgetName::from_selector("quick-actions"), None);
        assert_eq!(
            WidgetName::from_selector("quick-actions-2"),
            Some(WidgetName::QuickActions)
        );
        assert_eq!(legacy::WidgetName::from_selector("quick-actions-2"), None);
    }

    #[test]
    fn test_duplicate_selector_rejected_at_build() {
        let err = SelectorIndex::<BrokenCatalog>::build(BrokenCatalog::iter()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateSelector {
                catalog: CatalogVersion::V1,
                selector: "offers",
                first: "Offers",
                second: "OffersCopy",
            }
        );
        assert!(validate::<BrokenCatalog>().is_err());
    }

    #[test]
    #[should_panic(expected = "duplicate selector 'offers'")]
    fn test_broken_catalog_refuses_lookups() {
        let _ = BrokenCatalog::from_selector("offers-slider");
    }

    #[test]
    fn test_built_in_catalogs_validate() {
        assert!(validate_catalogs().is_ok());
    }

    #[test]
    fn test_version_display() {
        assert_eq!(CatalogVersion::V1.to_string(), "v1");
        assert_eq!(WidgetName::VERSION.to_string(), "v2");
        assert_eq!(legacy::WidgetName::VERSION, CatalogVersion::V1);
    }
}
