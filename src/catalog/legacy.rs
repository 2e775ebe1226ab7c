//! Legacy widget catalog.
//!
//! Older admin-panel campaigns are still addressed with these selectors. The
//! catalog is a subset of [`crate::catalog::WidgetName`] whose selectors lack
//! the `-2` suffix; it must not be mixed with the current catalog.

use super::widget_catalog;

widget_catalog! {
    pub enum WidgetName in V1 {
        CreditCardPromotion => "credit-card-promotion",
        CreditCardPromotionSlider => "credit-card-promotion-slider",
        QuickActions => "quick-actions",
        QuickActionsSlider => "quick-actions-slider",
        CrossUpsell => "cross-upsell",
        Activation => "activation",
        Offers => "offers",
        OffersSlider => "offers-slider",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::WidgetCatalog;

    #[test]
    fn test_legacy_selectors_have_no_suffix() {
        assert!(WidgetName::iter().all(|w| !w.selector().ends_with("-2")));
    }

    #[test]
    fn test_legacy_enumeration() {
        assert_eq!(WidgetName::all().len(), 8);
        assert_eq!(WidgetName::all()[0], WidgetName::CreditCardPromotion);
        assert_eq!(WidgetName::all()[7], WidgetName::OffersSlider);
    }

    #[test]
    fn test_legacy_lookup() {
        assert_eq!(WidgetName::from_selector("cross-upsell"), Some(WidgetName::CrossUpsell));
        assert_eq!(WidgetName::from_selector("cross-upsell-2"), None);
        assert_eq!(WidgetName::from_selector("refinance"), None);
    }
}
