use super::widget_catalog;

widget_catalog! {
    /// Current widget catalog.
    ///
    /// The string value is the selector used to fetch template properties from
    /// the DY admin panel.
    pub enum WidgetName in V2 {
        CreditCardPromotion => "credit-card-promotion",
        CreditCardPromotionSlider => "credit-card-promotion-slider-2",
        QuickActions => "quick-actions-2",
        QuickActionsSlider => "quick-actions-slider-2",
        CrossUpsell => "cross-upsell-2",
        Activation => "activation",
        Offers => "offers-2",
        OffersSlider => "offers-slider-2",
        Refinance => "refinance",
        RefinanceSlider => "refinance-slider-2",
        Stimulation => "stimulation",
        Stories => "stories",
    }
}
