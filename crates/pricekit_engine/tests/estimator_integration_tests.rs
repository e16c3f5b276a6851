//! Integration tests for the estimator's pricing contract.

use pricekit_engine::{
    Category, DesignService, Estimator, PricingCatalog, PricingError, SeoLevel, ServiceTier,
    SiteKind,
};

/// Same selection, repeated computation, identical breakdown.
#[test]
fn test_compute_breakdown_is_idempotent() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_category_enabled(Category::Web, true);
    estimator.set_web_option(SiteKind::Static, 12, true).unwrap();
    estimator.set_category_enabled(Category::Marketing, true);
    estimator.set_marketing_option(SeoLevel::Basic, true);

    let first = estimator.compute_breakdown().unwrap();
    let second = estimator.compute_breakdown().unwrap();
    assert_eq!(first, second);
}

/// Disabling a category and re-enabling it reproduces the exact prior
/// contribution; sub-option state survives the toggle.
#[test]
fn test_toggle_preserves_sub_option_state() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_design_option(DesignService::Poster, ServiceTier::Pro);

    let before = estimator.compute_breakdown().unwrap();
    assert_eq!(before.category_total(Category::Design), 2500);

    estimator.set_category_enabled(Category::Design, false);
    let disabled = estimator.compute_breakdown().unwrap();
    assert_eq!(disabled.category_total(Category::Design), 0);
    assert_eq!(disabled.total, 0);

    estimator.set_category_enabled(Category::Design, true);
    let after = estimator.compute_breakdown().unwrap();
    assert_eq!(after, before);
}

/// The total always equals the sum of enabled categories' contributions.
#[test]
fn test_total_equals_sum_of_category_contributions() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_design_option(DesignService::Logo, ServiceTier::Standard);
    estimator.set_category_enabled(Category::Web, true);
    estimator.set_web_option(SiteKind::Portfolio, 3, true).unwrap();
    estimator.set_category_enabled(Category::Marketing, true);
    estimator.set_marketing_option(SeoLevel::Advanced, false);

    let breakdown = estimator.compute_breakdown().unwrap();
    let summed: i64 = Category::ALL
        .iter()
        .map(|&category| breakdown.category_total(category))
        .sum();
    assert_eq!(breakdown.total as i64, summed);
    // logo standard 3000 + portfolio 8000 + support 5000 + advanced SEO 15000
    assert_eq!(breakdown.total, 31000);
}

/// Extra-page pricing is zero up to five pages and strictly increasing
/// beyond, for static sites only.
#[test]
fn test_extra_page_pricing_curve() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_category_enabled(Category::Design, false);
    estimator.set_category_enabled(Category::Web, true);

    for pages in 1..=5 {
        estimator.set_web_option(SiteKind::Static, pages, false).unwrap();
        let total = estimator.compute_breakdown().unwrap().total;
        assert_eq!(total, 5000, "pages={} must bill the base price only", pages);
    }

    let mut previous = 5000;
    for pages in 6..=10 {
        estimator.set_web_option(SiteKind::Static, pages, false).unwrap();
        let total = estimator.compute_breakdown().unwrap().total;
        assert!(total > previous, "pages={} must bill more than pages-1", pages);
        previous = total;
    }

    // A portfolio site never bills pages, whatever the count.
    estimator.set_web_option(SiteKind::Portfolio, 50, false).unwrap();
    assert_eq!(estimator.compute_breakdown().unwrap().total, 8000);
}

/// Scenario: design logo/pro alone prices at the pro logo rate.
#[test]
fn test_scenario_logo_pro() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_design_option(DesignService::Logo, ServiceTier::Pro);

    let breakdown = estimator.compute_breakdown().unwrap();
    assert_eq!(breakdown.lines.len(), 1);
    assert_eq!(breakdown.lines[0].label, "logo - pro");
    assert_eq!(breakdown.lines[0].amount, 5000);
    assert_eq!(breakdown.total, 5000);
}

/// Scenario: static site with eight pages bills three extra pages.
#[test]
fn test_scenario_static_site_eight_pages() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_category_enabled(Category::Design, false);
    estimator.set_category_enabled(Category::Web, true);
    estimator.set_web_option(SiteKind::Static, 8, false).unwrap();

    let breakdown = estimator.compute_breakdown().unwrap();
    assert_eq!(breakdown.category_total(Category::Web), 8000);
    assert_eq!(breakdown.total, 8000);

    let labels: Vec<&str> = breakdown.lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["static site", "extra pages (3)"]);
}

/// Scenario: static site at the bundled page count with support.
#[test]
fn test_scenario_static_site_with_support() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_category_enabled(Category::Design, false);
    estimator.set_category_enabled(Category::Web, true);
    estimator.set_web_option(SiteKind::Static, 5, true).unwrap();

    let breakdown = estimator.compute_breakdown().unwrap();
    assert_eq!(breakdown.total, 10000);

    let labels: Vec<&str> = breakdown.lines.iter().map(|l| l.label.as_str()).collect();
    assert_eq!(labels, vec!["static site", "maintenance & support"]);
}

/// Scenario: advanced SEO plus the social bundle.
#[test]
fn test_scenario_marketing_advanced_and_social() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_category_enabled(Category::Design, false);
    estimator.set_category_enabled(Category::Marketing, true);
    estimator.set_marketing_option(SeoLevel::Advanced, true);

    let breakdown = estimator.compute_breakdown().unwrap();
    assert_eq!(breakdown.category_total(Category::Marketing), 40000);
    assert_eq!(breakdown.total, 40000);
}

/// Scenario: everything disabled yields an empty breakdown.
#[test]
fn test_scenario_all_categories_disabled() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    for category in Category::ALL {
        estimator.set_category_enabled(category, false);
    }

    let breakdown = estimator.compute_breakdown().unwrap();
    assert!(breakdown.is_empty());
    assert_eq!(breakdown.total, 0);
}

/// A rejected mutation must not alter prior state.
#[test]
fn test_invalid_page_count_leaves_state_untouched() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    estimator.set_category_enabled(Category::Web, true);
    estimator.set_web_option(SiteKind::Ecommerce, 2, true).unwrap();
    let before = estimator.compute_breakdown().unwrap();

    let err = estimator.set_web_option(SiteKind::Static, 0, false).unwrap_err();
    assert!(matches!(err, PricingError::InvalidSelection { .. }));

    let after = estimator.compute_breakdown().unwrap();
    assert_eq!(after, before);
}

/// Mutating a disabled category's sub-options is a legal no-op on the total.
#[test]
fn test_disabled_category_mutation_is_a_no_op_on_total() {
    let mut estimator = Estimator::new(PricingCatalog::default());
    let before = estimator.compute_breakdown().unwrap();

    estimator.set_web_option(SiteKind::Ecommerce, 9, true).unwrap();
    estimator.set_marketing_option(SeoLevel::Advanced, true);

    let after = estimator.compute_breakdown().unwrap();
    assert_eq!(after.total, before.total);
}

/// An injected alternate catalog drives the computation.
#[test]
fn test_alternate_catalog_substitution() {
    let mut catalog = PricingCatalog::default();
    catalog
        .design
        .get_mut(&DesignService::Logo)
        .unwrap()
        .insert(ServiceTier::Base, 9999);

    let estimator = Estimator::new(catalog);
    assert_eq!(estimator.compute_breakdown().unwrap().total, 9999);
}
