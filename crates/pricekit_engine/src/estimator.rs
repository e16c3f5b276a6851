//! Selection state plus the pure pricing computation.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::PricingCatalog;
use crate::error::{PricingError, PricingResult};
use crate::models::{
    Category, DesignSelection, DesignService, MarketingSelection, Selection, SeoLevel, ServiceTier,
    SiteKind, WebSelection,
};

/// Pages bundled into a static site's base price.
pub const BUNDLED_PAGES: u32 = 5;

/// Kind of a breakdown line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// A category's base contribution.
    Charge,
    /// An additive sub-line (extra pages, support, SEO, social bundle).
    AddOn,
    /// Informational, zero amount.
    Note,
}

/// One line of an itemized breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub category: Category,
    pub label: String,
    pub amount: i64,
    pub kind: LineKind,
}

impl LineItem {
    fn charge(category: Category, label: impl Into<String>, amount: u64) -> Self {
        Self {
            category,
            label: label.into(),
            amount: amount as i64,
            kind: LineKind::Charge,
        }
    }

    fn add_on(category: Category, label: impl Into<String>, amount: u64) -> Self {
        Self {
            category,
            label: label.into(),
            amount: amount as i64,
            kind: LineKind::AddOn,
        }
    }

    fn note(category: Category, label: impl Into<String>) -> Self {
        Self {
            category,
            label: label.into(),
            amount: 0,
            kind: LineKind::Note,
        }
    }
}

/// Itemized pricing result for a selection. Derived, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Breakdown {
    pub lines: Vec<LineItem>,
    pub total: u64,
}

impl Breakdown {
    /// Sum of a single category's lines.
    pub fn category_total(&self, category: Category) -> i64 {
        self.lines
            .iter()
            .filter(|line| line.category == category)
            .map(|line| line.amount)
            .sum()
    }

    /// Lines belonging to a single category, in order.
    pub fn category_lines(&self, category: Category) -> impl Iterator<Item = &LineItem> {
        self.lines.iter().filter(move |line| line.category == category)
    }

    /// True when nothing contributes to the total.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Price estimator for one session.
///
/// Owns an injected immutable [`PricingCatalog`] and the session's
/// [`Selection`]. Mutators update selection state; [`compute_breakdown`]
/// derives the itemized result without touching state, so it can be called
/// any number of times.
///
/// [`compute_breakdown`]: Estimator::compute_breakdown
#[derive(Debug, Clone)]
pub struct Estimator {
    catalog: PricingCatalog,
    selection: Selection,
}

impl Estimator {
    /// Create an estimator with a fresh default selection.
    pub fn new(catalog: PricingCatalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
        }
    }

    /// Create an estimator resuming an existing selection.
    pub fn with_selection(catalog: PricingCatalog, selection: Selection) -> Self {
        Self { catalog, selection }
    }

    pub fn catalog(&self) -> &PricingCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Toggle a category's contribution. Sub-option state is untouched, so
    /// re-enabling restores the prior contribution exactly.
    pub fn set_category_enabled(&mut self, category: Category, enabled: bool) {
        debug!("Category {} enabled={}", category, enabled);
        self.selection.enabled.set(category, enabled);
    }

    /// Replace the design sub-selection.
    pub fn set_design_option(&mut self, service: DesignService, tier: ServiceTier) {
        self.selection.design = DesignSelection { service, tier };
    }

    /// Replace the web sub-selection. Page counts below 1 are rejected and
    /// leave prior state untouched; non-static kinds keep the page count in
    /// state but never bill it.
    pub fn set_web_option(&mut self, kind: SiteKind, pages: u32, support: bool) -> PricingResult<()> {
        if pages < 1 {
            return Err(PricingError::invalid("pages", pages.to_string()));
        }
        self.selection.web = WebSelection {
            kind,
            pages,
            support,
        };
        Ok(())
    }

    /// Replace the marketing sub-selection.
    pub fn set_marketing_option(&mut self, seo: SeoLevel, social: bool) {
        self.selection.marketing = MarketingSelection { seo, social };
    }

    /// Derive the itemized breakdown for the current selection.
    ///
    /// Pure and deterministic: the same selection always yields the same
    /// breakdown, and calling this never changes state.
    pub fn compute_breakdown(&self) -> PricingResult<Breakdown> {
        let mut lines = Vec::new();
        let mut total: u64 = 0;

        if self.selection.enabled.design {
            let DesignSelection { service, tier } = self.selection.design;
            let amount = self.catalog.design_price(service, tier)?;
            lines.push(LineItem::charge(
                Category::Design,
                format!("{} - {}", service, tier),
                amount,
            ));
            total += amount;
        }

        if self.selection.enabled.web {
            let WebSelection {
                kind,
                pages,
                support,
            } = self.selection.web;

            let base = self.catalog.site_price(kind)?;
            lines.push(LineItem::charge(
                Category::Web,
                format!("{} site", kind),
                base,
            ));
            let mut contribution = base;

            if kind == SiteKind::Static && pages > BUNDLED_PAGES {
                let extra = pages - BUNDLED_PAGES;
                let amount = u64::from(extra) * self.catalog.extra_page_price(kind)?;
                lines.push(LineItem::add_on(
                    Category::Web,
                    format!("extra pages ({})", extra),
                    amount,
                ));
                contribution += amount;
            }

            if support {
                let amount = self.catalog.support_price();
                lines.push(LineItem::add_on(
                    Category::Web,
                    "maintenance & support",
                    amount,
                ));
                contribution += amount;
            }

            total += contribution;
        }

        if self.selection.enabled.marketing {
            let MarketingSelection { seo, social } = self.selection.marketing;
            let mut contribution: u64 = 0;

            if seo != SeoLevel::None {
                let amount = self.catalog.seo_price(seo)?;
                lines.push(LineItem::add_on(
                    Category::Marketing,
                    format!("{} SEO", seo),
                    amount,
                ));
                contribution += amount;
            }

            if social {
                let amount = self.catalog.social_bundle_price();
                lines.push(LineItem::add_on(Category::Marketing, "social bundle", amount));
                contribution += amount;
            }

            if contribution == 0 && seo == SeoLevel::None && !social {
                lines.push(LineItem::note(Category::Marketing, "no options selected"));
            }

            total += contribution;
        }

        debug!("Computed breakdown: {} lines, total {}", lines.len(), total);
        Ok(Breakdown { lines, total })
    }
}
