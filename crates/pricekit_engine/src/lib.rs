//! # pricekit_engine
//!
//! Deterministic, configuration-driven price estimation for PriceKit.
//!
//! Given a selection of service categories, sub-options, and tiers, the
//! engine computes an itemized cost breakdown and a total against an
//! immutable rate card.
//!
//! ## Features
//!
//! - **Pricing Catalog**: the studio rate card, with a complete built-in
//!   default and YAML/JSON/TOML file loading for alternate cards
//! - **Estimator**: per-session selection state plus the pure
//!   (catalog, selection) → breakdown computation
//! - **Quotes**: breakdowns frozen into serializable documents
//! - **Validation**: closed enums reject out-of-domain input at the
//!   boundary; catalog validation reports unpriced combinations up front
//!
//! Everything is synchronous and single-threaded; an estimator belongs to
//! exactly one session and performs no I/O beyond optional catalog loading.
//!
//! ## Example
//!
//! ```rust
//! use pricekit_engine::{Category, Estimator, PricingCatalog, SiteKind};
//!
//! let mut estimator = Estimator::new(PricingCatalog::default());
//! estimator.set_category_enabled(Category::Web, true);
//! estimator.set_web_option(SiteKind::Static, 8, false).unwrap();
//!
//! let breakdown = estimator.compute_breakdown().unwrap();
//! // logo - base (1500) + static site (5000) + 3 extra pages (3000)
//! assert_eq!(breakdown.total, 9500);
//! ```

pub mod catalog;
pub mod error;
pub mod estimator;
pub mod format;
pub mod models;
pub mod quote;

pub use catalog::{MaintenancePricing, MarketingPricing, PricingCatalog, SitePricing, SocialPricing};
pub use error::{PricingError, PricingResult};
pub use estimator::{Breakdown, Estimator, LineItem, LineKind, BUNDLED_PAGES};
pub use format::{format_rupees, group_rupees};
pub use models::{
    Category, DesignSelection, DesignService, EnabledCategories, MarketingSelection, Selection,
    SeoLevel, ServiceTier, SiteKind, WebSelection,
};
pub use quote::Quote;
