//! Selection model: the enumerated service domain and per-session state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PricingError;

/// Top-level service categories, each independently toggleable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Design,
    Web,
    Marketing,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Design, Category::Web, Category::Marketing];

    /// Human-facing title for renderers.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Design => "Graphic Design",
            Category::Web => "Web Development",
            Category::Marketing => "Digital Marketing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Design => write!(f, "design"),
            Category::Web => write!(f, "web"),
            Category::Marketing => write!(f, "marketing"),
        }
    }
}

impl FromStr for Category {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "design" => Ok(Category::Design),
            "web" => Ok(Category::Web),
            "marketing" => Ok(Category::Marketing),
            other => Err(PricingError::invalid("category", other)),
        }
    }
}

/// Graphic design services on the rate card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DesignService {
    Logo,
    Poster,
}

impl DesignService {
    pub const ALL: [DesignService; 2] = [DesignService::Logo, DesignService::Poster];
}

impl fmt::Display for DesignService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DesignService::Logo => write!(f, "logo"),
            DesignService::Poster => write!(f, "poster"),
        }
    }
}

impl FromStr for DesignService {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "logo" => Ok(DesignService::Logo),
            "poster" => Ok(DesignService::Poster),
            other => Err(PricingError::invalid("design service", other)),
        }
    }
}

/// Quality tier within a design service.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceTier {
    #[default]
    Base,
    Standard,
    Pro,
}

impl ServiceTier {
    pub const ALL: [ServiceTier; 3] = [ServiceTier::Base, ServiceTier::Standard, ServiceTier::Pro];
}

impl fmt::Display for ServiceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceTier::Base => write!(f, "base"),
            ServiceTier::Standard => write!(f, "standard"),
            ServiceTier::Pro => write!(f, "pro"),
        }
    }
}

impl FromStr for ServiceTier {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(ServiceTier::Base),
            "standard" => Ok(ServiceTier::Standard),
            "pro" => Ok(ServiceTier::Pro),
            other => Err(PricingError::invalid("service tier", other)),
        }
    }
}

/// Website kinds on the rate card. Only `Static` bills per extra page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SiteKind {
    #[default]
    Static,
    Portfolio,
    Ecommerce,
}

impl SiteKind {
    pub const ALL: [SiteKind; 3] = [SiteKind::Static, SiteKind::Portfolio, SiteKind::Ecommerce];
}

impl fmt::Display for SiteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteKind::Static => write!(f, "static"),
            SiteKind::Portfolio => write!(f, "portfolio"),
            SiteKind::Ecommerce => write!(f, "ecommerce"),
        }
    }
}

impl FromStr for SiteKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(SiteKind::Static),
            "portfolio" => Ok(SiteKind::Portfolio),
            "ecommerce" => Ok(SiteKind::Ecommerce),
            other => Err(PricingError::invalid("site kind", other)),
        }
    }
}

/// SEO package level. `None` means no SEO work is selected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum SeoLevel {
    #[default]
    None,
    Basic,
    Advanced,
}

impl SeoLevel {
    /// The billable packages, i.e. every level the catalog must price.
    pub const PACKAGES: [SeoLevel; 2] = [SeoLevel::Basic, SeoLevel::Advanced];
}

impl fmt::Display for SeoLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeoLevel::None => write!(f, "none"),
            SeoLevel::Basic => write!(f, "basic"),
            SeoLevel::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for SeoLevel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SeoLevel::None),
            "basic" => Ok(SeoLevel::Basic),
            "advanced" => Ok(SeoLevel::Advanced),
            other => Err(PricingError::invalid("seo level", other)),
        }
    }
}

/// Which categories currently contribute to the total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnabledCategories {
    pub design: bool,
    pub web: bool,
    pub marketing: bool,
}

impl Default for EnabledCategories {
    fn default() -> Self {
        // A fresh session starts with only design included.
        Self {
            design: true,
            web: false,
            marketing: false,
        }
    }
}

impl EnabledCategories {
    pub fn is_enabled(&self, category: Category) -> bool {
        match category {
            Category::Design => self.design,
            Category::Web => self.web,
            Category::Marketing => self.marketing,
        }
    }

    pub fn set(&mut self, category: Category, enabled: bool) {
        match category {
            Category::Design => self.design = enabled,
            Category::Web => self.web = enabled,
            Category::Marketing => self.marketing = enabled,
        }
    }

    /// True when no category contributes.
    pub fn is_empty(&self) -> bool {
        !self.design && !self.web && !self.marketing
    }
}

/// Chosen design service and tier.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DesignSelection {
    pub service: DesignService,
    pub tier: ServiceTier,
}

impl Default for DesignSelection {
    fn default() -> Self {
        Self {
            service: DesignService::Logo,
            tier: ServiceTier::Base,
        }
    }
}

/// Chosen website kind, page count, and support add-on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WebSelection {
    pub kind: SiteKind,
    /// Always at least 1. Billed only for static sites.
    pub pages: u32,
    pub support: bool,
}

impl Default for WebSelection {
    fn default() -> Self {
        Self {
            kind: SiteKind::Static,
            pages: 5,
            support: false,
        }
    }
}

/// Chosen SEO level and social-bundle flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MarketingSelection {
    pub seo: SeoLevel,
    pub social: bool,
}

/// Full per-session selection state.
///
/// Sub-option state persists across category toggles: disabling a category
/// excludes it from the total but leaves its choices intact, so re-enabling
/// restores the prior contribution exactly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub enabled: EnabledCategories,
    pub design: DesignSelection,
    pub web: WebSelection,
    pub marketing: MarketingSelection,
}
