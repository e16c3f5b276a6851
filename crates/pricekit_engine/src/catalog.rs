//! The studio rate card: an immutable price lookup table.
//!
//! The built-in [`PricingCatalog::default`] card covers every enumerated
//! combination. Alternate cards can be loaded from YAML, JSON, or TOML files;
//! loaded cards may be incomplete, which [`PricingCatalog::validate`] reports
//! ahead of time and lookups surface as [`PricingError::UnknownOption`].

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::models::{DesignService, SeoLevel, ServiceTier, SiteKind};

/// Base price plus optional per-extra-page price for a site kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SitePricing {
    pub base: u64,
    /// Billed for every page beyond the bundled five. Static sites only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_extra_page: Option<u64>,
}

/// Maintenance rates: a one-time update and a monthly support retainer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePricing {
    pub update: u64,
    pub support: u64,
}

/// Social bundle rates. The bundle always bills posts + reels together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialPricing {
    pub posts: u64,
    pub reels: u64,
}

/// Marketing rates: per-level SEO packages and the social bundle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MarketingPricing {
    pub seo: HashMap<SeoLevel, u64>,
    pub social: SocialPricing,
}

/// The full rate card. Never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PricingCatalog {
    pub design: HashMap<DesignService, HashMap<ServiceTier, u64>>,
    pub web: HashMap<SiteKind, SitePricing>,
    pub maintenance: MaintenancePricing,
    pub marketing: MarketingPricing,
}

impl Default for PricingCatalog {
    /// The studio's published rate card, in whole rupees.
    fn default() -> Self {
        let mut design = HashMap::new();
        design.insert(
            DesignService::Logo,
            HashMap::from([
                (ServiceTier::Base, 1500),
                (ServiceTier::Standard, 3000),
                (ServiceTier::Pro, 5000),
            ]),
        );
        design.insert(
            DesignService::Poster,
            HashMap::from([
                (ServiceTier::Base, 500),
                (ServiceTier::Standard, 1200),
                (ServiceTier::Pro, 2500),
            ]),
        );

        let web = HashMap::from([
            (
                SiteKind::Static,
                SitePricing {
                    base: 5000,
                    per_extra_page: Some(1000),
                },
            ),
            (
                SiteKind::Portfolio,
                SitePricing {
                    base: 8000,
                    per_extra_page: None,
                },
            ),
            (
                SiteKind::Ecommerce,
                SitePricing {
                    base: 25000,
                    per_extra_page: None,
                },
            ),
        ]);

        Self {
            design,
            web,
            maintenance: MaintenancePricing {
                update: 2000,
                support: 5000,
            },
            marketing: MarketingPricing {
                seo: HashMap::from([(SeoLevel::Basic, 8000), (SeoLevel::Advanced, 15000)]),
                social: SocialPricing {
                    posts: 10000,
                    reels: 15000,
                },
            },
        }
    }
}

impl PricingCatalog {
    /// Load a rate card from a file, dispatching on the extension
    /// (`.yaml`/`.yml`, `.json`, or `.toml`).
    pub fn from_path(path: impl AsRef<Path>) -> PricingResult<Self> {
        let path = path.as_ref();
        debug!("Loading pricing catalog from {:?}", path);

        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        match extension {
            "yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
            "json" => Ok(serde_json::from_str(&content)?),
            "toml" => Ok(toml::from_str(&content)?),
            other => Err(PricingError::UnsupportedFormat(other.to_string())),
        }
    }

    /// Price of a design service at a tier.
    pub fn design_price(&self, service: DesignService, tier: ServiceTier) -> PricingResult<u64> {
        self.design
            .get(&service)
            .and_then(|tiers| tiers.get(&tier))
            .copied()
            .ok_or_else(|| PricingError::unknown(format!("design.{}.{}", service, tier)))
    }

    /// Base price of a website kind.
    pub fn site_price(&self, kind: SiteKind) -> PricingResult<u64> {
        self.web
            .get(&kind)
            .map(|pricing| pricing.base)
            .ok_or_else(|| PricingError::unknown(format!("web.{}", kind)))
    }

    /// Per-extra-page price for a website kind.
    pub fn extra_page_price(&self, kind: SiteKind) -> PricingResult<u64> {
        self.web
            .get(&kind)
            .and_then(|pricing| pricing.per_extra_page)
            .ok_or_else(|| PricingError::unknown(format!("web.{}.perExtraPage", kind)))
    }

    /// Flat monthly maintenance & support price.
    pub fn support_price(&self) -> u64 {
        self.maintenance.support
    }

    /// One-time update price from the rate card.
    pub fn update_price(&self) -> u64 {
        self.maintenance.update
    }

    /// Price of an SEO package level.
    pub fn seo_price(&self, level: SeoLevel) -> PricingResult<u64> {
        self.marketing
            .seo
            .get(&level)
            .copied()
            .ok_or_else(|| PricingError::unknown(format!("marketing.seo.{}", level)))
    }

    /// Fixed combined price of the social bundle (posts + reels).
    pub fn social_bundle_price(&self) -> u64 {
        self.marketing.social.posts + self.marketing.social.reels
    }

    /// List every enumerated combination this card fails to price.
    pub fn gaps(&self) -> Vec<String> {
        let mut gaps = Vec::new();

        for service in DesignService::ALL {
            for tier in ServiceTier::ALL {
                if self.design_price(service, tier).is_err() {
                    gaps.push(format!("design.{}.{}", service, tier));
                }
            }
        }

        for kind in SiteKind::ALL {
            if self.site_price(kind).is_err() {
                gaps.push(format!("web.{}", kind));
            }
        }
        // Static sites must carry a per-extra-page price.
        if self.extra_page_price(SiteKind::Static).is_err() {
            gaps.push(format!("web.{}.perExtraPage", SiteKind::Static));
        }

        for level in SeoLevel::PACKAGES {
            if self.seo_price(level).is_err() {
                gaps.push(format!("marketing.seo.{}", level));
            }
        }

        gaps
    }

    /// Fail if any enumerated combination is unpriced.
    pub fn validate(&self) -> PricingResult<()> {
        let gaps = self.gaps();
        if gaps.is_empty() {
            Ok(())
        } else {
            Err(PricingError::CatalogInvalid(gaps.join(", ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_complete() {
        let catalog = PricingCatalog::default();
        assert!(catalog.gaps().is_empty());
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_default_rate_card_values() {
        let catalog = PricingCatalog::default();
        assert_eq!(
            catalog
                .design_price(DesignService::Logo, ServiceTier::Pro)
                .unwrap(),
            5000
        );
        assert_eq!(
            catalog
                .design_price(DesignService::Poster, ServiceTier::Base)
                .unwrap(),
            500
        );
        assert_eq!(catalog.site_price(SiteKind::Ecommerce).unwrap(), 25000);
        assert_eq!(catalog.extra_page_price(SiteKind::Static).unwrap(), 1000);
        assert_eq!(catalog.support_price(), 5000);
        assert_eq!(catalog.update_price(), 2000);
        assert_eq!(catalog.seo_price(SeoLevel::Advanced).unwrap(), 15000);
        assert_eq!(catalog.social_bundle_price(), 25000);
    }

    #[test]
    fn test_missing_entry_is_unknown_option() {
        let mut catalog = PricingCatalog::default();
        catalog.design.remove(&DesignService::Poster);

        let err = catalog
            .design_price(DesignService::Poster, ServiceTier::Base)
            .unwrap_err();
        assert!(matches!(err, PricingError::UnknownOption { .. }));
        assert!(!catalog.gaps().is_empty());
    }

    #[test]
    fn test_non_static_sites_have_no_page_price() {
        let catalog = PricingCatalog::default();
        assert!(catalog.extra_page_price(SiteKind::Portfolio).is_err());
        assert!(catalog.extra_page_price(SiteKind::Ecommerce).is_err());
    }
}
