//! Catalog command - Print the active rate card.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use pricekit_engine::{
    format_rupees, Category, DesignService, PricingCatalog, SeoLevel, ServiceTier, SiteKind,
    BUNDLED_PAGES,
};

use super::{category_icon, load_catalog};

#[derive(Args)]
pub struct CatalogArgs {
    /// Alternate rate-card file (yaml, json, or toml)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    info!(
        "Showing rate card ({})",
        args.catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "built-in".to_string())
    );

    render_rate_card(&catalog);
    Ok(())
}

fn rupees(amount: u64) -> String {
    format_rupees(amount as i64)
}

/// Print the full rate card, one section per category.
fn render_rate_card(catalog: &PricingCatalog) {
    println!("{} {}", category_icon(Category::Design), Category::Design.title());
    for service in DesignService::ALL {
        let tiers: Vec<String> = ServiceTier::ALL
            .iter()
            .map(|&tier| match catalog.design_price(service, tier) {
                Ok(price) => format!("{} {}", tier, rupees(price)),
                Err(_) => format!("{} (unpriced)", tier),
            })
            .collect();
        println!("   {:<12}{}", service.to_string(), tiers.join(" / "));
    }

    println!("{} {}", category_icon(Category::Web), Category::Web.title());
    for kind in SiteKind::ALL {
        match catalog.site_price(kind) {
            Ok(base) => match catalog.extra_page_price(kind) {
                Ok(per_page) => println!(
                    "   {:<12}{} base, {} per page beyond {}",
                    format!("{} site", kind),
                    rupees(base),
                    rupees(per_page),
                    BUNDLED_PAGES
                ),
                Err(_) => println!("   {:<12}{} base", format!("{} site", kind), rupees(base)),
            },
            Err(_) => println!("   {:<12}(unpriced)", format!("{} site", kind)),
        }
    }
    println!(
        "   {:<12}{} one-time update, {} monthly support",
        "maintenance",
        rupees(catalog.update_price()),
        rupees(catalog.support_price())
    );

    println!(
        "{} {}",
        category_icon(Category::Marketing),
        Category::Marketing.title()
    );
    for level in SeoLevel::PACKAGES {
        match catalog.seo_price(level) {
            Ok(price) => println!("   {:<12}{}", format!("{} SEO", level), rupees(price)),
            Err(_) => println!("   {:<12}(unpriced)", format!("{} SEO", level)),
        }
    }
    println!(
        "   {:<12}{} (posts {} + reels {})",
        "social",
        rupees(catalog.social_bundle_price()),
        rupees(catalog.marketing.social.posts),
        rupees(catalog.marketing.social.reels)
    );
}
