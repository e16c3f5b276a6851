//! Estimate command - Build a selection from flags and print the breakdown.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use pricekit_engine::{
    format_rupees, Breakdown, Category, DesignService, Estimator, LineKind, Quote, SeoLevel,
    ServiceTier, SiteKind,
};

use super::{category_icon, load_catalog};

#[derive(Args)]
pub struct EstimateArgs {
    /// Design service to include (logo, poster)
    #[arg(long, value_name = "SERVICE")]
    design: Option<DesignService>,

    /// Design quality tier (base, standard, pro)
    #[arg(long, value_name = "TIER", default_value = "base")]
    tier: ServiceTier,

    /// Website kind to include (static, portfolio, ecommerce)
    #[arg(long, value_name = "KIND")]
    web: Option<SiteKind>,

    /// Page count for a static site
    #[arg(long, value_name = "N", default_value_t = 5)]
    pages: u32,

    /// Include monthly maintenance & support
    #[arg(long)]
    support: bool,

    /// SEO package to include (none, basic, advanced)
    #[arg(long, value_name = "LEVEL")]
    seo: Option<SeoLevel>,

    /// Include the social boost bundle (10 posts + 5 reels)
    #[arg(long)]
    social: bool,

    /// Alternate rate-card file (yaml, json, or toml)
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Emit the quote as JSON instead of a receipt
    #[arg(long)]
    json: bool,
}

pub fn execute(args: EstimateArgs) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let mut estimator = Estimator::new(catalog);

    estimator.set_category_enabled(Category::Design, args.design.is_some());
    if let Some(service) = args.design {
        estimator.set_design_option(service, args.tier);
    }

    estimator.set_category_enabled(Category::Web, args.web.is_some());
    if let Some(kind) = args.web {
        estimator.set_web_option(kind, args.pages, args.support)?;
    }

    let marketing = args.seo.is_some() || args.social;
    estimator.set_category_enabled(Category::Marketing, marketing);
    if marketing {
        estimator.set_marketing_option(args.seo.unwrap_or(SeoLevel::None), args.social);
    }

    let breakdown = estimator.compute_breakdown()?;
    info!("Estimate computed: total {}", breakdown.total);

    if args.json {
        let quote = Quote::new(breakdown);
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        render_receipt(estimator.selection().enabled.is_empty(), &breakdown);
    }

    Ok(())
}

/// Render the breakdown as a terminal receipt.
fn render_receipt(nothing_selected: bool, breakdown: &Breakdown) {
    println!("Estimated Cost");
    println!("{}", "─".repeat(44));

    if nothing_selected {
        println!("Select categories to build your package.");
    }

    for category in Category::ALL {
        let mut lines = breakdown.category_lines(category).peekable();
        if lines.peek().is_none() {
            continue;
        }

        println!("{} {}", category_icon(category), category.title());
        for line in lines {
            match line.kind {
                LineKind::Charge => {
                    println!("   {:<29}{:>12}", line.label, format_rupees(line.amount));
                }
                LineKind::AddOn => {
                    let label = format!("+ {}", line.label);
                    println!("   {:<29}{:>12}", label, format_rupees(line.amount));
                }
                LineKind::Note => {
                    println!("   ({})", line.label);
                }
            }
        }
    }

    println!("{}", "─".repeat(44));
    println!(
        "{:<32}{:>12}",
        "Total Estimate",
        format_rupees(breakdown.total as i64)
    );
}
