//! CLI command definitions.
//!
//! This module defines the command structure for the PriceKit CLI.
//! Each subcommand maps to one engine surface.

use std::path::Path;

use anyhow::Result;
use clap::{Parser, Subcommand};

use pricekit_engine::{Category, PricingCatalog};

pub mod catalog;
pub mod estimate;
pub mod validate;

/// PriceKit - instant service price estimation
#[derive(Parser)]
#[command(name = "pricekit")]
#[command(version, about = "PriceKit - instant service price estimation")]
#[command(long_about = r#"
PriceKit computes itemized cost estimates for studio services: graphic
design, web development, and digital marketing.

WORKFLOWS:
  estimate  → Build a selection from flags and print the itemized breakdown
  catalog   → Print the active rate card
  validate  → Check a rate-card file for unpriced combinations

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Validation failure
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute an itemized estimate for a selection
    Estimate(estimate::EstimateArgs),

    /// Print the active rate card
    Catalog(catalog::CatalogArgs),

    /// Validate a rate-card file
    Validate(validate::ValidateArgs),
}

/// Load the rate card from a file, or fall back to the built-in card.
pub(crate) fn load_catalog(path: Option<&Path>) -> Result<PricingCatalog> {
    match path {
        Some(path) => Ok(PricingCatalog::from_path(path)?),
        None => Ok(PricingCatalog::default()),
    }
}

/// Icon shown next to a category in terminal output.
pub(crate) fn category_icon(category: Category) -> &'static str {
    match category {
        Category::Design => "🎨",
        Category::Web => "💻",
        Category::Marketing => "🚀",
    }
}
