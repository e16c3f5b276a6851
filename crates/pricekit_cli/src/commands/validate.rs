//! Validate command - Check a rate-card file for unpriced combinations.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use pricekit_engine::{PricingCatalog, PricingError};

#[derive(Args)]
pub struct ValidateArgs {
    /// Rate-card file to validate (yaml, json, or toml)
    #[arg(long, value_name = "PATH")]
    catalog: PathBuf,
}

pub fn execute(args: ValidateArgs) -> Result<()> {
    info!("Validating rate card: {}", args.catalog.display());

    let catalog = PricingCatalog::from_path(&args.catalog)?;
    let gaps = catalog.gaps();

    if gaps.is_empty() {
        println!("✅ Rate card prices every combination");
        return Ok(());
    }

    println!("❌ Rate card has {} unpriced combination(s):", gaps.len());
    for gap in &gaps {
        println!("   - {}", gap);
    }

    Err(PricingError::CatalogInvalid(gaps.join(", ")).into())
}
