//! Quote documents: a breakdown frozen for handoff to outer layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::estimator::{Breakdown, LineItem};
use crate::format::format_rupees;

/// A computed breakdown wrapped with identity and a timestamp, ready to be
/// serialized for a booking request or an export. Creating a quote persists
/// nothing; the estimator stays the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub lines: Vec<LineItem>,
    pub total: u64,
    pub formatted_total: String,
}

impl Quote {
    /// Freeze a breakdown into a quote.
    pub fn new(breakdown: Breakdown) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            formatted_total: format_rupees(breakdown.total as i64),
            total: breakdown.total,
            lines: breakdown.lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PricingCatalog;
    use crate::estimator::Estimator;

    #[test]
    fn test_quote_carries_breakdown() {
        let estimator = Estimator::new(PricingCatalog::default());
        let breakdown = estimator.compute_breakdown().unwrap();
        let quote = Quote::new(breakdown.clone());

        assert_eq!(quote.lines, breakdown.lines);
        assert_eq!(quote.total, breakdown.total);
        assert_eq!(quote.formatted_total, "₹1,500");
    }

    #[test]
    fn test_quote_serializes_camel_case() {
        let estimator = Estimator::new(PricingCatalog::default());
        let quote = Quote::new(estimator.compute_breakdown().unwrap());

        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"formattedTotal\""));
        assert!(json.contains("\"logo - base\""));
    }
}
