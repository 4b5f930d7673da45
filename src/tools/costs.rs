//! Cost Comparison Tool

use serde::{Deserialize, Serialize};

use crate::calc::{compare_costs, CostComparison};
use crate::tools::format;

/// Input for compare_costs
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CostInput {
    pub cubic_yards: Option<f64>,
    pub bulk_price_per_yard: Option<f64>,
    /// Price of one 2 cu ft bag
    pub bag_price: Option<f64>,
    pub delivery_fee: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CostDisplay {
    pub bulk_total: String,
    pub bag_total: String,
    pub savings: String,
    pub best_option: &'static str,
}

/// Response for compare_costs
#[derive(Debug, Serialize)]
pub struct CostResponse {
    #[serde(flatten)]
    pub comparison: CostComparison,
    pub display: CostDisplay,
}

pub fn compare(input: CostInput) -> Result<CostResponse, String> {
    let comparison = compare_costs(
        input.cubic_yards.unwrap_or(0.0),
        input.bulk_price_per_yard.unwrap_or(0.0),
        input.bag_price.unwrap_or(0.0),
        input.delivery_fee.unwrap_or(0.0),
    );

    Ok(CostResponse {
        display: CostDisplay {
            bulk_total: format::money(comparison.bulk_total),
            bag_total: format::money(comparison.bag_total),
            savings: format::money(comparison.savings_absolute),
            best_option: comparison.recommendation.display_name(),
        },
        comparison,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::Recommendation;

    #[test]
    fn test_compare_example() {
        let resp = compare(CostInput {
            cubic_yards: Some(3.0),
            bulk_price_per_yard: Some(45.0),
            bag_price: Some(5.0),
            delivery_fee: Some(75.0),
        })
        .unwrap();
        assert_eq!(resp.display.bulk_total, "210.00");
        assert_eq!(resp.display.bag_total, "205.00");
        assert_eq!(resp.display.savings, "5.00");
        assert_eq!(resp.display.best_option, "Bagged");
        assert_eq!(resp.comparison.bags_needed, 41);
    }

    #[test]
    fn test_missing_delivery_fee_is_free() {
        let resp = compare(CostInput {
            cubic_yards: Some(2.0),
            bulk_price_per_yard: Some(30.0),
            bag_price: Some(4.0),
            delivery_fee: None,
        })
        .unwrap();
        // 60 bulk vs 27 bags * 4 = 108
        assert_eq!(resp.comparison.recommendation, Recommendation::Bulk);
        assert_eq!(resp.display.savings, "48.00");
    }

    #[test]
    fn test_empty_request_is_a_tie() {
        let resp = compare(CostInput::default()).unwrap();
        assert_eq!(resp.comparison.recommendation, Recommendation::Bagged);
        assert_eq!(resp.display.bulk_total, "0.00");
    }
}
