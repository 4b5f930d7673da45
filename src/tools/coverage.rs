//! Mulch and Top-Dressing Tools
//!
//! Area-based coverage calculators. Depth defaults follow the common
//! application depths: 3 in for mulch, 0.5 in for lawn top-dressing.

use serde::{Deserialize, Serialize};

use crate::calc::{compute_mulch_plan, compute_top_dress_plan, MulchPlan, TopDressPlan};
use crate::tools::format;

/// Default mulch depth in inches
pub const DEFAULT_MULCH_DEPTH: f64 = 3.0;
/// Default top-dressing depth in inches
pub const DEFAULT_TOP_DRESS_DEPTH: f64 = 0.5;

/// Input for calculate_mulch and calculate_top_dress
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoverageInput {
    /// Area in square feet
    pub area: Option<f64>,
    pub depth_inches: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct MulchDisplay {
    pub cubic_yards: String,
    pub bags_2cf: String,
    pub bags_3cf: String,
    pub coverage: String,
}

/// Response for calculate_mulch
#[derive(Debug, Serialize)]
pub struct MulchResponse {
    pub depth_inches: f64,
    #[serde(flatten)]
    pub plan: MulchPlan,
    pub display: MulchDisplay,
}

#[derive(Debug, Serialize)]
pub struct TopDressDisplay {
    pub cubic_yards: String,
    pub bags: String,
    pub weight_lbs: String,
    pub coverage: String,
}

/// Response for calculate_top_dress
#[derive(Debug, Serialize)]
pub struct TopDressResponse {
    pub depth_inches: f64,
    #[serde(flatten)]
    pub plan: TopDressPlan,
    pub display: TopDressDisplay,
}

/// A missing or zero depth falls back to the default
fn depth_or(depth: Option<f64>, default: f64) -> f64 {
    depth.filter(|d| *d != 0.0).unwrap_or(default)
}

pub fn calculate_mulch(input: CoverageInput) -> Result<MulchResponse, String> {
    let area = input.area.unwrap_or(0.0);
    let depth_inches = depth_or(input.depth_inches, DEFAULT_MULCH_DEPTH);
    let plan = compute_mulch_plan(area, depth_inches);

    Ok(MulchResponse {
        depth_inches,
        plan,
        display: MulchDisplay {
            cubic_yards: format::yards(plan.cubic_yards),
            bags_2cf: plan.bags_2cf.to_string(),
            bags_3cf: plan.bags_3cf.to_string(),
            coverage: format::feet(plan.coverage),
        },
    })
}

pub fn calculate_top_dress(input: CoverageInput) -> Result<TopDressResponse, String> {
    let area = input.area.unwrap_or(0.0);
    let depth_inches = depth_or(input.depth_inches, DEFAULT_TOP_DRESS_DEPTH);
    let plan = compute_top_dress_plan(area, depth_inches);

    Ok(TopDressResponse {
        depth_inches,
        plan,
        display: TopDressDisplay {
            cubic_yards: format::yards(plan.cubic_yards),
            bags: plan.bag_count.to_string(),
            weight_lbs: format::pounds(plan.weight_lbs),
            coverage: format::feet(plan.coverage),
        },
    })
}
