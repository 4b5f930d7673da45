//! Landscaping material calculation module
//!
//! Geometry, material density and bag/cost conversions.

pub mod converter;
pub mod shape;
pub mod units;

pub use converter::{
    compare_costs, compute_area, compute_bag_count, compute_container_volume,
    compute_mulch_plan, compute_raised_bed_mix, compute_top_dress_plan, compute_volume,
    compute_weight, estimate, to_cubic_yards, CalcError, CalcResult, ContainerVolume,
    CostComparison, MulchPlan, RaisedBedMix, Recommendation, TopDressPlan, VolumeResult,
};
pub use shape::{ContainerShape, ShapeDimensions};
pub use units::{MaterialKind, MixFractions, SoilMixRecipe};
