//! Volume, weight and cost conversions
//!
//! Pure functions from bed/container geometry to material quantities.
//! Nothing here rounds for display; callers format the results.

use std::f64::consts::PI;

use serde::Serialize;
use thiserror::Error;

use super::shape::{ContainerShape, ShapeDimensions};
use super::units::{
    MaterialKind, SoilMixRecipe, CUBIC_FEET_PER_YARD, CUBIC_INCHES_PER_FOOT,
    CUBIC_INCHES_PER_QUART, INCHES_PER_FOOT, LARGE_MULCH_BAG_CUBIC_FEET, LITERS_PER_QUART,
    QUARTS_PER_GALLON, STANDARD_BAG_CUBIC_FEET, TOP_DRESS_BAG_CUBIC_FEET, TOP_DRESS_BAG_LBS,
    TOP_DRESS_LBS_PER_YARD,
};

/// Calculation error types
#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for calculations that can reject their input
pub type CalcResult<T> = Result<T, CalcError>;

// ============================================================================
// Result Records
// ============================================================================

/// Volume, weight and bag count for a single bed
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VolumeResult {
    pub area: f64,
    pub cubic_feet: f64,
    pub cubic_yards: f64,
    pub tons: f64,
    pub bag_count: i64,
}

/// Raised-bed fill split by component, in cubic yards
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RaisedBedMix {
    pub total: f64,
    pub topsoil: f64,
    pub compost: f64,
    pub amendment: f64,
    pub cubic_feet: f64,
    pub beds: f64,
    pub recipe: SoilMixRecipe,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerVolume {
    pub cubic_inches: f64,
    pub quarts: f64,
    pub gallons: f64,
    pub liters: f64,
    pub cubic_feet: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MulchPlan {
    pub cubic_yards: f64,
    pub cubic_feet: f64,
    pub bags_2cf: i64,
    pub bags_3cf: i64,
    /// Area covered, square feet
    pub coverage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TopDressPlan {
    pub cubic_yards: f64,
    pub cubic_feet: f64,
    pub weight_lbs: f64,
    /// Bags by volume (0.75 cu ft each)
    pub bag_count: i64,
    /// Bags by weight (40 lbs each)
    pub bags_40lb: i64,
    pub coverage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Bulk,
    Bagged,
}

impl Recommendation {
    pub fn display_name(&self) -> &'static str {
        match self {
            Recommendation::Bulk => "Bulk Delivery",
            Recommendation::Bagged => "Bagged",
        }
    }
}

/// Bulk delivery vs bagged purchase
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostComparison {
    pub cubic_yards: f64,
    pub bulk_total: f64,
    pub bags_needed: i64,
    pub bag_total: f64,
    pub savings_absolute: f64,
    pub recommendation: Recommendation,
}

// ============================================================================
// Core Conversions
// ============================================================================

/// Plan area of a bed shape, in square units of its dimensions
pub fn compute_area(shape: &ShapeDimensions) -> f64 {
    match *shape {
        ShapeDimensions::Rectangle { length, width } => length * width,
        ShapeDimensions::Circle { radius } => PI * radius * radius,
        ShapeDimensions::Triangle { base, height } => (base * height) / 2.0,
        ShapeDimensions::Trapezoid {
            base1,
            base2,
            height,
        } => ((base1 + base2) / 2.0) * height,
    }
}

/// Cubic feet of material to cover `area` square feet at `depth_inches`
pub fn compute_volume(area: f64, depth_inches: f64) -> f64 {
    area * (depth_inches / INCHES_PER_FOOT)
}

pub fn to_cubic_yards(cubic_feet: f64) -> f64 {
    cubic_feet / CUBIC_FEET_PER_YARD
}

/// Weight in tons of `cubic_yards` of the given material
pub fn compute_weight(cubic_yards: f64, material: MaterialKind) -> f64 {
    cubic_yards * material.density()
}

/// Number of bags of `bag_size_cubic_feet` needed to hold `cubic_feet`
///
/// Rounds up. Negative volumes give negative counts.
pub fn compute_bag_count(cubic_feet: f64, bag_size_cubic_feet: f64) -> CalcResult<i64> {
    if bag_size_cubic_feet.is_nan() || bag_size_cubic_feet <= 0.0 {
        return Err(CalcError::InvalidArgument(format!(
            "bag size must be greater than 0, got {}",
            bag_size_cubic_feet
        )));
    }
    Ok(ceil_count(cubic_feet / bag_size_cubic_feet))
}

/// Ceiling as a signed count; NaN becomes 0
fn ceil_count(units: f64) -> i64 {
    units.ceil() as i64
}

/// Basic bed calculation: area, volume, weight and bag count in one pass
pub fn estimate(
    shape: &ShapeDimensions,
    depth_inches: f64,
    material: MaterialKind,
    bag_size_cubic_feet: f64,
) -> CalcResult<VolumeResult> {
    let area = compute_area(shape);
    let cubic_feet = compute_volume(area, depth_inches);
    let cubic_yards = to_cubic_yards(cubic_feet);
    let tons = compute_weight(cubic_yards, material);
    let bag_count = compute_bag_count(cubic_feet, bag_size_cubic_feet)?;

    Ok(VolumeResult {
        area,
        cubic_feet,
        cubic_yards,
        tons,
        bag_count,
    })
}

// ============================================================================
// Specialised Calculators
// ============================================================================

/// Fill for `bed_count` identical rectangular raised beds
pub fn compute_raised_bed_mix(
    length: f64,
    width: f64,
    depth_inches: f64,
    bed_count: f64,
    recipe: SoilMixRecipe,
) -> RaisedBedMix {
    let cubic_feet = (length * width * (depth_inches / INCHES_PER_FOOT)) * bed_count;
    let cubic_yards = to_cubic_yards(cubic_feet);
    let mix = recipe.fractions();

    RaisedBedMix {
        total: cubic_yards,
        topsoil: cubic_yards * mix.topsoil,
        compost: cubic_yards * mix.compost,
        amendment: cubic_yards * mix.amendment,
        cubic_feet,
        beds: bed_count,
        recipe,
    }
}

/// Soil capacity of a container measured in inches
pub fn compute_container_volume(shape: &ContainerShape) -> ContainerVolume {
    let cubic_inches = match *shape {
        ContainerShape::RectangularPrism {
            length,
            width,
            height,
        } => length * width * height,
        ContainerShape::TruncatedCone {
            top_diameter,
            bottom_diameter,
            height,
        } => {
            let r1 = top_diameter / 2.0;
            let r2 = bottom_diameter / 2.0;
            (PI * height / 3.0) * (r1 * r1 + r1 * r2 + r2 * r2)
        }
    };

    let quarts = cubic_inches / CUBIC_INCHES_PER_QUART;

    ContainerVolume {
        cubic_inches,
        quarts,
        gallons: quarts / QUARTS_PER_GALLON,
        liters: quarts * LITERS_PER_QUART,
        cubic_feet: cubic_inches / CUBIC_INCHES_PER_FOOT,
    }
}

pub fn compute_mulch_plan(area: f64, depth_inches: f64) -> MulchPlan {
    let cubic_feet = compute_volume(area, depth_inches);

    MulchPlan {
        cubic_yards: to_cubic_yards(cubic_feet),
        cubic_feet,
        bags_2cf: ceil_count(cubic_feet / STANDARD_BAG_CUBIC_FEET),
        bags_3cf: ceil_count(cubic_feet / LARGE_MULCH_BAG_CUBIC_FEET),
        coverage: area,
    }
}

/// Lawn top-dressing quantities for `area` square feet at `depth_inches`
pub fn compute_top_dress_plan(area: f64, depth_inches: f64) -> TopDressPlan {
    let cubic_feet = compute_volume(area, depth_inches);
    let cubic_yards = to_cubic_yards(cubic_feet);
    let weight_lbs = cubic_yards * TOP_DRESS_LBS_PER_YARD;

    TopDressPlan {
        cubic_yards,
        cubic_feet,
        weight_lbs,
        bag_count: ceil_count(cubic_feet / TOP_DRESS_BAG_CUBIC_FEET),
        bags_40lb: ceil_count(weight_lbs / TOP_DRESS_BAG_LBS),
        coverage: area,
    }
}

/// Compare bulk delivery against 2 cu ft bags for the same volume
///
/// Ties go to bagged.
pub fn compare_costs(
    cubic_yards: f64,
    bulk_price_per_yard: f64,
    bag_price: f64,
    delivery_fee: f64,
) -> CostComparison {
    let bulk_total = (cubic_yards * bulk_price_per_yard) + delivery_fee;
    let cubic_feet = cubic_yards * CUBIC_FEET_PER_YARD;
    let bags_needed = ceil_count(cubic_feet / STANDARD_BAG_CUBIC_FEET);
    let bag_total = bags_needed as f64 * bag_price;

    let recommendation = if bulk_total < bag_total {
        Recommendation::Bulk
    } else {
        Recommendation::Bagged
    };

    CostComparison {
        cubic_yards,
        bulk_total,
        bags_needed,
        bag_total,
        savings_absolute: (bulk_total - bag_total).abs(),
        recommendation,
    }
}
