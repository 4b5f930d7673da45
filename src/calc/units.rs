//! Material types and conversion constants
//!
//! Provides the material density table, soil mix recipes and the fixed
//! volume/weight conversion factors used by the calculator.

use serde::{Deserialize, Serialize};

// ============================================================================
// Volume Conversion Constants
// ============================================================================

/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Cubic feet per cubic yard
pub const CUBIC_FEET_PER_YARD: f64 = 27.0;
/// Cubic inches per cubic foot
pub const CUBIC_INCHES_PER_FOOT: f64 = 1728.0;
/// Cubic inches per US dry quart
pub const CUBIC_INCHES_PER_QUART: f64 = 57.75;
/// Quarts per US gallon
pub const QUARTS_PER_GALLON: f64 = 4.0;
/// Liters per quart
pub const LITERS_PER_QUART: f64 = 0.946;

// ============================================================================
// Bag and Bulk Constants
// ============================================================================

/// Standard bag size for bagged soil and small mulch bags (cu ft)
pub const STANDARD_BAG_CUBIC_FEET: f64 = 2.0;
/// Large mulch bag (cu ft)
pub const LARGE_MULCH_BAG_CUBIC_FEET: f64 = 3.0;
/// A 40 lb bag of top-dressing mix holds roughly this much (cu ft)
pub const TOP_DRESS_BAG_CUBIC_FEET: f64 = 0.75;
/// Weight of one top-dressing bag (lbs)
pub const TOP_DRESS_BAG_LBS: f64 = 40.0;
/// Approximate bulk density of top-dressing mix (lbs per cubic yard)
pub const TOP_DRESS_LBS_PER_YARD: f64 = 2700.0;

// ============================================================================
// Materials
// ============================================================================

/// Bulk landscaping material
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    #[default]
    Topsoil,
    Mulch,
    Compost,
    Gravel,
    Sand,
    Fill,
    Potting,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 7] = [
        MaterialKind::Topsoil,
        MaterialKind::Mulch,
        MaterialKind::Compost,
        MaterialKind::Gravel,
        MaterialKind::Sand,
        MaterialKind::Fill,
        MaterialKind::Potting,
    ];

    /// Density in tons per cubic yard
    pub fn density(&self) -> f64 {
        match self {
            MaterialKind::Topsoil => 1.3,
            MaterialKind::Mulch => 0.5,
            MaterialKind::Compost => 0.8,
            MaterialKind::Gravel => 1.5,
            MaterialKind::Sand => 1.3,
            MaterialKind::Fill => 1.4,
            MaterialKind::Potting => 0.4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Topsoil => "topsoil",
            MaterialKind::Mulch => "mulch",
            MaterialKind::Compost => "compost",
            MaterialKind::Gravel => "gravel",
            MaterialKind::Sand => "sand",
            MaterialKind::Fill => "fill",
            MaterialKind::Potting => "potting",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "topsoil" => Some(MaterialKind::Topsoil),
            "mulch" => Some(MaterialKind::Mulch),
            "compost" => Some(MaterialKind::Compost),
            "gravel" => Some(MaterialKind::Gravel),
            "sand" => Some(MaterialKind::Sand),
            "fill" | "fill dirt" => Some(MaterialKind::Fill),
            "potting" | "potting mix" => Some(MaterialKind::Potting),
            _ => None,
        }
    }
}

// ============================================================================
// Soil Mix Recipes
// ============================================================================

/// Volume split of a raised-bed fill
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MixFractions {
    pub topsoil: f64,
    pub compost: f64,
    pub amendment: f64,
}

/// Named raised-bed soil blend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoilMixRecipe {
    /// 60% topsoil, 40% compost
    #[default]
    Basic,
    /// 40% topsoil, 30% compost, 30% amendment
    Premium,
    /// Mel's mix: one third compost, the rest amendment (peat, vermiculite)
    Mels,
    /// 50% topsoil, 30% compost, 20% woody amendment
    Hugelkultur,
}

impl SoilMixRecipe {
    pub const ALL: [SoilMixRecipe; 4] = [
        SoilMixRecipe::Basic,
        SoilMixRecipe::Premium,
        SoilMixRecipe::Mels,
        SoilMixRecipe::Hugelkultur,
    ];

    pub fn fractions(&self) -> MixFractions {
        let (topsoil, compost, amendment) = match self {
            SoilMixRecipe::Basic => (0.6, 0.4, 0.0),
            SoilMixRecipe::Premium => (0.4, 0.3, 0.3),
            SoilMixRecipe::Mels => (0.0, 0.333, 0.667),
            SoilMixRecipe::Hugelkultur => (0.5, 0.3, 0.2),
        };
        MixFractions {
            topsoil,
            compost,
            amendment,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilMixRecipe::Basic => "basic",
            SoilMixRecipe::Premium => "premium",
            SoilMixRecipe::Mels => "mels",
            SoilMixRecipe::Hugelkultur => "hugelkultur",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Some(SoilMixRecipe::Basic),
            "premium" => Some(SoilMixRecipe::Premium),
            "mels" | "mel's" | "mels mix" => Some(SoilMixRecipe::Mels),
            "hugelkultur" => Some(SoilMixRecipe::Hugelkultur),
            _ => None,
        }
    }
}
