//! Soil Calculator Tools
//!
//! Basic bed volume and raised-bed mix calculations. Missing dimensions
//! default to zero here, never inside the engine.

use serde::{Deserialize, Serialize};

use crate::build_info;
use crate::calc::{
    compute_raised_bed_mix, estimate, MaterialKind, RaisedBedMix, ShapeDimensions,
    SoilMixRecipe, VolumeResult,
};
use crate::calc::units::STANDARD_BAG_CUBIC_FEET;
use crate::tools::format;

/// Name reported in basic calculation responses
pub const CALCULATOR_NAME: &str = "SoilCalc";

/// Loosely-typed bed dimensions as they arrive from a form or tool call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapeInput {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub radius: Option<f64>,
    pub base: Option<f64>,
    pub height: Option<f64>,
    pub base1: Option<f64>,
    pub base2: Option<f64>,
}

/// Input for calculate_soil
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SoilInput {
    /// rectangle, circle, triangle or trapezoid (default rectangle)
    pub shape: Option<String>,
    #[serde(default)]
    pub dimensions: ShapeInput,
    pub depth_inches: Option<f64>,
    pub material: Option<String>,
    pub bag_size_cubic_feet: Option<f64>,
}

/// Input for calculate_raised_bed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaisedBedInput {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub depth_inches: Option<f64>,
    /// Fractional counts are allowed
    pub bed_count: Option<f64>,
    pub recipe: Option<String>,
}

/// Formatted values for display
#[derive(Debug, Serialize)]
pub struct SoilDisplay {
    pub cubic_yards: String,
    pub cubic_feet: String,
    pub tons: String,
    pub bags: String,
    pub coverage: String,
}

/// Response for calculate_soil
#[derive(Debug, Serialize)]
pub struct SoilResponse {
    pub shape: String,
    pub depth_inches: f64,
    pub material: MaterialKind,
    pub bag_size_cubic_feet: f64,
    #[serde(flatten)]
    pub result: VolumeResult,
    pub display: SoilDisplay,
    pub calculator: &'static str,
    pub version: &'static str,
    pub calculated_at: String,
}

#[derive(Debug, Serialize)]
pub struct RaisedBedDisplay {
    pub total: String,
    pub topsoil: String,
    pub compost: String,
    pub amendment: String,
}

/// Response for calculate_raised_bed
#[derive(Debug, Serialize)]
pub struct RaisedBedResponse {
    #[serde(flatten)]
    pub mix: RaisedBedMix,
    pub display: RaisedBedDisplay,
}

/// Build typed dimensions for a shape name
///
/// Returns None for an unrecognized shape.
pub fn parse_shape(shape: &str, dims: &ShapeInput) -> Option<ShapeDimensions> {
    let v = |field: Option<f64>| field.unwrap_or(0.0);

    match shape.trim().to_lowercase().as_str() {
        "rectangle" | "rect" | "square" => Some(ShapeDimensions::Rectangle {
            length: v(dims.length),
            width: v(dims.width),
        }),
        "circle" => Some(ShapeDimensions::Circle {
            radius: v(dims.radius),
        }),
        "triangle" => Some(ShapeDimensions::Triangle {
            base: v(dims.base),
            height: v(dims.height),
        }),
        "trapezoid" => Some(ShapeDimensions::Trapezoid {
            base1: v(dims.base1),
            base2: v(dims.base2),
            height: v(dims.height),
        }),
        _ => None,
    }
}

/// Resolve a material name, falling back to topsoil
pub fn resolve_material(name: Option<&str>) -> MaterialKind {
    match name {
        None => MaterialKind::default(),
        Some(n) => MaterialKind::from_str(n).unwrap_or_else(|| {
            tracing::warn!("Unknown material '{}', using topsoil density", n);
            MaterialKind::default()
        }),
    }
}

/// Resolve a soil mix name, falling back to the basic recipe
pub fn resolve_recipe(name: Option<&str>) -> SoilMixRecipe {
    match name {
        None => SoilMixRecipe::default(),
        Some(n) => SoilMixRecipe::from_str(n).unwrap_or_else(|| {
            tracing::warn!("Unknown soil mix '{}', using basic recipe", n);
            SoilMixRecipe::default()
        }),
    }
}

/// Calculate soil volume, weight and bags for a single bed
pub fn calculate_soil(input: SoilInput) -> Result<SoilResponse, String> {
    let shape_name = input.shape.unwrap_or_else(|| "rectangle".to_string());
    let depth_inches = input.depth_inches.unwrap_or(0.0);
    let material = resolve_material(input.material.as_deref());
    let bag_size = input.bag_size_cubic_feet.unwrap_or(STANDARD_BAG_CUBIC_FEET);

    let result = match parse_shape(&shape_name, &input.dimensions) {
        Some(shape) => estimate(&shape, depth_inches, material, bag_size),
        None => {
            tracing::warn!("Unknown shape '{}', treating area as 0", shape_name);
            // Zero area; the bag size is still validated
            let square = ShapeDimensions::Rectangle { length: 0.0, width: 0.0 };
            estimate(&square, depth_inches, material, bag_size)
        }
    }
    .map_err(|e| e.to_string())?;

    tracing::debug!(
        "calculate_soil: {} {:.1} sq ft at {} in -> {:.2} yd",
        shape_name,
        result.area,
        depth_inches,
        result.cubic_yards
    );

    Ok(SoilResponse {
        shape: shape_name,
        depth_inches,
        material,
        bag_size_cubic_feet: bag_size,
        display: SoilDisplay {
            cubic_yards: format::yards(result.cubic_yards),
            cubic_feet: format::feet(result.cubic_feet),
            tons: format::yards(result.tons),
            bags: result.bag_count.to_string(),
            coverage: format::feet(result.area),
        },
        result,
        calculator: CALCULATOR_NAME,
        version: build_info::VERSION,
        calculated_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
    })
}

/// Calculate fill and component split for raised beds
pub fn calculate_raised_bed(input: RaisedBedInput) -> Result<RaisedBedResponse, String> {
    let length = input.length.unwrap_or(0.0);
    let width = input.width.unwrap_or(0.0);
    let depth_inches = input.depth_inches.unwrap_or(0.0);
    // An empty, zero or NaN bed count means one bed
    let bed_count = input
        .bed_count
        .filter(|c| *c != 0.0 && !c.is_nan())
        .unwrap_or(1.0);
    let recipe = resolve_recipe(input.recipe.as_deref());

    if length < 0.0 || width < 0.0 || depth_inches < 0.0 {
        tracing::warn!(
            "Negative raised bed dimension: {} x {} x {} in",
            length,
            width,
            depth_inches
        );
    }

    let mix = compute_raised_bed_mix(length, width, depth_inches, bed_count, recipe);

    Ok(RaisedBedResponse {
        display: RaisedBedDisplay {
            total: format::yards(mix.total),
            topsoil: format::yards(mix.topsoil),
            compost: format::yards(mix.compost),
            amendment: format::yards(mix.amendment),
        },
        mix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(length: f64, width: f64) -> ShapeInput {
        ShapeInput {
            length: Some(length),
            width: Some(width),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_shape_defaults_missing_fields_to_zero() {
        let dims = ShapeInput {
            base1: Some(4.0),
            height: Some(2.0),
            ..Default::default()
        };
        assert_eq!(
            parse_shape("trapezoid", &dims),
            Some(ShapeDimensions::Trapezoid { base1: 4.0, base2: 0.0, height: 2.0 })
        );
        assert_eq!(
            parse_shape("Circle", &ShapeInput::default()),
            Some(ShapeDimensions::Circle { radius: 0.0 })
        );
        assert_eq!(parse_shape("hexagon", &dims), None);
    }

    #[test]
    fn test_calculate_soil_rectangle() {
        let resp = calculate_soil(SoilInput {
            shape: Some("rectangle".to_string()),
            dimensions: rect(10.0, 5.0),
            depth_inches: Some(3.0),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(resp.material, MaterialKind::Topsoil);
        assert_eq!(resp.bag_size_cubic_feet, 2.0);
        assert_eq!(resp.result.bag_count, 7);
        assert_eq!(resp.display.cubic_yards, "0.46");
        assert_eq!(resp.display.cubic_feet, "12.5");
        assert_eq!(resp.display.tons, "0.60");
        assert_eq!(resp.display.bags, "7");
        assert_eq!(resp.display.coverage, "50.0");
        assert_eq!(resp.calculator, CALCULATOR_NAME);
    }

    #[test]
    fn test_calculate_soil_unknown_shape_gives_zero() {
        let resp = calculate_soil(SoilInput {
            shape: Some("hexagon".to_string()),
            dimensions: rect(10.0, 5.0),
            depth_inches: Some(3.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resp.result.area, 0.0);
        assert_eq!(resp.result.bag_count, 0);
    }

    #[test]
    fn test_resolve_material_fallback() {
        assert_eq!(resolve_material(None), MaterialKind::Topsoil);
        assert_eq!(resolve_material(Some("Gravel")), MaterialKind::Gravel);
        assert_eq!(resolve_material(Some("peat")).density(), 1.3);
        assert_eq!(resolve_recipe(Some("hugelkultur")), SoilMixRecipe::Hugelkultur);
        assert_eq!(resolve_recipe(Some("lasagna")), SoilMixRecipe::Basic);
    }

    #[test]
    fn test_calculate_soil_unknown_material_uses_topsoil() {
        let resp = calculate_soil(SoilInput {
            dimensions: rect(27.0, 1.0),
            depth_inches: Some(12.0),
            material: Some("peat".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(resp.material, MaterialKind::Topsoil);
        assert!((resp.result.tons - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_soil_rejects_zero_bag_size() {
        let err = calculate_soil(SoilInput {
            dimensions: rect(10.0, 5.0),
            depth_inches: Some(3.0),
            bag_size_cubic_feet: Some(0.0),
            ..Default::default()
        })
        .unwrap_err();
        assert!(err.contains("bag size"));
    }

    #[test]
    fn test_raised_bed_defaults() {
        let resp = calculate_raised_bed(RaisedBedInput {
            length: Some(9.0),
            width: Some(3.0),
            depth_inches: Some(12.0),
            bed_count: Some(0.0),
            recipe: Some("unknown".to_string()),
        })
        .unwrap();
        assert_eq!(resp.mix.beds, 1.0);
        assert_eq!(resp.mix.recipe, SoilMixRecipe::Basic);
        assert_eq!(resp.display.total, "1.00");
        assert_eq!(resp.display.topsoil, "0.60");
        assert_eq!(resp.display.compost, "0.40");
        assert_eq!(resp.display.amendment, "0.00");
    }

    #[test]
    fn test_raised_bed_mels_mix() {
        let resp = calculate_raised_bed(RaisedBedInput {
            length: Some(9.0),
            width: Some(3.0),
            depth_inches: Some(12.0),
            bed_count: Some(2.0),
            recipe: Some("mels".to_string()),
        })
        .unwrap();
        assert_eq!(resp.display.total, "2.00");
        assert_eq!(resp.display.topsoil, "0.00");
        assert_eq!(resp.display.compost, "0.67");
        assert_eq!(resp.display.amendment, "1.33");
    }

    #[test]
    fn test_raised_bed_fractional_count_from_json() {
        let input: RaisedBedInput = serde_json::from_str(
            r#"{"length": 9, "width": 3, "depth_inches": 12, "bed_count": 1.5}"#,
        )
        .unwrap();
        let resp = calculate_raised_bed(input).unwrap();
        assert_eq!(resp.mix.beds, 1.5);
        assert_eq!(resp.display.total, "1.50");
    }

    #[test]
    fn test_raised_bed_negative_count_propagates() {
        let resp = calculate_raised_bed(RaisedBedInput {
            length: Some(9.0),
            width: Some(3.0),
            depth_inches: Some(12.0),
            bed_count: Some(-1.0),
            recipe: None,
        })
        .unwrap();
        assert_eq!(resp.display.total, "-1.00");
    }
}
