//! Bed and container geometry
//!
//! Lengths for beds are in feet, container dimensions in inches.

use serde::{Deserialize, Serialize};

/// Plan shape of a garden bed or lawn area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "lowercase")]
pub enum ShapeDimensions {
    Rectangle { length: f64, width: f64 },
    Circle { radius: f64 },
    Triangle { base: f64, height: f64 },
    Trapezoid { base1: f64, base2: f64, height: f64 },
}

impl ShapeDimensions {
    pub fn name(&self) -> &'static str {
        match self {
            ShapeDimensions::Rectangle { .. } => "rectangle",
            ShapeDimensions::Circle { .. } => "circle",
            ShapeDimensions::Triangle { .. } => "triangle",
            ShapeDimensions::Trapezoid { .. } => "trapezoid",
        }
    }
}

/// Plant container geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ContainerShape {
    RectangularPrism {
        length: f64,
        width: f64,
        height: f64,
    },
    /// Tapered round pot
    TruncatedCone {
        top_diameter: f64,
        bottom_diameter: f64,
        height: f64,
    },
}

impl ContainerShape {
    pub fn name(&self) -> &'static str {
        match self {
            ContainerShape::RectangularPrism { .. } => "rectangular",
            ContainerShape::TruncatedCone { .. } => "round",
        }
    }
}
