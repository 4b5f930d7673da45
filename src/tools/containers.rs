//! Container Calculator Tool

use serde::{Deserialize, Serialize};

use crate::calc::{compute_container_volume, ContainerShape, ContainerVolume};
use crate::tools::format;

/// Input for calculate_container, dimensions in inches
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerInput {
    /// "round" for a tapered pot; anything else is a rectangular planter
    pub kind: Option<String>,
    pub top_diameter: Option<f64>,
    pub bottom_diameter: Option<f64>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ContainerDisplay {
    pub quarts: String,
    pub gallons: String,
    pub liters: String,
    pub cubic_feet: String,
}

/// Response for calculate_container
#[derive(Debug, Serialize)]
pub struct ContainerResponse {
    pub shape: ContainerShape,
    #[serde(flatten)]
    pub volume: ContainerVolume,
    pub display: ContainerDisplay,
}

/// Build the container geometry from a loosely-typed request
pub fn parse_container(input: &ContainerInput) -> ContainerShape {
    let v = |field: Option<f64>| field.unwrap_or(0.0);

    let round = input
        .kind
        .as_deref()
        .map(|k| k.trim().eq_ignore_ascii_case("round"))
        .unwrap_or(false);

    if round {
        ContainerShape::TruncatedCone {
            top_diameter: v(input.top_diameter),
            bottom_diameter: v(input.bottom_diameter),
            height: v(input.height),
        }
    } else {
        ContainerShape::RectangularPrism {
            length: v(input.length),
            width: v(input.width),
            height: v(input.height),
        }
    }
}

/// Calculate potting soil needed for one container
pub fn calculate_container(input: ContainerInput) -> Result<ContainerResponse, String> {
    let shape = parse_container(&input);
    let volume = compute_container_volume(&shape);

    tracing::debug!(
        "calculate_container: {} -> {:.1} cu in",
        shape.name(),
        volume.cubic_inches
    );

    Ok(ContainerResponse {
        shape,
        volume,
        display: ContainerDisplay {
            quarts: format::feet(volume.quarts),
            gallons: format::feet(volume.gallons),
            liters: format::feet(volume.liters),
            cubic_feet: format::yards(volume.cubic_feet),
        },
    })
}
