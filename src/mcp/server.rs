//! SoilCalc MCP Server Implementation
//!
//! Implements the MCP server with all calculator tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::tools::containers::{self, ContainerInput};
use crate::tools::costs::{self, CostInput};
use crate::tools::coverage::{self, CoverageInput};
use crate::tools::soil::{self, RaisedBedInput, ShapeInput, SoilInput};
use crate::tools::status::StatusTracker;

/// SoilCalc MCP Service
#[derive(Clone)]
pub struct SoilCalcService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<SoilCalcService>,
}

impl SoilCalcService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for SoilCalcService {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialize a tool response as pretty JSON text content
fn json_result<T: Serialize>(result: Result<T, String>) -> Result<CallToolResult, McpError> {
    let response = result.map_err(|e| McpError::invalid_params(e, None))?;
    let json = serde_json::to_string_pretty(&response)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Soil Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateSoilParams {
    /// Bed shape: rectangle, circle, triangle, or trapezoid (default rectangle)
    pub shape: Option<String>,
    /// Rectangle length in feet
    pub length: Option<f64>,
    /// Rectangle width in feet
    pub width: Option<f64>,
    /// Circle radius in feet
    pub radius: Option<f64>,
    /// Triangle base in feet
    pub base: Option<f64>,
    /// Triangle or trapezoid height in feet
    pub height: Option<f64>,
    /// Trapezoid first parallel side in feet
    pub base1: Option<f64>,
    /// Trapezoid second parallel side in feet
    pub base2: Option<f64>,
    /// Depth in inches
    pub depth_inches: Option<f64>,
    /// Material: topsoil, mulch, compost, gravel, sand, fill, potting (default topsoil)
    pub material: Option<String>,
    /// Bag size in cubic feet (default 2)
    pub bag_size_cubic_feet: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateRaisedBedParams {
    /// Bed length in feet
    pub length: Option<f64>,
    /// Bed width in feet
    pub width: Option<f64>,
    /// Fill depth in inches
    pub depth_inches: Option<f64>,
    /// Number of identical beds, fractions allowed (default 1)
    pub bed_count: Option<f64>,
    /// Soil mix: basic, premium, mels, or hugelkultur (default basic)
    pub recipe: Option<String>,
}

// ============================================================================
// Container Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateContainerParams {
    /// "round" for a tapered pot, otherwise rectangular
    pub kind: Option<String>,
    /// Round pot top diameter in inches
    pub top_diameter: Option<f64>,
    /// Round pot bottom diameter in inches
    pub bottom_diameter: Option<f64>,
    /// Planter length in inches
    pub length: Option<f64>,
    /// Planter width in inches
    pub width: Option<f64>,
    /// Container height in inches
    pub height: Option<f64>,
}

// ============================================================================
// Coverage Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateMulchParams {
    /// Area to cover in square feet
    pub area: Option<f64>,
    /// Mulch depth in inches (default 3)
    pub depth_inches: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateTopDressParams {
    /// Lawn area in square feet
    pub area: Option<f64>,
    /// Top-dressing depth in inches (default 0.5)
    pub depth_inches: Option<f64>,
}

// ============================================================================
// Cost Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CompareCostsParams {
    /// Volume needed in cubic yards
    pub cubic_yards: Option<f64>,
    /// Bulk price per cubic yard
    pub bulk_price_per_yard: Option<f64>,
    /// Price of one 2 cu ft bag
    pub bag_price: Option<f64>,
    /// Bulk delivery fee (default 0)
    pub delivery_fee: Option<f64>,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl SoilCalcService {
    // --- Status ---

    #[tool(description = "Get the current status of the SoilCalc service including build info, supported materials and recipes, and process information")]
    async fn calculator_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get instructions for using the calculator tools: units, defaults, and how to read results. Call this when unsure which tool fits a request.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    // --- Soil ---

    #[tool(description = "Calculate soil or material volume (cubic feet and yards), weight in tons, and bag count for a bed of a given shape and depth")]
    fn calculate_soil(&self, Parameters(p): Parameters<CalculateSoilParams>) -> Result<CallToolResult, McpError> {
        let input = SoilInput {
            shape: p.shape,
            dimensions: ShapeInput {
                length: p.length, width: p.width, radius: p.radius, base: p.base,
                height: p.height, base1: p.base1, base2: p.base2,
            },
            depth_inches: p.depth_inches,
            material: p.material,
            bag_size_cubic_feet: p.bag_size_cubic_feet,
        };
        json_result(soil::calculate_soil(input))
    }

    #[tool(description = "Calculate total fill for one or more rectangular raised beds and split it into topsoil, compost, and amendment by soil mix recipe")]
    fn calculate_raised_bed(&self, Parameters(p): Parameters<CalculateRaisedBedParams>) -> Result<CallToolResult, McpError> {
        let input = RaisedBedInput {
            length: p.length, width: p.width, depth_inches: p.depth_inches,
            bed_count: p.bed_count, recipe: p.recipe,
        };
        json_result(soil::calculate_raised_bed(input))
    }

    // --- Containers ---

    #[tool(description = "Calculate potting soil for a round tapered pot or rectangular planter, in quarts, gallons, liters, and cubic feet")]
    fn calculate_container(&self, Parameters(p): Parameters<CalculateContainerParams>) -> Result<CallToolResult, McpError> {
        let input = ContainerInput {
            kind: p.kind, top_diameter: p.top_diameter, bottom_diameter: p.bottom_diameter,
            length: p.length, width: p.width, height: p.height,
        };
        json_result(containers::calculate_container(input))
    }

    // --- Coverage ---

    #[tool(description = "Calculate mulch volume and the number of 2 and 3 cubic foot bags for an area")]
    fn calculate_mulch(&self, Parameters(p): Parameters<CalculateMulchParams>) -> Result<CallToolResult, McpError> {
        json_result(coverage::calculate_mulch(CoverageInput { area: p.area, depth_inches: p.depth_inches }))
    }

    #[tool(description = "Calculate lawn top-dressing volume, approximate weight in pounds, and 40 lb bag count")]
    fn calculate_top_dress(&self, Parameters(p): Parameters<CalculateTopDressParams>) -> Result<CallToolResult, McpError> {
        json_result(coverage::calculate_top_dress(CoverageInput { area: p.area, depth_inches: p.depth_inches }))
    }

    // --- Costs ---

    #[tool(description = "Compare bulk delivery against buying 2 cu ft bags for the same volume and recommend the cheaper option")]
    fn compare_costs(&self, Parameters(p): Parameters<CompareCostsParams>) -> Result<CallToolResult, McpError> {
        let input = CostInput {
            cubic_yards: p.cubic_yards, bulk_price_per_yard: p.bulk_price_per_yard,
            bag_price: p.bag_price, delivery_fee: p.delivery_fee,
        };
        json_result(costs::compare(input))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for SoilCalcService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "soilcalc".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("SoilCalc Landscaping Calculator".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "SoilCalc - Soil, mulch, and landscaping material calculator. \
                 Call calculator_instructions first for units and defaults. \
                 Beds: calculate_soil, calculate_raised_bed. \
                 Containers: calculate_container. \
                 Coverage: calculate_mulch, calculate_top_dress. \
                 Costs: compare_costs. \
                 Status: calculator_status."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_result_maps_tool_error() {
        let err = json_result::<()>(Err("bag size must be greater than 0".to_string())).unwrap_err();
        assert!(err.message.contains("bag size"));
    }

    #[test]
    fn test_json_result_serializes_response() {
        let resp = costs::compare(CostInput {
            cubic_yards: Some(3.0),
            bulk_price_per_yard: Some(45.0),
            bag_price: Some(5.0),
            delivery_fee: Some(75.0),
        });
        assert!(json_result(resp).is_ok());
    }

    #[test]
    fn test_service_info() {
        let info = SoilCalcService::new().get_info();
        assert_eq!(info.server_info.name, "soilcalc");
        assert!(info.capabilities.tools.is_some());
    }
}
