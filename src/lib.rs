//! SoilCalc Library
//!
//! Volume, weight, bag and cost calculations for soil, mulch and other
//! landscaping materials.

pub mod build_info;
pub mod calc;
pub mod mcp;
pub mod tools;
