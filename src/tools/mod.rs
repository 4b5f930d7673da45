//! SoilCalc Tools module
//!
//! Calculator tool implementations: request defaults, engine calls and
//! display formatting.

pub mod containers;
pub mod costs;
pub mod coverage;
pub mod format;
pub mod soil;
pub mod status;
