//! SoilCalc Status Tool
//!
//! Provides runtime status information and usage instructions.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::calc::{MaterialKind, SoilMixRecipe};

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# SoilCalc Instructions

All bed and lawn dimensions are in **feet**, depths in **inches**, and
container dimensions in **inches**. Omitted numbers count as 0 unless a
default is listed below.

## Choosing a Tool

| Job | Tool |
|-----|------|
| Fill a bed of a given shape with one material | `calculate_soil` |
| Fill raised beds with a soil blend | `calculate_raised_bed` |
| Fill a pot or planter | `calculate_container` |
| Mulch a planting area | `calculate_mulch` |
| Top-dress a lawn | `calculate_top_dress` |
| Decide between bulk delivery and bags | `compare_costs` |

## calculate_soil

- `shape`: rectangle (length, width), circle (radius), triangle (base,
  height), trapezoid (base1, base2, height). Default rectangle. An unknown
  shape gives an area of 0.
- `material`: topsoil, mulch, compost, gravel, sand, fill, potting.
  Unknown names use topsoil density (1.3 tons/yd³).
- `bag_size_cubic_feet`: default 2. Must be greater than 0.

## calculate_raised_bed

- `bed_count`: default 1 (0 also means 1); fractions such as 1.5 are allowed.
- `recipe`:
  - basic: 60% topsoil, 40% compost
  - premium: 40% topsoil, 30% compost, 30% amendment
  - mels: 33.3% compost, 66.7% amendment (peat/vermiculite)
  - hugelkultur: 50% topsoil, 30% compost, 20% amendment

## calculate_container

- `kind`: "round" for tapered pots (top_diameter, bottom_diameter,
  height); anything else is a rectangular planter (length, width, height).

## calculate_mulch / calculate_top_dress

- `area` in square feet.
- Depth defaults: mulch 3 in, top-dressing 0.5 in.
- Top-dressing bags are 40 lb bags of about 0.75 cu ft.

## compare_costs

- Bags are 2 cu ft. Ties recommend bagged.

## Reading Results

Every response has raw numbers plus a `display` block already rounded:
2 decimals for yards, tons and money; 1 for area, feet and container
volumes; whole numbers for pounds and bag counts. Quote the `display`
values to the user.
"#;

/// Runtime status of the SoilCalc service
#[derive(Debug, Clone, Serialize)]
pub struct CalculatorStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Supported inputs
    pub materials: Vec<&'static str>,
    pub recipes: Vec<&'static str>,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> CalculatorStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CalculatorStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            materials: MaterialKind::ALL.iter().map(|m| m.as_str()).collect(),
            recipes: SoilMixRecipe::ALL.iter().map(|r| r.as_str()).collect(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
