//! Build information module
//!
//! Compile-time build metadata embedded by `build.rs`.

use serde::Serialize;

/// Raw build number as set by the build script
const BUILD_NUMBER_RAW: Option<&str> = option_env!("SOILCALC_BUILD_NUMBER");

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("SOILCALC_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Package description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information structure for serialization
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub description: &'static str,
}

impl BuildInfo {
    /// Get the current build info
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_number: BUILD_NUMBER_RAW
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0),
            build_timestamp: BUILD_TIMESTAMP,
            description: DESCRIPTION,
        }
    }

    /// One-line version string, e.g. "soilcalc 1.0.0 (build 12)"
    pub fn version_line(&self) -> String {
        format!("{} {} (build {})", self.name, self.version, self.build_number)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}

/// Print the startup banner to stderr
pub fn print_startup_banner() {
    let info = BuildInfo::current();
    eprintln!("===============================================");
    eprintln!("  SoilCalc Landscaping Calculator");
    eprintln!("  Version: {} | Build: {}", info.version, info.build_number);
    eprintln!("  Compiled: {}", info.build_timestamp);
    eprintln!("===============================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_build_info() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "soilcalc");
        assert_eq!(info.version, VERSION);
        assert!(info.version_line().starts_with("soilcalc "));
    }

    #[test]
    fn test_build_metadata_is_embedded() {
        let raw = BUILD_NUMBER_RAW.unwrap_or_default();
        let info = BuildInfo::current();
        assert_eq!(info.build_number, raw.trim().parse().unwrap_or(0));
        assert_eq!(BUILD_TIMESTAMP.len(), "2026-01-01T00:00:00Z".len());
        assert!(BUILD_TIMESTAMP.ends_with('Z'));
    }
}
