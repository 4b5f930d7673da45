//! Embeds a build counter and UTC build timestamp.
//!
//! The counter lives in OUT_DIR so builds never touch the source tree.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const COUNTER_FILE: &str = "soilcalc_build_number";

fn next_build_number(out_dir: &Path) -> std::io::Result<u64> {
    let path = out_dir.join(COUNTER_FILE);
    let previous = fs::read_to_string(&path)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(0);
    let next = previous + 1;
    fs::write(&path, next.to_string())?;
    Ok(next)
}

fn main() {
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=SOILCALC_BUILD_NUMBER");

    // An explicit build number (CI) wins over the local counter
    let build_number = match env::var("SOILCALC_BUILD_NUMBER") {
        Ok(n) if !n.trim().is_empty() => n.trim().to_string(),
        _ => env::var_os("OUT_DIR")
            .map(PathBuf::from)
            .and_then(|dir| next_build_number(&dir).ok())
            .unwrap_or(0)
            .to_string(),
    };

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");

    println!("cargo:rustc-env=SOILCALC_BUILD_NUMBER={}", build_number);
    println!("cargo:rustc-env=SOILCALC_BUILD_TIMESTAMP={}", timestamp);
}
