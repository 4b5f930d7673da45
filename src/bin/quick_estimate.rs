//! One-shot bed estimate from the command line
//! Usage: cargo run --bin quick_estimate -- <shape> <dimensions...> <depth_in> [material]
//!
//!   rectangle <length> <width>
//!   circle <radius>
//!   triangle <base> <height>
//!   trapezoid <base1> <base2> <height>

use soilcalc::build_info::BuildInfo;
use soilcalc::tools::soil::{calculate_soil, ShapeInput, SoilInput};

/// Number of dimension arguments each shape takes
fn dimension_count(shape: &str) -> usize {
    match shape {
        "circle" => 1,
        "trapezoid" => 3,
        _ => 2,
    }
}

/// Unparseable numbers count as 0
fn number(arg: Option<&String>) -> Option<f64> {
    Some(arg.and_then(|s| s.trim().parse().ok()).unwrap_or(0.0))
}

/// Map `<shape> <dimensions...> <depth_in> [material]` onto a soil input
fn build_input(args: &[String]) -> Option<SoilInput> {
    let shape = args.first()?.to_lowercase();
    let dims = dimension_count(&shape);
    let d = |i: usize| number(args.get(1 + i));

    let dimensions = match shape.as_str() {
        "circle" => ShapeInput { radius: d(0), ..Default::default() },
        "triangle" => ShapeInput { base: d(0), height: d(1), ..Default::default() },
        "trapezoid" => ShapeInput { base1: d(0), base2: d(1), height: d(2), ..Default::default() },
        _ => ShapeInput { length: d(0), width: d(1), ..Default::default() },
    };

    Some(SoilInput {
        shape: Some(shape),
        dimensions,
        depth_inches: number(args.get(1 + dims)),
        material: args.get(2 + dims).cloned(),
        bag_size_cubic_feet: None,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let input = match args.first().map(String::as_str) {
        None | Some("--help") | Some("-h") => None,
        Some(_) => build_input(&args),
    };
    let Some(input) = input else {
        println!("{}", BuildInfo::current().version_line());
        println!("Usage: quick_estimate <shape> <dimensions...> <depth_in> [material]");
        return Ok(());
    };

    let resp = calculate_soil(input)?;

    println!("Shape:       {}", resp.shape);
    println!("Material:    {}", resp.material.as_str());
    println!("Area:        {} sq ft", resp.display.coverage);
    println!("Volume:      {} cu ft", resp.display.cubic_feet);
    println!("             {} cu yd", resp.display.cubic_yards);
    println!("Weight:      {} tons", resp.display.tons);
    println!("Bags (2 cf): {}", resp.display.bags);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rectangle_arguments() {
        let input = build_input(&args(&["rectangle", "10", "4", "6", "compost"])).unwrap();
        assert_eq!(input.dimensions.length, Some(10.0));
        assert_eq!(input.dimensions.width, Some(4.0));
        assert_eq!(input.depth_inches, Some(6.0));
        assert_eq!(input.material.as_deref(), Some("compost"));
        assert_eq!(input.bag_size_cubic_feet, None);
    }

    #[test]
    fn test_circle_takes_one_dimension() {
        let input = build_input(&args(&["Circle", "5", "6"])).unwrap();
        assert_eq!(input.shape.as_deref(), Some("circle"));
        assert_eq!(input.dimensions.radius, Some(5.0));
        assert_eq!(input.dimensions.length, None);
        assert_eq!(input.depth_inches, Some(6.0));
        assert_eq!(input.material, None);

        let resp = calculate_soil(input).unwrap();
        assert!((resp.result.area - 78.5398).abs() < 0.001);
        assert_eq!(resp.display.bags, "20");
    }

    #[test]
    fn test_trapezoid_takes_three_dimensions() {
        let input = build_input(&args(&["trapezoid", "10", "6", "4", "12", "gravel"])).unwrap();
        assert_eq!(input.dimensions.base1, Some(10.0));
        assert_eq!(input.dimensions.base2, Some(6.0));
        assert_eq!(input.dimensions.height, Some(4.0));
        assert_eq!(input.depth_inches, Some(12.0));
        assert_eq!(input.material.as_deref(), Some("gravel"));

        let resp = calculate_soil(input).unwrap();
        assert!((resp.result.cubic_feet - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_unparseable_and_missing_numbers_are_zero() {
        let input = build_input(&args(&["triangle", "abc", "8"])).unwrap();
        assert_eq!(input.dimensions.base, Some(0.0));
        assert_eq!(input.dimensions.height, Some(8.0));
        assert_eq!(input.depth_inches, Some(0.0));

        let resp = calculate_soil(input).unwrap();
        assert_eq!(resp.result.cubic_feet, 0.0);
        assert_eq!(resp.display.bags, "0");
    }

    #[test]
    fn test_unknown_shape_uses_two_dimensions() {
        let input = build_input(&args(&["hexagon", "3", "3", "6", "sand"])).unwrap();
        assert_eq!(input.dimensions.length, Some(3.0));
        assert_eq!(input.dimensions.width, Some(3.0));
        assert_eq!(input.material.as_deref(), Some("sand"));
        assert!(build_input(&[]).is_none());
    }
}
