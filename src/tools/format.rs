//! Display formatting for calculator results

/// Decimal places for cubic yards, tons and money
pub const YARDS_PLACES: usize = 2;
/// Decimal places for area, cubic feet and container volumes
pub const FEET_PLACES: usize = 1;
/// Decimal places for weights in pounds
pub const WEIGHT_PLACES: usize = 0;

/// Format with a fixed number of decimal places
pub fn fixed(value: f64, places: usize) -> String {
    format!("{:.*}", places, value)
}

pub fn yards(value: f64) -> String {
    fixed(value, YARDS_PLACES)
}

pub fn feet(value: f64) -> String {
    fixed(value, FEET_PLACES)
}

pub fn pounds(value: f64) -> String {
    fixed(value, WEIGHT_PLACES)
}

pub fn money(value: f64) -> String {
    fixed(value, YARDS_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_places() {
        assert_eq!(yards(0.462962), "0.46");
        assert_eq!(feet(12.5), "12.5");
        assert_eq!(feet(50.0), "50.0");
        assert_eq!(pounds(4166.67), "4167");
        assert_eq!(money(210.0), "210.00");
    }
}
