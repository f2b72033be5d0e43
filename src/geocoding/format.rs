//! Detail-card formatting.
//!
//! The rules match the page verbatim: absent values render as "N/A",
//! coordinates get exactly 4 decimals, populations get thousands
//! separators, elevations get a "m" suffix.

/// "3,426,354", or "N/A" when the record carries no population.
/// Zero is a real value and renders as "0".
pub fn format_population(population: Option<u64>) -> String {
    match population {
        Some(n) => group_thousands(n),
        None => "N/A".to_string(),
    }
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// "52.5244, 13.4105"
pub fn format_coords(lat: f64, lon: f64) -> String {
    format!("{:.4}, {:.4}", lat, lon)
}

/// "74 m" (whole meters lose the trailing ".0"), or "N/A".
pub fn format_elevation(elevation: Option<f64>) -> String {
    match elevation {
        Some(m) if m.fract() == 0.0 => format!("{} m", m as i64),
        Some(m) => format!("{:.1} m", m),
        None => "N/A".to_string(),
    }
}

/// The admin region/subregion value, or "N/A" when absent or blank.
pub fn format_region(region: Option<&str>) -> &str {
    match region {
        Some(r) if !r.trim().is_empty() => r,
        _ => "N/A",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_separators() {
        assert_eq!(format_population(Some(0)), "0");
        assert_eq!(format_population(Some(999)), "999");
        assert_eq!(format_population(Some(1000)), "1,000");
        assert_eq!(format_population(Some(3426354)), "3,426,354");
        assert_eq!(format_population(Some(1234567890)), "1,234,567,890");
    }

    #[test]
    fn test_population_missing() {
        assert_eq!(format_population(None), "N/A");
    }

    #[test]
    fn test_coords_four_decimals() {
        assert_eq!(format_coords(52.52437, 13.41053), "52.5244, 13.4105");
        assert_eq!(format_coords(-33.8688, 151.2093), "-33.8688, 151.2093");
        assert_eq!(format_coords(20.0, 0.0), "20.0000, 0.0000");
    }

    #[test]
    fn test_elevation() {
        assert_eq!(format_elevation(Some(74.0)), "74 m");
        assert_eq!(format_elevation(Some(12.5)), "12.5 m");
        assert_eq!(format_elevation(Some(0.0)), "0 m");
        assert_eq!(format_elevation(Some(-2.0)), "-2 m");
        assert_eq!(format_elevation(None), "N/A");
    }

    #[test]
    fn test_region() {
        assert_eq!(format_region(Some("Land Berlin")), "Land Berlin");
        assert_eq!(format_region(Some("")), "N/A");
        assert_eq!(format_region(Some("  ")), "N/A");
        assert_eq!(format_region(None), "N/A");
    }
}
