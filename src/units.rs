//! Numeric conversions between KML values and OSMAnd GPX values.

/// Scale a KML line width (1000–32000) to an OSMAnd track width (1–24).
pub fn kml_width_to_line_width(kml_width: i64) -> u8 {
    ((((kml_width - 1000) as f64) / 31000.0 * 23.0) + 1.0).round() as u8
}

/// Split intervals of type `time` are entered in minutes but stored in
/// seconds in the GPX extensions.
pub fn minutes_to_seconds(minutes: f64) -> i64 {
    (minutes * 60.0).round() as i64
}

/// Split intervals of type `distance` are entered in miles but stored in
/// meters in the GPX extensions.
pub fn miles_to_meters(miles: f64) -> f64 {
    miles * 1609.34
}

/// Elevations are written with exactly one decimal place.
pub fn format_elevation(raw: f64) -> String {
    format!("{raw:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_boundaries() {
        assert_eq!(kml_width_to_line_width(1000), 1);
        assert_eq!(kml_width_to_line_width(32000), 24);
    }

    #[test]
    fn test_width_monotonic() {
        let mut last = 0;
        for w in (1000..=32000).step_by(500) {
            let scaled = kml_width_to_line_width(w);
            assert!(scaled >= last, "width {w} scaled below predecessor");
            last = scaled;
        }
    }

    #[test]
    fn test_minutes_to_seconds() {
        assert_eq!(minutes_to_seconds(1.0), 60);
        assert_eq!(minutes_to_seconds(0.5), 30);
        assert_eq!(minutes_to_seconds(2.51), 151);
    }

    #[test]
    fn test_miles_to_meters() {
        assert!((miles_to_meters(1.0) - 1609.34).abs() < 1e-9);
        assert_eq!(format!("{:.2}", miles_to_meters(2.0)), "3218.68");
    }

    #[test]
    fn test_format_elevation() {
        assert_eq!(format_elevation(0.0), "0.0");
        assert_eq!(format_elevation(1203.4567), "1203.5");
        assert_eq!(format_elevation(-12.0), "-12.0");
    }
}
