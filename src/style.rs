//! Decoding of KML `<styleUrl>` references.
//!
//! Google encodes waypoint and track styling in the style reference itself:
//!
//! ```text
//! #icon-1577-DB4436-labelson     icon id, color, label flag
//! #icon-1369                     icon id only (old style)
//! #line-0F9D58-1000              color, width in KML units
//! ```
//!
//! Tokens past the documented ones are optional; a missing token resolves
//! to the documented default instead of an error.

use crate::icons::{self, DEFAULT_ICON_COLOR, IconColor, Shape};
use crate::units;

/// Used when a track carries no style reference. The KML export always
/// styles lines, so this only shows up in hand-edited documents.
pub const DEFAULT_TRACK_COLOR: &str = "DB4436";

/// Fully resolved waypoint styling: icon translation applied and the
/// color sentinel replaced with a concrete 6-hex-digit RGB value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaypointStyle {
    pub icon: &'static str,
    pub color: String,
    pub background: Shape,
}

pub fn decode_waypoint_style(style_url: Option<&str>) -> WaypointStyle {
    let tokens: Vec<&str> = style_url
        .map(|s| s.split('-').collect())
        .unwrap_or_default();

    let entry = icons::resolve(tokens.get(1).copied().unwrap_or("unknown"));
    let color = match entry.color {
        IconColor::Fixed(color) => color.to_string(),
        // "labelson" in the color slot means the reference carries no color.
        IconColor::Kml => match tokens.get(2) {
            None | Some(&"labelson") => DEFAULT_ICON_COLOR.to_string(),
            Some(color) => (*color).to_string(),
        },
    };

    WaypointStyle {
        icon: entry.icon,
        color,
        background: entry.background,
    }
}

/// Track styling from a `#line-RRGGBB-width` reference. `width` is already
/// scaled to OSMAnd units; it stays `None` when the reference is absent or
/// carries no usable width token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackStyle {
    pub color: String,
    pub width: Option<u8>,
}

pub fn decode_track_style(style_url: Option<&str>) -> TrackStyle {
    let tokens: Vec<&str> = style_url
        .map(|s| s.split('-').collect())
        .unwrap_or_default();

    let color = tokens
        .get(1)
        .map_or_else(|| DEFAULT_TRACK_COLOR.to_string(), |c| (*c).to_string());
    let width = tokens
        .get(2)
        .and_then(|w| w.parse::<i64>().ok())
        .map(units::kml_width_to_line_width);

    TrackStyle { color, width }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_waypoint_style_with_color() {
        let style = decode_waypoint_style(Some("#icon-1577-0288D1"));
        assert_eq!(style.icon, "restaurants");
        assert_eq!(style.color, "0288D1");
        assert_eq!(style.background, Shape::Circle);
    }

    #[test]
    fn test_waypoint_style_labelson_uses_default_color() {
        let style = decode_waypoint_style(Some("#icon-1577-labelson"));
        assert_eq!(style.color, DEFAULT_ICON_COLOR);
    }

    #[test]
    fn test_waypoint_style_without_color_token() {
        let style = decode_waypoint_style(Some("#icon-1369"));
        assert_eq!(style.icon, "special_trekking");
        assert_eq!(style.color, DEFAULT_ICON_COLOR);
    }

    #[test]
    fn test_waypoint_style_fixed_color_wins() {
        // Table entry 979 has a fixed color; the KML color is ignored.
        let style = decode_waypoint_style(Some("#icon-979-0288D1"));
        assert_eq!(style.icon, "special_sail_boat");
        assert_eq!(style.color, "a71de1");
    }

    #[test]
    fn test_waypoint_style_absent() {
        let style = decode_waypoint_style(None);
        assert_eq!(style.icon, "special_symbol_question_mark");
        assert_eq!(style.color, "e044bb");
        assert_eq!(style.background, Shape::Octagon);
    }

    #[test]
    fn test_track_style() {
        let style = decode_track_style(Some("#line-0F9D58-1000"));
        assert_eq!(style.color, "0F9D58");
        assert_eq!(style.width, Some(1));
    }

    #[test]
    fn test_track_style_max_width() {
        let style = decode_track_style(Some("#line-0F9D58-32000"));
        assert_eq!(style.width, Some(24));
    }

    #[test]
    fn test_track_style_absent() {
        let style = decode_track_style(None);
        assert_eq!(style.color, DEFAULT_TRACK_COLOR);
        assert_eq!(style.width, None);
    }

    #[test]
    fn test_track_style_missing_width_token() {
        let style = decode_track_style(Some("#line-0F9D58"));
        assert_eq!(style.color, "0F9D58");
        assert_eq!(style.width, None);
    }
}
