//! Conversion of classified placemarks into the OSMAnd GPX target model.

use tracing::warn;

use crate::icons::Shape;
use crate::kml_types::Placemark;
use crate::options::{ConvertOptions, SplitType};
use crate::style;
use crate::units;

/// One `<wpt>` entry of the aggregate waypoint file.
///
/// Latitude and longitude are carried verbatim as the KML text tokens;
/// only the elevation is reformatted.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmandWaypoint {
    pub lat: String,
    pub lon: String,
    pub ele: String,
    pub name: String,
    pub description: String,
    pub icon: &'static str,
    pub background: Shape,
    /// 6-hex-digit RGB, no alpha.
    pub color: String,
}

/// A complete single-track GPX document.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmandTrack {
    pub name: String,
    pub description: String,
    pub points: Vec<TrackPoint>,
    /// 8 hex digits: 2-digit alpha prefix plus RGB.
    pub color: String,
    /// Already scaled to OSMAnd units (1-24); absent means OSMAnd applies
    /// its own default.
    pub width: Option<u8>,
    pub show_arrows: bool,
    pub show_start_finish: bool,
    pub split: SplitType,
    /// Rendered split interval: whole seconds for time splits, meters with
    /// two decimals for distance splits.
    pub split_interval: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    pub lat: String,
    pub lon: String,
    pub ele: Option<String>,
}

/// How the orchestrator should treat a placemark. A point geometry wins
/// over a line geometry when a malformed placemark carries both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacemarkKind {
    Waypoint,
    Track,
    /// Neither geometry; not counted as anything.
    Skip,
}

pub fn classify(placemark: &Placemark) -> PlacemarkKind {
    if placemark.point.is_some() {
        PlacemarkKind::Waypoint
    } else if placemark.line.is_some() {
        PlacemarkKind::Track
    } else {
        PlacemarkKind::Skip
    }
}

/// Build a waypoint from a placemark classified as [`PlacemarkKind::Waypoint`].
/// Returns `None` (with a diagnostic) when the placemark has no name or no
/// usable coordinate pair; skipped waypoints are not counted.
pub fn build_waypoint(placemark: &Placemark) -> Option<OsmandWaypoint> {
    let Some(name) = placemark.name.as_deref().filter(|n| !n.is_empty()) else {
        warn!("waypoint without a name, skipping");
        return None;
    };

    let coordinates = placemark.point.as_deref().unwrap_or_default();
    let mut parts = coordinates.split(',');
    let (Some(lon), Some(lat)) = (parts.next(), parts.next()) else {
        warn!(waypoint = name, "no coordinates found, skipping waypoint");
        return None;
    };
    if lat.is_empty() {
        warn!(waypoint = name, "no coordinates found, skipping waypoint");
        return None;
    }
    let ele = parts
        .next()
        .and_then(|raw| raw.parse::<f64>().ok())
        .unwrap_or(0.0);

    let resolved = style::decode_waypoint_style(placemark.style_url.as_deref());

    Some(OsmandWaypoint {
        lat: lat.to_string(),
        lon: lon.to_string(),
        ele: units::format_elevation(ele),
        name: name.to_string(),
        description: placemark.description.clone().unwrap_or_default(),
        icon: resolved.icon,
        background: resolved.background,
        color: resolved.color,
    })
}

/// Build a track from a placemark classified as [`PlacemarkKind::Track`].
/// Returns `None` (with a diagnostic) when the placemark has no name.
pub fn build_track(placemark: &Placemark, opts: &ConvertOptions) -> Option<OsmandTrack> {
    let Some(name) = placemark.name.as_deref().filter(|n| !n.is_empty()) else {
        warn!("track without a name, skipping");
        return None;
    };

    let coordinates = placemark.line.as_deref().unwrap_or_default();
    let points: Vec<TrackPoint> = coordinates
        .split_whitespace()
        .filter_map(|triple| {
            let mut parts = triple.split(',');
            let (lon, lat) = (parts.next()?, parts.next()?);
            let ele = parts
                .next()
                .and_then(|raw| raw.parse::<f64>().ok())
                .map(units::format_elevation);
            Some(TrackPoint {
                lat: lat.to_string(),
                lon: lon.to_string(),
                ele,
            })
        })
        .collect();

    let resolved = style::decode_track_style(placemark.style_url.as_deref());

    // A command-line width overrides every KML width.
    let width = opts.width.or(resolved.width);

    let split_interval = match opts.split {
        SplitType::NoSplit => None,
        // Stored in seconds; the option value is minutes.
        SplitType::Time => Some(units::minutes_to_seconds(opts.interval).to_string()),
        // Stored in meters; the option value is miles.
        SplitType::Distance => {
            Some(format!("{:.2}", units::miles_to_meters(opts.interval)))
        }
    };

    Some(OsmandTrack {
        name: name.to_string(),
        description: placemark.description.clone().unwrap_or_default(),
        points,
        color: format!("{}{}", opts.transparency, resolved.color),
        width,
        show_arrows: opts.arrows,
        show_start_finish: opts.ends,
        split: opts.split,
        split_interval,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint_placemark() -> Placemark {
        Placemark {
            name: Some("Trailhead".to_string()),
            description: Some("Start here".to_string()),
            style_url: Some("#icon-1577-0F9D58".to_string()),
            point: Some("-120.8427259,38.8170119,1203.77".to_string()),
            line: None,
        }
    }

    fn track_placemark() -> Placemark {
        Placemark {
            name: Some("Ridge Route".to_string()),
            description: None,
            style_url: Some("#line-0F9D58-1000".to_string()),
            point: None,
            line: Some("-120.1,38.1,100 -120.2,38.2,110.55".to_string()),
        }
    }

    #[test]
    fn test_classify_point_wins() {
        let mut pm = waypoint_placemark();
        assert_eq!(classify(&pm), PlacemarkKind::Waypoint);
        pm.line = Some("-120,38,0".to_string());
        assert_eq!(classify(&pm), PlacemarkKind::Waypoint);
        pm.point = None;
        assert_eq!(classify(&pm), PlacemarkKind::Track);
        pm.line = None;
        assert_eq!(classify(&pm), PlacemarkKind::Skip);
    }

    #[test]
    fn test_build_waypoint() {
        let wpt = build_waypoint(&waypoint_placemark()).unwrap();
        assert_eq!(wpt.lat, "38.8170119");
        assert_eq!(wpt.lon, "-120.8427259");
        assert_eq!(wpt.ele, "1203.8");
        assert_eq!(wpt.name, "Trailhead");
        assert_eq!(wpt.description, "Start here");
        assert_eq!(wpt.icon, "restaurants");
        assert_eq!(wpt.color, "0F9D58");
    }

    #[test]
    fn test_build_waypoint_without_name_skipped() {
        let mut pm = waypoint_placemark();
        pm.name = None;
        assert!(build_waypoint(&pm).is_none());
    }

    #[test]
    fn test_build_waypoint_without_elevation() {
        let mut pm = waypoint_placemark();
        pm.point = Some("-120.8,38.8".to_string());
        let wpt = build_waypoint(&pm).unwrap();
        assert_eq!(wpt.ele, "0.0");
    }

    #[test]
    fn test_build_waypoint_with_bad_coordinates() {
        let mut pm = waypoint_placemark();
        pm.point = Some("".to_string());
        assert!(build_waypoint(&pm).is_none());
    }

    #[test]
    fn test_build_track() {
        let trk = build_track(&track_placemark(), &ConvertOptions::default()).unwrap();
        assert_eq!(trk.name, "Ridge Route");
        assert_eq!(trk.points.len(), 2);
        assert_eq!(trk.points[0].lat, "38.1");
        assert_eq!(trk.points[1].ele.as_deref(), Some("110.6"));
        assert_eq!(trk.color, "800F9D58");
        assert_eq!(trk.width, Some(1));
        assert_eq!(trk.split_interval, None);
    }

    #[test]
    fn test_build_track_point_order_preserved() {
        let trk = build_track(&track_placemark(), &ConvertOptions::default()).unwrap();
        assert_eq!(trk.points[0].lon, "-120.1");
        assert_eq!(trk.points[1].lon, "-120.2");
    }

    #[test]
    fn test_width_override_beats_kml_width() {
        let opts = ConvertOptions {
            width: Some(7),
            ..Default::default()
        };
        let trk = build_track(&track_placemark(), &opts).unwrap();
        assert_eq!(trk.width, Some(7));
    }

    #[test]
    fn test_no_style_leaves_width_unset() {
        let mut pm = track_placemark();
        pm.style_url = None;
        let trk = build_track(&pm, &ConvertOptions::default()).unwrap();
        assert_eq!(trk.width, None);
        assert_eq!(trk.color, format!("80{}", style::DEFAULT_TRACK_COLOR));
    }

    #[test]
    fn test_time_split_interval_in_seconds() {
        let opts = ConvertOptions {
            split: SplitType::Time,
            interval: 2.5,
            ..Default::default()
        };
        let trk = build_track(&track_placemark(), &opts).unwrap();
        assert_eq!(trk.split_interval.as_deref(), Some("150"));
    }

    #[test]
    fn test_distance_split_interval_in_meters() {
        let opts = ConvertOptions {
            split: SplitType::Distance,
            interval: 1.0,
            ..Default::default()
        };
        let trk = build_track(&track_placemark(), &opts).unwrap();
        assert_eq!(trk.split_interval.as_deref(), Some("1609.34"));
    }

    #[test]
    fn test_track_without_name_skipped() {
        let mut pm = track_placemark();
        pm.name = Some(String::new());
        assert!(build_track(&pm, &ConvertOptions::default()).is_none());
    }
}
