use clap::ValueEnum;
use serde::Deserialize;

/// Alpha prefix applied to every track color, as a 2-digit hex string.
pub const DEFAULT_TRACK_TRANSPARENCY: &str = "80";

/// Options for KML to GPX conversion.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Fixed track width (1-24) overriding any width found in the KML file.
    #[serde(default)]
    pub width: Option<u8>,

    /// Transparency for all tracks as a 2-digit hex value; 00 is fully
    /// transparent, FF opaque.
    #[serde(default = "default_transparency")]
    pub transparency: String,

    /// Display directional arrows on tracks.
    #[serde(default)]
    pub arrows: bool,

    /// Display start and finish icons at the ends of tracks.
    #[serde(default)]
    pub ends: bool,

    /// Display distance or time splits along tracks.
    #[serde(default)]
    pub split: SplitType,

    /// Split interval: miles for distance splits, minutes for time splits.
    #[serde(default = "default_interval")]
    pub interval: f64,

    /// Emit one output subdirectory per KML layer.
    #[serde(default)]
    pub layers: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            width: None,
            transparency: DEFAULT_TRACK_TRANSPARENCY.to_string(),
            arrows: false,
            ends: false,
            split: SplitType::NoSplit,
            interval: default_interval(),
            layers: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SplitType {
    #[default]
    #[value(name = "no_split")]
    NoSplit,
    #[value(name = "distance")]
    Distance,
    #[value(name = "time")]
    Time,
}

impl SplitType {
    /// Value written into the `osmand:split_type` extension.
    pub fn as_str(self) -> &'static str {
        match self {
            SplitType::NoSplit => "no_split",
            SplitType::Distance => "distance",
            SplitType::Time => "time",
        }
    }
}

fn default_transparency() -> String {
    DEFAULT_TRACK_TRANSPARENCY.to_string()
}

fn default_interval() -> f64 {
    1.0
}
