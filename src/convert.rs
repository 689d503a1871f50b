//! The conversion run: walks parsed KML layers, classifies placemarks and
//! drives GPX file emission.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::converter::{self, PlacemarkKind};
use crate::error::ConvertError;
use crate::gpx_writer;
use crate::kml_types::{KmlDocument, Placemark};
use crate::options::ConvertOptions;
use crate::parser;

/// Name of the per-layer waypoint aggregate file.
pub const WAYPOINT_FILE_NAME: &str = "WayPts.gpx";

/// Counts of successfully emitted records over one conversion run. The
/// counts survive a failed run and then reflect what was written before
/// the error.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub waypoints: usize,
    pub tracks: usize,
    pub layers: usize,
}

/// One conversion run from KML text to a directory of GPX files.
pub struct Conversion {
    opts: ConvertOptions,
    summary: RunSummary,
}

impl Conversion {
    pub fn new(opts: ConvertOptions) -> Self {
        Self {
            opts,
            summary: RunSummary::default(),
        }
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Convert raw KML text into GPX files under `out_dir`.
    ///
    /// With layering enabled, each KML folder becomes a subdirectory of
    /// `out_dir` holding that layer's track files and waypoint aggregate.
    /// Without it, the whole document is treated as one implicit layer
    /// written directly into `out_dir`.
    pub fn run(&mut self, kml: &str, out_dir: &Path) -> Result<(), ConvertError> {
        let doc = parser::parse_kml(kml)?;
        if let Some(map) = &doc.name {
            info!(map = map.as_str(), "parsed map KML");
        }
        self.run_document(&doc, out_dir)
    }

    /// Convert an already-parsed document. Exposed for callers that obtain
    /// KML text some other way than the map export.
    pub fn run_document(
        &mut self,
        doc: &KmlDocument,
        out_dir: &Path,
    ) -> Result<(), ConvertError> {
        fs::create_dir_all(out_dir).map_err(|source| ConvertError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        if self.opts.layers {
            for (index, folder) in doc.folders.iter().enumerate() {
                let layer_dir = out_dir.join(layer_dir_name(folder.name.as_deref(), index));
                info!(layer = ?layer_dir, "processing layer");
                fs::create_dir_all(&layer_dir).map_err(|source| ConvertError::CreateDir {
                    path: layer_dir.clone(),
                    source,
                })?;
                self.process_layer(folder.placemarks.iter(), &layer_dir)?;
            }
        } else {
            self.process_layer(doc.all_placemarks(), out_dir)?;
        }

        Ok(())
    }

    /// Scan and emit one layer. Tracks are written as soon as they are
    /// seen, one file each; waypoints are collected and written as one
    /// aggregate file at the end of the layer. The first write error stops
    /// the layer and aborts the run.
    fn process_layer<'a>(
        &mut self,
        placemarks: impl Iterator<Item = &'a Placemark>,
        layer_dir: &Path,
    ) -> Result<(), ConvertError> {
        self.summary.layers += 1;
        let mut waypoints = Vec::new();

        for placemark in placemarks {
            match converter::classify(placemark) {
                PlacemarkKind::Waypoint => {
                    if let Some(wpt) = converter::build_waypoint(placemark) {
                        info!(waypoint = wpt.name.as_str(), "waypoint");
                        waypoints.push(wpt);
                    }
                }
                PlacemarkKind::Track => {
                    if let Some(track) = converter::build_track(placemark, &self.opts) {
                        let file_name = format!("{}.gpx", sanitize_file_name(&track.name));
                        let path = layer_dir.join(file_name);
                        info!(track = track.name.as_str(), file = ?path, "writing track");
                        gpx_writer::write_track_file(&track, &path)?;
                        self.summary.tracks += 1;
                    }
                }
                PlacemarkKind::Skip => {
                    warn!(
                        placemark = placemark.name.as_deref().unwrap_or("<unnamed>"),
                        "placemark without point or line geometry, skipping"
                    );
                }
            }
        }

        if !waypoints.is_empty() {
            let path = layer_dir.join(WAYPOINT_FILE_NAME);
            info!(file = ?path, count = waypoints.len(), "writing waypoints");
            gpx_writer::write_waypoint_file(&waypoints, &path)?;
            self.summary.waypoints += waypoints.len();
        }

        Ok(())
    }
}

/// Strip characters that are not legal in file names. Alphanumerics,
/// space, period, underscore and hyphen survive; everything else is
/// dropped. Later tracks with the same sanitized name overwrite earlier
/// files.
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || " ._-".contains(*c))
        .collect()
}

/// Layer subdirectories are named after the KML folder; a folder without
/// a name falls back to its position.
fn layer_dir_name(name: Option<&str>, index: usize) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => format!("layer-{}", index + 1),
    }
}
