//! Convert the KML export of a Google My Maps map into OSMAnd-style GPX
//! files: one file per track plus one aggregate waypoint file, with Google
//! icons translated to their OSMAnd equivalents.

pub mod convert;
pub mod converter;
pub mod error;
pub mod fetch;
pub mod gpx_writer;
pub mod icons;
pub mod kml_types;
pub mod options;
pub mod parser;
pub mod style;
pub mod units;

pub use convert::{Conversion, RunSummary};
pub use error::ConvertError;
pub use options::{ConvertOptions, SplitType};

use std::path::Path;

/// Convert KML text to GPX files under `out_dir` in one call, returning
/// the counts of emitted records.
pub fn convert_kml(
    kml: &str,
    out_dir: &Path,
    opts: ConvertOptions,
) -> Result<RunSummary, ConvertError> {
    let mut conversion = Conversion::new(opts);
    conversion.run(kml, out_dir)?;
    Ok(conversion.summary())
}
