//! Retrieval of a map's KML export from Google My Maps.

use tracing::debug;

use crate::error::ConvertError;

/// Initiates a KML export for the given map id. The id is the `mid=`
/// parameter of the map URL; sharing must be enabled on the map.
const KML_EXPORT_URL: &str = "https://www.google.com/maps/d/u/0/kml?forcekml=1&mid=";

/// Fetch the raw KML text for a map id.
pub fn fetch_map_kml(map_id: &str) -> Result<String, ConvertError> {
    let url = format!("{KML_EXPORT_URL}{map_id}");
    debug!(url = url.as_str(), "requesting map KML");

    let response = reqwest::blocking::get(&url).map_err(ConvertError::Transport)?;
    match response.status().as_u16() {
        200 => response.text().map_err(ConvertError::Transport),
        403 => Err(ConvertError::MapPermissionDenied),
        404 => Err(ConvertError::MapNotFound),
        status => Err(ConvertError::FetchStatus(status)),
    }
}
