/// Parsed KML data for one Google My Maps export.
#[derive(Debug, Default)]
pub struct KmlDocument {
    /// Map title from the document-level `<name>`.
    pub name: Option<String>,
    /// One folder per map layer, in document order.
    pub folders: Vec<KmlFolder>,
    /// Placemarks outside any folder. GMap exports always nest placemarks
    /// in folders, but hand-edited KML may not.
    pub placemarks: Vec<Placemark>,
}

impl KmlDocument {
    /// All placemarks of the document in document order, ignoring folder
    /// boundaries. Used when layer partitioning is disabled.
    pub fn all_placemarks(&self) -> impl Iterator<Item = &Placemark> {
        self.placemarks
            .iter()
            .chain(self.folders.iter().flat_map(|f| f.placemarks.iter()))
    }
}

/// A KML `<Folder>`, which Google My Maps uses to represent a map layer.
#[derive(Debug, Default)]
pub struct KmlFolder {
    pub name: Option<String>,
    pub placemarks: Vec<Placemark>,
}

/// A single KML `<Placemark>`.
///
/// Point and line geometry are kept separately so classification can check
/// for a point first; a malformed placemark carrying both counts as a
/// waypoint.
#[derive(Debug, Default, Clone)]
pub struct Placemark {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Style reference, e.g. `#icon-1577-DB4436-labelson` or `#line-0F9D58-1000`.
    pub style_url: Option<String>,
    /// Raw `<coordinates>` text of a `<Point>`: one `lon,lat,ele` triple.
    pub point: Option<String>,
    /// Raw `<coordinates>` text of a `<LineString>`: whitespace-separated
    /// `lon,lat,ele` triples.
    pub line: Option<String>,
}
