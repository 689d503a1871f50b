//! Emission of OSMAnd-flavored GPX 1.1 documents.

use std::fs;
use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::converter::{OsmandTrack, OsmandWaypoint};
use crate::error::ConvertError;

const GPX_CREATOR: &str = concat!("gmap2osmand V", env!("CARGO_PKG_VERSION"));

type XmlResult<T> = std::result::Result<T, quick_xml::Error>;

/// Write the aggregate waypoint document for one layer.
pub fn write_waypoint_file(
    waypoints: &[OsmandWaypoint],
    path: &Path,
) -> Result<(), ConvertError> {
    let xml = waypoint_document(waypoints)?;
    fs::write(path, xml).map_err(|source| ConvertError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a single-track document.
pub fn write_track_file(track: &OsmandTrack, path: &Path) -> Result<(), ConvertError> {
    let xml = track_document(track)?;
    fs::write(path, xml).map_err(|source| ConvertError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Render the waypoint GPX tree, pretty-printed with two-space indent.
pub fn waypoint_document(waypoints: &[OsmandWaypoint]) -> XmlResult<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    start_gpx(&mut writer)?;

    for wpt in waypoints {
        let mut start = BytesStart::new("wpt");
        start.push_attribute(("lat", wpt.lat.as_str()));
        start.push_attribute(("lon", wpt.lon.as_str()));
        writer.write_event(Event::Start(start))?;

        text_element(&mut writer, "ele", &wpt.ele)?;
        text_element(&mut writer, "name", &wpt.name)?;
        text_element(&mut writer, "desc", &wpt.description)?;

        writer.write_event(Event::Start(BytesStart::new("extensions")))?;
        text_element(&mut writer, "osmand:icon", wpt.icon)?;
        text_element(&mut writer, "osmand:background", wpt.background.as_str())?;
        text_element(&mut writer, "osmand:color", &format!("#{}", wpt.color))?;
        writer.write_event(Event::End(BytesEnd::new("extensions")))?;

        writer.write_event(Event::End(BytesEnd::new("wpt")))?;
    }

    end_gpx(writer)
}

/// Render a track GPX tree. The OSMAnd styling extensions live at the
/// document level, as a sibling of `<trk>`.
pub fn track_document(track: &OsmandTrack) -> XmlResult<Vec<u8>> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    start_gpx(&mut writer)?;

    writer.write_event(Event::Start(BytesStart::new("metadata")))?;
    text_element(&mut writer, "desc", &track.description)?;
    writer.write_event(Event::End(BytesEnd::new("metadata")))?;

    writer.write_event(Event::Start(BytesStart::new("trk")))?;
    text_element(&mut writer, "name", &track.name)?;
    writer.write_event(Event::Start(BytesStart::new("trkseg")))?;
    for point in &track.points {
        let mut start = BytesStart::new("trkpt");
        start.push_attribute(("lat", point.lat.as_str()));
        start.push_attribute(("lon", point.lon.as_str()));
        match &point.ele {
            Some(ele) => {
                writer.write_event(Event::Start(start))?;
                text_element(&mut writer, "ele", ele)?;
                writer.write_event(Event::End(BytesEnd::new("trkpt")))?;
            }
            None => writer.write_event(Event::Empty(start))?,
        }
    }
    writer.write_event(Event::End(BytesEnd::new("trkseg")))?;
    writer.write_event(Event::End(BytesEnd::new("trk")))?;

    writer.write_event(Event::Start(BytesStart::new("extensions")))?;
    text_element(&mut writer, "osmand:color", &format!("#{}", track.color))?;
    if let Some(width) = track.width {
        text_element(&mut writer, "osmand:width", &width.to_string())?;
    }
    text_element(
        &mut writer,
        "osmand:show_arrows",
        if track.show_arrows { "true" } else { "false" },
    )?;
    text_element(
        &mut writer,
        "osmand:show_start_finish",
        if track.show_start_finish { "true" } else { "false" },
    )?;
    text_element(&mut writer, "osmand:split_type", track.split.as_str())?;
    if let Some(interval) = &track.split_interval {
        text_element(&mut writer, "osmand:split_interval", interval)?;
    }
    writer.write_event(Event::End(BytesEnd::new("extensions")))?;

    end_gpx(writer)
}

fn start_gpx<W: Write>(writer: &mut Writer<W>) -> XmlResult<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut gpx = BytesStart::new("gpx");
    gpx.push_attribute(("xmlns", "http://www.topografix.com/GPX/1/1"));
    gpx.push_attribute(("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"));
    gpx.push_attribute((
        "xsi:schemaLocation",
        "http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd",
    ));
    gpx.push_attribute(("xmlns:osmand", "https://osmand.net"));
    gpx.push_attribute(("version", "1.1"));
    gpx.push_attribute(("creator", GPX_CREATOR));
    writer.write_event(Event::Start(gpx))?;
    Ok(())
}

fn end_gpx(mut writer: Writer<Vec<u8>>) -> XmlResult<Vec<u8>> {
    writer.write_event(Event::End(BytesEnd::new("gpx")))?;
    Ok(writer.into_inner())
}

fn text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> XmlResult<()> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
