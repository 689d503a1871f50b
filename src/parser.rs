use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::ConvertError;
use crate::kml_types::*;

type Result<T> = std::result::Result<T, ConvertError>;

/// Parse a KML XML string into a KmlDocument.
pub fn parse_kml(xml: &str) -> Result<KmlDocument> {
    let mut reader = Reader::from_str(xml);
    let mut doc = KmlDocument::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"Folder" => doc.folders.extend(parse_folder(&mut reader)?),
                b"Placemark" => doc.placemarks.push(parse_placemark(&mut reader)?),
                // The first <name> outside a folder or placemark is the map title.
                b"name" if doc.name.is_none() => {
                    doc.name = Some(read_text_owned(&mut reader, &e)?.trim().to_string());
                }
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::XmlParse(e)),
            _ => {}
        }
    }

    Ok(doc)
}

/// Parse a <Folder> element and its children.
/// Nested folders are flattened into the returned list after their parent,
/// each keeping only its own placemarks.
fn parse_folder(reader: &mut Reader<&[u8]>) -> Result<Vec<KmlFolder>> {
    let mut folder = KmlFolder::default();
    let mut nested = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"name" if folder.name.is_none() => {
                    folder.name = Some(read_text_owned(reader, &e)?.trim().to_string());
                }
                b"Placemark" => folder.placemarks.push(parse_placemark(reader)?),
                b"Folder" => nested.extend(parse_folder(reader)?),
                _ => {
                    reader
                        .read_to_end(e.name())
                        .map_err(ConvertError::XmlParse)?;
                }
            },
            Ok(Event::End(e)) if e.local_name().as_ref() == b"Folder" => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::XmlParse(e)),
            _ => {}
        }
    }

    let mut folders = vec![folder];
    folders.extend(nested);
    Ok(folders)
}

/// Parse a <Placemark> element and its children.
fn parse_placemark(reader: &mut Reader<&[u8]>) -> Result<Placemark> {
    let mut placemark = Placemark::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"name" => {
                    placemark.name = Some(read_text_owned(reader, &e)?.trim().to_string());
                }
                b"description" => {
                    placemark.description =
                        Some(read_text_owned(reader, &e)?.trim().to_string());
                }
                b"styleUrl" => {
                    placemark.style_url =
                        Some(read_text_owned(reader, &e)?.trim().to_string());
                }
                b"Point" => placemark.point = parse_coordinates(reader, b"Point")?,
                b"LineString" => {
                    placemark.line = parse_coordinates(reader, b"LineString")?;
                }
                _ => {
                    // Skip <ExtendedData>, <StyleMap> and other subtrees
                    reader
                        .read_to_end(e.name())
                        .map_err(ConvertError::XmlParse)?;
                }
            },
            Ok(Event::End(e)) if e.local_name().as_ref() == b"Placemark" => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::XmlParse(e)),
            _ => {}
        }
    }

    Ok(placemark)
}

/// Read the <coordinates> text of a geometry element, consuming the
/// geometry's end tag.
fn parse_coordinates(reader: &mut Reader<&[u8]>, geometry: &[u8]) -> Result<Option<String>> {
    let mut coordinates = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"coordinates" => {
                    coordinates = Some(read_text_owned(reader, &e)?.trim().to_string());
                }
                _ => {
                    reader
                        .read_to_end(e.name())
                        .map_err(ConvertError::XmlParse)?;
                }
            },
            Ok(Event::End(e)) if e.local_name().as_ref() == geometry => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::XmlParse(e)),
            _ => {}
        }
    }

    Ok(coordinates)
}

/// Read text content of an element as an owned String.
/// Handles regular text, CDATA sections, and entity references (Event::GeneralRef).
fn read_text_owned(reader: &mut Reader<&[u8]>, start: &BytesStart<'_>) -> Result<String> {
    let end_name = start.name().0.to_vec();
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(e)) => {
                let raw = std::str::from_utf8(e.as_ref()).unwrap_or_default();
                text.push_str(raw);
            }
            Ok(Event::CData(e)) => {
                let s = std::str::from_utf8(e.as_ref()).unwrap_or_default();
                text.push_str(s);
            }
            Ok(Event::GeneralRef(e)) => {
                // Handle character references (&#60; &#x3C;) and predefined entities
                if let Ok(Some(ch)) = e.resolve_char_ref() {
                    text.push(ch);
                } else {
                    let name = std::str::from_utf8(e.as_ref()).unwrap_or_default();
                    match name {
                        "amp" => text.push('&'),
                        "lt" => text.push('<'),
                        "gt" => text.push('>'),
                        "quot" => text.push('"'),
                        "apos" => text.push('\''),
                        _ => {} // Unknown entity, skip
                    }
                }
            }
            Ok(Event::End(e)) if e.name().0 == end_name.as_slice() => break,
            Ok(Event::Eof) => break,
            Err(e) => return Err(ConvertError::XmlParse(e)),
            _ => {}
        }
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_waypoint_placemark() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>Mileage Marker dot</name>
    <styleUrl>#icon-1739-0288D1-nodesc</styleUrl>
    <Point>
      <coordinates>-120.8427259,38.8170119,0</coordinates>
    </Point>
  </Placemark>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        assert_eq!(doc.placemarks.len(), 1);
        let pm = &doc.placemarks[0];
        assert_eq!(pm.name.as_deref(), Some("Mileage Marker dot"));
        assert_eq!(pm.style_url.as_deref(), Some("#icon-1739-0288D1-nodesc"));
        assert_eq!(pm.point.as_deref(), Some("-120.8427259,38.8170119,0"));
        assert!(pm.line.is_none());
    }

    #[test]
    fn test_track_placemark() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>Ridge Route</name>
    <styleUrl>#line-0F9D58-1000</styleUrl>
    <LineString>
      <tessellate>1</tessellate>
      <coordinates>
        -120.1,38.1,100 -120.2,38.2,110 -120.3,38.3,120
      </coordinates>
    </LineString>
  </Placemark>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        let pm = &doc.placemarks[0];
        assert!(pm.point.is_none());
        let line = pm.line.as_deref().unwrap();
        assert_eq!(line.split_whitespace().count(), 3);
    }

    #[test]
    fn test_document_name_and_folders() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Sierra Trip</name>
    <Folder>
      <name>Day 1</name>
      <Placemark><name>Camp</name><Point><coordinates>-120,38,0</coordinates></Point></Placemark>
    </Folder>
    <Folder>
      <name>Day 2</name>
      <Placemark><name>Summit</name><Point><coordinates>-121,39,0</coordinates></Point></Placemark>
    </Folder>
  </Document>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        assert_eq!(doc.name.as_deref(), Some("Sierra Trip"));
        assert_eq!(doc.folders.len(), 2);
        assert_eq!(doc.folders[0].name.as_deref(), Some("Day 1"));
        assert_eq!(doc.folders[1].name.as_deref(), Some("Day 2"));
        assert_eq!(doc.folders[0].placemarks.len(), 1);
        assert_eq!(doc.all_placemarks().count(), 2);
    }

    #[test]
    fn test_nested_folders_flattened() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Folder>
    <name>Outer</name>
    <Placemark><name>A</name><Point><coordinates>-120,38,0</coordinates></Point></Placemark>
    <Folder>
      <name>Inner</name>
      <Placemark><name>B</name><Point><coordinates>-121,39,0</coordinates></Point></Placemark>
    </Folder>
  </Folder>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        assert_eq!(doc.folders.len(), 2);
        assert_eq!(doc.folders[0].name.as_deref(), Some("Outer"));
        assert_eq!(doc.folders[0].placemarks.len(), 1);
        assert_eq!(doc.folders[1].name.as_deref(), Some("Inner"));
        assert_eq!(doc.folders[1].placemarks.len(), 1);
    }

    #[test]
    fn test_placemark_without_name() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <Point><coordinates>-120,38,0</coordinates></Point>
  </Placemark>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        assert!(doc.placemarks[0].name.is_none());
        assert!(doc.placemarks[0].point.is_some());
    }

    #[test]
    fn test_placemark_without_geometry() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark><name>Just a note</name></Placemark>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        let pm = &doc.placemarks[0];
        assert!(pm.point.is_none());
        assert!(pm.line.is_none());
    }

    #[test]
    fn test_cdata_description() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>Spring</name>
    <description><![CDATA[Cold & clear]]></description>
    <Point><coordinates>-120,38,0</coordinates></Point>
  </Placemark>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        assert_eq!(doc.placemarks[0].description.as_deref(), Some("Cold & clear"));
    }

    #[test]
    fn test_extended_data_skipped() {
        let kml = r#"<?xml version="1.0"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Placemark>
    <name>POI</name>
    <ExtendedData>
      <Data name="gx_media_links"><value>foo</value></Data>
    </ExtendedData>
    <Point><coordinates>-120,38,0</coordinates></Point>
  </Placemark>
</kml>"#;
        let doc = parse_kml(kml).unwrap();
        assert_eq!(doc.placemarks[0].name.as_deref(), Some("POI"));
        assert!(doc.placemarks[0].point.is_some());
    }

    #[test]
    fn test_empty_document() {
        let kml = r#"<?xml version="1.0"?><kml xmlns="http://www.opengis.net/kml/2.2"></kml>"#;
        let doc = parse_kml(kml).unwrap();
        assert!(doc.folders.is_empty());
        assert!(doc.placemarks.is_empty());
    }
}
