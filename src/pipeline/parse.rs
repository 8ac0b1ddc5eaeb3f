use crate::error::ParseError;
use crate::types::track::{GpxDocument, RawGeoPoint, Route, Segment, Track};
use chrono::DateTime;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Subtrees that may carry their own `<name>`/`<time>` children without
/// those belonging to the document, a track, or a point.
const SKIPPED_SUBTREES: &[&str] = &["wpt", "author", "link", "copyright", "email", "extensions"];

/// Parses GPX 1.0/1.1 bytes into a structured document. Invalid byte
/// sequences are replaced, not rejected; points missing a parseable lat or
/// lon attribute are dropped. A well-formed document without any track or
/// route signals `EmptyDocument`, which callers treat as a valid empty
/// input rather than a parse failure.
pub fn parse(bytes: &[u8]) -> Result<GpxDocument, ParseError> {
    let text = String::from_utf8_lossy(bytes);
    let mut reader = Reader::from_str(&text);
    reader.trim_text(true);

    let mut doc = GpxDocument::default();
    let mut current_track: Option<Track> = None;
    let mut current_segment: Option<Segment> = None;
    let mut current_route: Option<Route> = None;
    let mut current_point: Option<RawGeoPoint> = None;
    let mut current_element = String::new();
    let mut skip_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = e.name();
                let name_str = std::str::from_utf8(name.as_ref())
                    .map_err(|e| ParseError::InvalidGpx(e.to_string()))?;

                if skip_depth > 0 {
                    skip_depth += 1;
                    continue;
                }
                if SKIPPED_SUBTREES.contains(&name_str) {
                    skip_depth = 1;
                    current_element.clear();
                    continue;
                }

                match name_str {
                    "trk" => {
                        current_track = Some(Track::default());
                        current_element.clear();
                    }
                    "trkseg" => {
                        current_segment = Some(Segment::default());
                        current_element.clear();
                    }
                    "rte" => {
                        current_route = Some(Route::default());
                        current_element.clear();
                    }
                    "trkpt" | "rtept" => {
                        current_point = point_from_attributes(&e)?;
                        current_element.clear();
                    }
                    other => current_element = other.to_string(),
                }
            }
            Ok(Event::Empty(e)) => {
                if skip_depth > 0 {
                    continue;
                }

                let name = e.name();
                let name_str = std::str::from_utf8(name.as_ref())
                    .map_err(|e| ParseError::InvalidGpx(e.to_string()))?;

                // A self-closing point element is already complete.
                match name_str {
                    "trkpt" => {
                        if let (Some(point), Some(segment)) =
                            (point_from_attributes(&e)?, current_segment.as_mut())
                        {
                            segment.points.push(point);
                        }
                    }
                    "rtept" => {
                        if let (Some(point), Some(route)) =
                            (point_from_attributes(&e)?, current_route.as_mut())
                        {
                            route.points.push(point);
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                if skip_depth > 0 {
                    continue;
                }

                let text = e
                    .unescape()
                    .map_err(|e| ParseError::InvalidGpx(e.to_string()))?;

                if let Some(point) = current_point.as_mut() {
                    match current_element.as_str() {
                        "ele" => point.elevation = text.parse().ok(),
                        "time" => point.time = DateTime::parse_from_rfc3339(&text).ok(),
                        _ => {}
                    }
                } else {
                    match current_element.as_str() {
                        "name" => {
                            if let Some(track) = current_track.as_mut() {
                                if current_segment.is_none() && track.name.is_none() {
                                    track.name = Some(text.to_string());
                                }
                            } else if let Some(route) = current_route.as_mut() {
                                if route.name.is_none() {
                                    route.name = Some(text.to_string());
                                }
                            } else if doc.name.is_none() {
                                // Document name: <metadata><name> in GPX 1.1,
                                // <gpx><name> in GPX 1.0.
                                doc.name = Some(text.to_string());
                            }
                        }
                        "time" => {
                            if current_track.is_none()
                                && current_route.is_none()
                                && doc.time.is_none()
                            {
                                doc.time = DateTime::parse_from_rfc3339(&text).ok();
                            }
                        }
                        _ => {}
                    }
                }
            }
            Ok(Event::End(e)) => {
                if skip_depth > 0 {
                    skip_depth -= 1;
                    continue;
                }

                let name = e.name();
                let name_str = std::str::from_utf8(name.as_ref())
                    .map_err(|e| ParseError::InvalidGpx(e.to_string()))?;

                match name_str {
                    "trkpt" => {
                        if let (Some(point), Some(segment)) =
                            (current_point.take(), current_segment.as_mut())
                        {
                            segment.points.push(point);
                        }
                    }
                    "rtept" => {
                        if let (Some(point), Some(route)) =
                            (current_point.take(), current_route.as_mut())
                        {
                            route.points.push(point);
                        }
                    }
                    "trkseg" => {
                        if let (Some(segment), Some(track)) =
                            (current_segment.take(), current_track.as_mut())
                        {
                            track.segments.push(segment);
                        }
                    }
                    "trk" => {
                        if let Some(track) = current_track.take() {
                            doc.tracks.push(track);
                        }
                    }
                    "rte" => {
                        if let Some(route) = current_route.take() {
                            doc.routes.push(route);
                        }
                    }
                    _ => {}
                }
                current_element.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::InvalidGpx(e.to_string())),
            _ => {}
        }
    }

    if doc.is_empty() {
        return Err(ParseError::EmptyDocument);
    }

    Ok(doc)
}

fn point_from_attributes(e: &BytesStart) -> Result<Option<RawGeoPoint>, ParseError> {
    let mut lat = None;
    let mut lon = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|e| ParseError::InvalidGpx(e.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| ParseError::InvalidGpx(e.to_string()))?;
        let value = std::str::from_utf8(&attr.value)
            .map_err(|e| ParseError::InvalidGpx(e.to_string()))?;

        match key {
            "lat" => lat = value.parse().ok(),
            "lon" => lon = value.parse().ok(),
            _ => {}
        }
    }

    Ok(match (lat, lon) {
        (Some(latitude), Some(longitude)) => Some(RawGeoPoint {
            latitude,
            longitude,
            elevation: None,
            time: None,
        }),
        _ => None,
    })
}
