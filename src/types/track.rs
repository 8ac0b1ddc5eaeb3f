use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A single point as it appears in the source document, in document order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawGeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>,
    pub time: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub points: Vec<RawGeoPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub name: Option<String>,
    pub segments: Vec<Segment>,
}

/// A planned path: a flat point list with no segment structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub name: Option<String>,
    pub points: Vec<RawGeoPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpxDocument {
    pub name: Option<String>,
    pub time: Option<DateTime<FixedOffset>>,
    pub tracks: Vec<Track>,
    pub routes: Vec<Route>,
}

impl GpxDocument {
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty() && self.routes.is_empty()
    }

    /// All points in document order: track points flattened segment by
    /// segment, or route points when no track carries any point.
    pub fn ordered_points(&self) -> Vec<&RawGeoPoint> {
        let track_points: Vec<&RawGeoPoint> = self
            .tracks
            .iter()
            .flat_map(|track| &track.segments)
            .flat_map(|segment| &segment.points)
            .collect();

        if !track_points.is_empty() {
            return track_points;
        }

        self.routes
            .iter()
            .flat_map(|route| &route.points)
            .collect()
    }

    /// The (lat, lon) sequence handed to the map layer.
    pub fn map_points(&self) -> Vec<(f64, f64)> {
        self.ordered_points()
            .into_iter()
            .map(|point| (point.latitude, point.longitude))
            .collect()
    }
}
