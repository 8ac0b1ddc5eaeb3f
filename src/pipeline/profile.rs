use crate::error::ParseError;
use crate::pipeline::geo::{haversine_distance, round2, round3};
use crate::pipeline::parse;
use crate::types::metrics::ElevationProfile;
use crate::types::track::RawGeoPoint;
use std::fs;
use std::path::Path;

/// Re-reads a stored document and builds the distance-vs-elevation series
/// for the profile chart. The distance axis is strictly 2-D: every point
/// advances the accumulator by the horizontal gap to its predecessor, so
/// elevation-less points keep later samples at their true chart position
/// without feeding noisy elevation readings into the x-axis. Returns `None`
/// when the file is missing, blank, or malformed, or when no point carries
/// an elevation.
pub fn elevation_profile(path: &Path) -> Option<ElevationProfile> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("Failed to read {}: {}", path.display(), err);
            return None;
        }
    };

    if content.trim().is_empty() {
        return None;
    }

    let doc = match parse::parse(content.as_bytes()) {
        Ok(doc) => doc,
        Err(ParseError::EmptyDocument) => {
            tracing::debug!("No tracks or routes in {}", path.display());
            return None;
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), err);
            return None;
        }
    };

    let points = doc.ordered_points();
    if points.is_empty() {
        return None;
    }

    let mut distances_km = Vec::new();
    let mut elevations_m = Vec::new();
    let mut total_km = 0.0;
    let mut previous: Option<&RawGeoPoint> = None;

    for point in points {
        if let Some(prev) = previous {
            total_km += haversine_distance(
                prev.latitude,
                prev.longitude,
                point.latitude,
                point.longitude,
            );
        }

        if let Some(elevation) = point.elevation.filter(|elevation| elevation.is_finite()) {
            distances_km.push(round3(total_km));
            elevations_m.push(round2(elevation));
        }

        previous = Some(point);
    }

    if distances_km.is_empty() {
        return None;
    }

    Some(ElevationProfile {
        distances_km,
        elevations_m,
    })
}
