use crate::error::{ClimbError, ParseError};
use crate::pipeline::geo::{pair_distance_km, round2};
use crate::pipeline::parse;
use crate::types::metrics::TrackMetrics;
use crate::types::track::GpxDocument;
use chrono::NaiveDateTime;

const FALLBACK_NAME: &str = "Unbenannter Track";

/// Parses an uploaded file and derives the normalized track record. Returns
/// `None` when the bytes hold no usable data; the caller owns persistence of
/// the original bytes and the returned scalar fields.
pub fn extract_metrics(filename: &str, bytes: &[u8]) -> Option<TrackMetrics> {
    let doc = match parse::parse(bytes) {
        Ok(doc) => doc,
        Err(ParseError::EmptyDocument) => {
            tracing::warn!("No tracks or routes found in {}", filename);
            return None;
        }
        Err(err) => {
            tracing::error!("Failed to parse {}: {}", filename, err);
            return None;
        }
    };

    let (ascent, descent) = match climb(&doc) {
        Ok(climb) => climb,
        Err(err) => {
            tracing::warn!("Could not compute ascent/descent for {}: {}", filename, err);
            (0.0, 0.0)
        }
    };

    Some(TrackMetrics {
        source_filename: filename.to_string(),
        display_name: resolve_name(&doc, filename),
        distance_km: round2(track_length_km(&doc)),
        start_date: resolve_start_date(&doc),
        total_ascent_m: round2(ascent),
        total_descent_m: round2(descent),
        points: doc.map_points(),
    })
}

/// First non-empty candidate wins: document name, first track name, first
/// route name, filename stem, fixed placeholder.
fn resolve_name(doc: &GpxDocument, filename: &str) -> String {
    let stem = filename
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(filename);

    let candidates = [
        doc.name.as_deref(),
        doc.tracks.first().and_then(|track| track.name.as_deref()),
        doc.routes.first().and_then(|route| route.name.as_deref()),
        Some(stem),
    ];

    candidates
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
        .unwrap_or(FALLBACK_NAME)
        .to_string()
}

/// Document timestamp, else the first timestamped point (tracks before
/// routes), stripped of its offset so stored dates stay comparable.
fn resolve_start_date(doc: &GpxDocument) -> Option<NaiveDateTime> {
    doc.time
        .or_else(|| {
            doc.tracks
                .iter()
                .flat_map(|track| &track.segments)
                .flat_map(|segment| &segment.points)
                .find_map(|point| point.time)
        })
        .or_else(|| {
            doc.routes
                .iter()
                .flat_map(|route| &route.points)
                .find_map(|point| point.time)
        })
        .map(|time| time.naive_local())
}

/// Total length over track segments, 3-D per pair where both ends carry
/// elevation. Routes are planned paths and do not contribute.
fn track_length_km(doc: &GpxDocument) -> f64 {
    doc.tracks
        .iter()
        .flat_map(|track| &track.segments)
        .map(|segment| {
            segment
                .points
                .windows(2)
                .map(|pair| pair_distance_km(&pair[0], &pair[1]))
                .sum::<f64>()
        })
        .sum()
}

/// Cumulative positive/negative elevation deltas across consecutive
/// elevation-bearing pairs within each track segment. The error carries the
/// overall point index across all segments, matching the document order the
/// log reader sees.
fn climb(doc: &GpxDocument) -> Result<(f64, f64), ClimbError> {
    let mut ascent = 0.0;
    let mut descent = 0.0;
    let mut offset = 0;

    for segment in doc.tracks.iter().flat_map(|track| &track.segments) {
        for (idx, pair) in segment.points.windows(2).enumerate() {
            if let (Some(prev), Some(curr)) = (pair[0].elevation, pair[1].elevation) {
                if !prev.is_finite() {
                    return Err(ClimbError::NonFiniteElevation(offset + idx));
                }
                if !curr.is_finite() {
                    return Err(ClimbError::NonFiniteElevation(offset + idx + 1));
                }

                let delta = curr - prev;
                if delta > 0.0 {
                    ascent += delta;
                } else {
                    descent -= delta;
                }
            }
        }
        offset += segment.points.len();
    }

    Ok((ascent, descent))
}
