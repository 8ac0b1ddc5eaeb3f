use crate::types::metrics::BoundingBox;

const DEGENERATE_AXIS_PADDING: f64 = 0.0001;

/// Computes the padded viewport extent for a pooled point set. Entries with
/// a non-finite component are skipped; an axis where every point agrees is
/// padded so the viewer always fits a non-zero area. Returns `None` for an
/// empty input or when the padded box leaves valid geographic ranges.
pub fn bounds_for_points(points: &[(f64, f64)]) -> Option<BoundingBox> {
    let valid: Vec<(f64, f64)> = points
        .iter()
        .copied()
        .filter(|(lat, lon)| lat.is_finite() && lon.is_finite())
        .collect();

    if valid.is_empty() {
        return None;
    }

    let mut min_lat = valid.iter().map(|(lat, _)| *lat).fold(f64::INFINITY, f64::min);
    let mut max_lat = valid
        .iter()
        .map(|(lat, _)| *lat)
        .fold(f64::NEG_INFINITY, f64::max);
    let mut min_lon = valid.iter().map(|(_, lon)| *lon).fold(f64::INFINITY, f64::min);
    let mut max_lon = valid
        .iter()
        .map(|(_, lon)| *lon)
        .fold(f64::NEG_INFINITY, f64::max);

    if min_lat == max_lat {
        min_lat -= DEGENERATE_AXIS_PADDING;
        max_lat += DEGENERATE_AXIS_PADDING;
    }
    if min_lon == max_lon {
        min_lon -= DEGENERATE_AXIS_PADDING;
        max_lon += DEGENERATE_AXIS_PADDING;
    }

    let bounds = BoundingBox {
        min_lat,
        min_lon,
        max_lat,
        max_lon,
    };

    if !bounds.is_valid() {
        tracing::warn!(
            "Invalid bounds computed: lat {}..{}, lon {}..{}",
            bounds.min_lat,
            bounds.max_lat,
            bounds.min_lon,
            bounds.max_lon
        );
        return None;
    }

    Some(bounds)
}
