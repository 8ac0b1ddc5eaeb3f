use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The normalized record produced once per upload. The persistence layer
/// keeps the scalar fields plus the raw file bytes; `points` is only used
/// for the immediate map draw and is re-derived from the stored file later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackMetrics {
    pub source_filename: String,
    pub display_name: String,
    pub distance_km: f64,
    pub start_date: Option<NaiveDateTime>,
    pub total_ascent_m: f64,
    pub total_descent_m: f64,
    pub points: Vec<(f64, f64)>,
}

/// Padded lat/lon extent used to fit a map viewport. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.min_lat)
            && (-90.0..=90.0).contains(&self.max_lat)
            && (-180.0..=180.0).contains(&self.min_lon)
            && (-180.0..=180.0).contains(&self.max_lon)
            && self.min_lat <= self.max_lat
            && self.min_lon <= self.max_lon
    }
}

/// Distance-indexed elevation series for the profile chart. Both vectors
/// have the same length; distances are monotonically non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationProfile {
    pub distances_km: Vec<f64>,
    pub elevations_m: Vec<f64>,
}
