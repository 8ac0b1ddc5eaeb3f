pub mod error;
pub mod pipeline;
pub mod types;

pub use pipeline::bounds::bounds_for_points;
pub use pipeline::metrics::extract_metrics;
pub use pipeline::parse::parse;
pub use pipeline::points::read_points;
pub use pipeline::profile::elevation_profile;
pub use types::metrics::{BoundingBox, ElevationProfile, TrackMetrics};
pub use types::track::{GpxDocument, RawGeoPoint, Route, Segment, Track};
