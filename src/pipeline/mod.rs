pub mod bounds;
pub(crate) mod geo;
pub mod metrics;
pub mod parse;
pub mod points;
pub mod profile;
