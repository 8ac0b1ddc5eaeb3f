use crate::error::ParseError;
use crate::pipeline::parse;
use std::fs;
use std::path::Path;

/// Re-reads a stored document and extracts the (lat, lon) sequence for map
/// rendering. Every failure mode — missing file, blank content, malformed
/// document — degrades to an empty sequence; the map layer simply draws
/// nothing.
pub fn read_points(path: &Path) -> Vec<(f64, f64)> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("Failed to read {}: {}", path.display(), err);
            return Vec::new();
        }
    };

    if content.trim().is_empty() {
        return Vec::new();
    }

    match parse::parse(content.as_bytes()) {
        Ok(doc) => doc.map_points(),
        Err(ParseError::EmptyDocument) => {
            tracing::debug!("No tracks or routes in {}", path.display());
            Vec::new()
        }
        Err(err) => {
            tracing::warn!("Failed to parse {}: {}", path.display(), err);
            Vec::new()
        }
    }
}
