use gpxviewer_rs::{elevation_profile, extract_metrics, read_points};
use std::path::PathBuf;
use tempfile::TempDir;

fn write_gpx(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write gpx file");
    path
}

fn tracked_gpx() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8"?>
<gpx version="1.1" creator="test">
  <trk><name>Feierabendrunde</name><trkseg>
    <trkpt lat="48.0" lon="11.0"><ele>500.0</ele></trkpt>
    <trkpt lat="48.0" lon="11.1"><ele>520.0</ele></trkpt>
    <trkpt lat="48.0" lon="11.2"><ele>510.0</ele></trkpt>
  </trkseg></trk>
</gpx>"#
}

#[test]
fn stored_points_match_upload_time_points() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "stored.gpx", tracked_gpx());

    let metrics = extract_metrics("stored.gpx", tracked_gpx().as_bytes()).expect("metrics");
    let reread = read_points(&path);

    assert_eq!(reread, metrics.points);
}

#[test]
fn missing_file_reads_as_no_points() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nicht-da.gpx");
    assert!(read_points(&path).is_empty());
}

#[test]
fn blank_file_reads_as_no_points() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "leer.gpx", "   \n  ");
    assert!(read_points(&path).is_empty());
}

#[test]
fn malformed_file_reads_as_no_points() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "kaputt.gpx", "<gpx><trk><trkseg>");
    assert!(read_points(&path).is_empty());
}

#[test]
fn profile_samples_only_elevation_bearing_points() {
    // Five points 0.1 degrees of longitude apart at latitude 48; only the
    // second and fourth carry elevation. The distance axis must still count
    // every gap, so the two samples land one and three legs in.
    let gpx = r#"<gpx version="1.1"><trk><trkseg>
    <trkpt lat="48.0" lon="11.0"/>
    <trkpt lat="48.0" lon="11.1"><ele>600.0</ele></trkpt>
    <trkpt lat="48.0" lon="11.2"/>
    <trkpt lat="48.0" lon="11.3"><ele>620.0</ele></trkpt>
    <trkpt lat="48.0" lon="11.4"/>
  </trkseg></trk></gpx>"#;

    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "spuren.gpx", gpx);

    let profile = elevation_profile(&path).expect("profile");
    assert_eq!(profile.distances_km.len(), 2);
    assert_eq!(profile.elevations_m, vec![600.0, 620.0]);

    let leg_km = 7.44; // one 0.1-degree longitude step at latitude 48
    assert!((profile.distances_km[0] - leg_km).abs() < 0.01);
    assert!((profile.distances_km[1] - 3.0 * leg_km).abs() < 0.01);
}

#[test]
fn profile_distances_never_decrease() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "runde.gpx", tracked_gpx());

    let profile = elevation_profile(&path).expect("profile");
    assert_eq!(profile.distances_km.len(), profile.elevations_m.len());
    assert_eq!(profile.distances_km[0], 0.0);
    assert!(profile
        .distances_km
        .windows(2)
        .all(|pair| pair[0] <= pair[1]));
}

#[test]
fn profile_without_elevation_yields_none() {
    let gpx = r#"<gpx version="1.1"><trk><trkseg>
    <trkpt lat="48.0" lon="11.0"/>
    <trkpt lat="48.0" lon="11.1"/>
  </trkseg></trk></gpx>"#;

    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "flach.gpx", gpx);
    assert_eq!(elevation_profile(&path), None);
}

#[test]
fn profile_for_missing_file_yields_none() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nicht-da.gpx");
    assert_eq!(elevation_profile(&path), None);
}

#[test]
fn profile_for_point_free_document_yields_none() {
    let gpx = r#"<gpx version="1.1"><trk><trkseg></trkseg></trk></gpx>"#;
    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "leer.gpx", gpx);
    assert_eq!(elevation_profile(&path), None);
}

#[test]
fn profile_falls_back_to_route_points() {
    let gpx = r#"<gpx version="1.1">
  <rte>
    <rtept lat="50.0" lon="8.0"><ele>120.0</ele></rtept>
    <rtept lat="50.0" lon="8.1"><ele>140.5</ele></rtept>
  </rte>
</gpx>"#;
    let dir = TempDir::new().expect("tempdir");
    let path = write_gpx(&dir, "plan.gpx", gpx);

    let profile = elevation_profile(&path).expect("profile");
    assert_eq!(profile.elevations_m, vec![120.0, 140.5]);
    assert!(profile.distances_km[1] > 0.0);
}
