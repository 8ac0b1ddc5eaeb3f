use crate::types::track::RawGeoPoint;

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(crate) fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Great-circle distance in kilometers.
pub(crate) fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const R: f64 = 6371.0; // Earth radius in km

    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    R * c
}

/// Distance between consecutive points in kilometers, including the
/// elevation delta when both ends carry a finite elevation.
pub(crate) fn pair_distance_km(a: &RawGeoPoint, b: &RawGeoPoint) -> f64 {
    let flat = haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude);
    match (a.elevation, b.elevation) {
        (Some(ele_a), Some(ele_b)) if ele_a.is_finite() && ele_b.is_finite() => {
            let vertical_km = (ele_b - ele_a) / 1000.0;
            (flat * flat + vertical_km * vertical_km).sqrt()
        }
        _ => flat,
    }
}
