//! Geographic helper functions for storm-track analysis.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in km between two points given in degrees.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
/// NaN in any coordinate propagates to the result.
pub fn haversine_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let (lon1, lat1, lon2, lat2) = (
        lon1.to_radians(),
        lat1.to_radians(),
        lon2.to_radians(),
        lat2.to_radians(),
    );
    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * a.sqrt().asin() * EARTH_RADIUS_KM
}

/// Index of the axis entry closest to `value`, ignoring NaN entries.
///
/// Ties resolve to the lowest index. Returns `None` if the axis is empty,
/// contains only NaN, or `value` is NaN.
pub fn nearest_axis_index(axis: &[f64], value: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &a) in axis.iter().enumerate() {
        let d = (a - value) * (a - value);
        if d.is_nan() {
            continue;
        }
        match best {
            Some((_, bd)) if d >= bd => {}
            _ => best = Some((i, d)),
        }
    }
    best.map(|(i, _)| i)
}

/// Grid cell `(lon_index, lat_index)` nearest to a point on a regular
/// lon/lat grid.
///
/// Each axis is searched independently. Returns `None` if either axis
/// lookup fails.
pub fn nearest_index(
    lon_axis: &[f64],
    lat_axis: &[f64],
    lon: f64,
    lat: f64,
) -> Option<(usize, usize)> {
    Some((
        nearest_axis_index(lon_axis, lon)?,
        nearest_axis_index(lat_axis, lat)?,
    ))
}
