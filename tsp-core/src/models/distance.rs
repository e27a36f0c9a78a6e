#[cfg(test)]
#[path = "../../tests/unit/models/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// A mean earth radius in meters.
pub const EARTH_RADIUS: Float = 6_371_000.;

/// Represents a geographic point in decimal degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    /// Latitude.
    pub lat: Float,
    /// Longitude.
    pub lng: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }
}

/// Gets great-circle distance in meters between two points using haversine formula.
pub fn haversine_distance(p1: &Coordinate, p2: &Coordinate) -> Float {
    let d_lat = degree_rad(p2.lat - p1.lat);
    let d_lng = degree_rad(p2.lng - p1.lng);

    let lat1 = degree_rad(p1.lat);
    let lat2 = degree_rad(p2.lat);

    let a = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.).sin().powi(2);
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS * c
}

/// Converts degrees to radians.
#[inline(always)]
fn degree_rad(degrees: Float) -> Float {
    std::f64::consts::PI * degrees / 180.
}
