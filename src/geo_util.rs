//! Great-circle helpers shared by the builder and the solver.

use geo::{Distance, Haversine, Point};

/// Build a point from latitude/longitude degrees (x = lng, y = lat).
pub fn point(lat: f64, lng: f64) -> Point<f64> {
    Point::new(lng, lat)
}

/// Great-circle distance between two points in kilometers.
pub fn distance_km(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b) / 1000.0
}

/// Minutes needed to cover `distance_km` at a constant speed.
pub fn travel_time_min(distance_km: f64, speed_kmh: f64) -> f64 {
    distance_km / speed_kmh * 60.0
}
