//! Input record shapes consumed by the graph builder.
//!
//! These are strict structs carrying only the fields the builder
//! reads; unknown upstream fields are ignored at the deserialization
//! boundary. Latitude/longitude must arrive already resolved to
//! numbers — decoding whatever geometry encoding the backing store
//! uses (WKB hex, GeoJSON, PostGIS text) is the embedder's
//! preprocessing step.

use serde::Deserialize;

/// A bus route as delivered by the upstream data service.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    pub id: String,
    /// Human-readable route number used in segment descriptions
    pub route_number: String,
}

/// One (route, stop, position) entry with the stop detail embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteStopRecord {
    /// Position of the stop along its route; entries are sorted by
    /// this value before bus edges are derived
    pub sequence_order: i64,
    /// Manually drawn polyline from this stop to the next stop of the
    /// same route
    #[serde(default)]
    pub path_coordinates: Option<Vec<PathPoint>>,
    /// Absent when the referenced stop could not be resolved upstream;
    /// such entries are skipped
    #[serde(default)]
    pub stops: Option<StopDetail>,
}

/// Resolved stop embedded in a [`RouteStopRecord`].
#[derive(Debug, Clone, Deserialize)]
pub struct StopDetail {
    pub id: String,
    pub stop_name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A single vertex of a drawn path polyline.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PathPoint {
    pub lat: f64,
    pub lng: f64,
}
