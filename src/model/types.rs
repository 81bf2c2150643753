//! Network components - stops, edges, and build configuration.

use geo::{LineString, Point};

/// A physical bus stop, the unit node of the network graph.
#[derive(Debug, Clone)]
pub struct Stop {
    /// Opaque upstream identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Stop coordinates (x = lng, y = lat)
    pub geometry: Point<f64>,
}

impl Stop {
    pub fn lat(&self) -> f64 {
        self.geometry.y()
    }

    pub fn lng(&self) -> f64 {
        self.geometry.x()
    }
}

/// Which service an edge (or a result segment) belongs to.
///
/// Equality of modes is the "same route" comparison used everywhere:
/// the transfer penalty and the transfer count both fire exactly when
/// two adjacent modes compare unequal. `Walk == Walk`, and two bus
/// modes are equal iff they carry the same route id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    /// A bus hop on the route with this id
    Bus(String),
    /// The synthetic pedestrian pseudo-route
    Walk,
}

impl EdgeMode {
    pub fn is_walk(&self) -> bool {
        matches!(self, EdgeMode::Walk)
    }

    /// Route id for bus edges, the literal `"WALK"` otherwise.
    pub fn label(&self) -> &str {
        match self {
            EdgeMode::Bus(route_id) => route_id,
            EdgeMode::Walk => "WALK",
        }
    }
}

/// Directed edge of the network graph.
#[derive(Debug, Clone)]
pub struct TransitEdge {
    pub mode: EdgeMode,
    pub distance_km: f64,
    /// Traversal time; walking links already include the flat
    /// boarding/alighting overhead
    pub time_min: f64,
    /// Manually drawn polyline for rendering; `None` means a straight
    /// line between the endpoint stops
    pub geometry: Option<LineString<f64>>,
}

/// Service-area extents in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, max_lat: f64, min_lng: f64, max_lng: f64) -> Self {
        BoundingBox {
            min_lat,
            max_lat,
            min_lng,
            max_lng,
        }
    }

    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lng >= self.min_lng && lng <= self.max_lng
    }
}

/// Per-deployment build configuration.
///
/// The routing thresholds themselves (snap radius, transfer penalty,
/// walking limits) are crate-level constants; only the quantities that
/// genuinely differ between deployments live here.
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Coverage bounding box of the serviced city
    pub service_area: BoundingBox,
    pub walking_speed_kmh: f64,
    pub bus_speed_kmh: f64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            // Bishkek city extents
            service_area: BoundingBox::new(42.78, 42.98, 74.45, 74.75),
            walking_speed_kmh: 5.0,
            bus_speed_kmh: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_contains_is_inclusive() {
        let bbox = BoundingBox::new(-1.0, 1.0, -2.0, 2.0);
        assert!(bbox.contains(0.0, 0.0));
        assert!(bbox.contains(1.0, 2.0));
        assert!(!bbox.contains(1.01, 0.0));
        assert!(!bbox.contains(0.0, -2.01));
    }

    #[test]
    fn mode_equality_is_the_same_route_rule() {
        let a = EdgeMode::Bus("r1".into());
        let b = EdgeMode::Bus("r2".into());
        assert_eq!(a, EdgeMode::Bus("r1".into()));
        assert_ne!(a, b);
        assert_eq!(EdgeMode::Walk, EdgeMode::Walk);
        assert_ne!(a, EdgeMode::Walk);
        assert_eq!(EdgeMode::Walk.label(), "WALK");
    }
}
