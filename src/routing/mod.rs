//! Shortest-path solver over a built [`TransitGraph`].
//!
//! A query is validated, searched, reconstructed and post-validated
//! in that fixed order, with a typed [`RouteError`] exit at each
//! stage. Nothing is retained between queries; for a fixed graph the
//! same query always produces the same answer.

mod dijkstra;
pub mod itinerary;

pub use itinerary::{PathResult, Segment, StopRef};

use itertools::Itertools;
use log::debug;

use crate::error::RouteError;
use crate::geo_util::{distance_km, point, travel_time_min};
use crate::model::{EdgeMode, TransitGraph};
use crate::{
    MAX_TRANSFERS, MAX_WALKING_KM, MIN_TRIP_KM, SAME_LOCATION_KM, SNAP_RADIUS_KM,
    WALKING_SHARE_LIMIT,
};

/// Fastest multimodal route between two coordinates.
///
/// Snaps each endpoint to its nearest stop, validates the query
/// against the rejection rules in their fixed priority order, runs the
/// transfer-penalized search, and wraps the reconstructed core path
/// with the leading and trailing walking legs. Every way the query can
/// fail comes back as a [`RouteError`] value; the call itself never
/// fails for expected unroutable conditions.
///
/// # Panics
///
/// When any coordinate is not a finite number. That is a caller
/// contract violation, not a routing outcome.
pub fn find_shortest_path(
    graph: &TransitGraph,
    start_lat: f64,
    start_lng: f64,
    end_lat: f64,
    end_lng: f64,
) -> Result<PathResult, RouteError> {
    for value in [start_lat, start_lng, end_lat, end_lng] {
        assert!(value.is_finite(), "query coordinates must be finite");
    }

    // Rejection rules, first match wins. Distance checks come before
    // the service-area check.
    if graph.is_empty() {
        return Err(RouteError::SystemError);
    }

    let origin = point(start_lat, start_lng);
    let destination = point(end_lat, end_lng);
    let direct_km = distance_km(origin, destination);
    if direct_km < SAME_LOCATION_KM {
        return Err(RouteError::SameLocation);
    }
    if direct_km < MIN_TRIP_KM {
        return Err(RouteError::TooClose);
    }

    let area = graph.config().service_area;
    if !area.contains(start_lat, start_lng) || !area.contains(end_lat, end_lng) {
        return Err(RouteError::OutOfServiceArea);
    }

    let (start_node, lead_km) = graph
        .nearest_node(origin, SNAP_RADIUS_KM)
        .ok_or(RouteError::StartTooFar)?;
    let (end_node, trail_km) = graph
        .nearest_node(destination, SNAP_RADIUS_KM)
        .ok_or(RouteError::EndTooFar)?;
    debug!(
        "snapped query to stops {} -> {} ({lead_km:.3} km / {trail_km:.3} km walks)",
        graph.graph[start_node].id, graph.graph[end_node].id
    );

    let tree = dijkstra::shortest_path_tree(graph, start_node, end_node);
    let Some(&core_time_min) = tree.scores.get(&end_node) else {
        return Err(RouteError::NoPathFound);
    };

    let core = itinerary::reconstruct_segments(graph, &tree, start_node, end_node);

    let transfers = count_transfers(&core);
    if transfers > MAX_TRANSFERS {
        return Err(RouteError::TransferLimitExceeded);
    }

    let core_km: f64 = core.iter().map(|segment| segment.distance_km).sum();
    let walking_km = lead_km + trail_km;
    let total_km = core_km + walking_km;
    if walking_km > MAX_WALKING_KM && walking_km > WALKING_SHARE_LIMIT * total_km {
        return Err(RouteError::WalkingTooLong);
    }

    // Wrap the core with the boundary walking legs.
    let walking_speed = graph.config().walking_speed_kmh;
    let start_stop = &graph.graph[start_node];
    let end_stop = &graph.graph[end_node];

    let lead = Segment {
        mode: EdgeMode::Walk,
        route_name: None,
        from: StopRef::Start,
        to: StopRef::of(start_stop),
        distance_km: lead_km,
        time_min: travel_time_min(lead_km, walking_speed),
        geometry: itinerary::straight_line(origin, start_stop.geometry),
    };
    let trail = Segment {
        mode: EdgeMode::Walk,
        route_name: None,
        from: StopRef::of(end_stop),
        to: StopRef::End,
        distance_km: trail_km,
        time_min: travel_time_min(trail_km, walking_speed),
        geometry: itinerary::straight_line(end_stop.geometry, destination),
    };

    let total_time_min = core_time_min + lead.time_min + trail.time_min;
    let mut segments = Vec::with_capacity(core.len() + 2);
    segments.push(lead);
    segments.extend(core);
    segments.push(trail);

    Ok(PathResult {
        segments,
        total_time_min,
        total_distance_km: total_km,
        transfers,
    })
}

/// Route changes within the core path: one per adjacent pair whose
/// modes compare unequal. Consecutive walking legs count as one mode,
/// so they never double count.
fn count_transfers(segments: &[Segment]) -> usize {
    segments
        .iter()
        .tuple_windows()
        .filter(|(a, b)| a.mode != b.mode)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo_util::point;
    use crate::routing::itinerary::straight_line;

    fn segment(mode: EdgeMode) -> Segment {
        Segment {
            mode,
            route_name: None,
            from: StopRef::Start,
            to: StopRef::End,
            distance_km: 1.0,
            time_min: 5.0,
            geometry: straight_line(point(0.0, 0.0), point(0.0, 0.01)),
        }
    }

    #[test]
    fn transfers_count_mode_changes_only() {
        let bus = |id: &str| segment(EdgeMode::Bus(id.into()));
        let walk = || segment(EdgeMode::Walk);

        assert_eq!(count_transfers(&[]), 0);
        assert_eq!(count_transfers(&[bus("r1"), bus("r1")]), 0);
        assert_eq!(count_transfers(&[bus("r1"), bus("r2")]), 1);
        // walk -> walk is the same pseudo-route
        assert_eq!(count_transfers(&[walk(), walk()]), 0);
        // entering and leaving the walk both count
        assert_eq!(count_transfers(&[bus("r1"), walk(), bus("r1")]), 2);
        assert_eq!(
            count_transfers(&[bus("r1"), bus("r2"), walk(), walk(), bus("r3")]),
            3
        );
    }

    #[test]
    #[should_panic(expected = "finite")]
    fn non_finite_input_panics() {
        let graph = TransitGraph::new(crate::model::GraphConfig::default());
        let _ = find_shortest_path(&graph, f64::NAN, 0.0, 1.0, 1.0);
    }
}
