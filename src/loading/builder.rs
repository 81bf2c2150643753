use geo::{Coord, LineString};
use hashbrown::{HashMap, HashSet};
use itertools::Itertools;
use log::{info, warn};

use super::records::{RouteRecord, RouteStopRecord};
use crate::geo_util::{distance_km, travel_time_min};
use crate::model::{EdgeMode, TransitEdge, TransitGraph};
use crate::{WALK_LINK_MAX_KM, WALK_LINK_PENALTY_MIN};

/// Rebuild the whole network graph from flat route/stop records.
///
/// Prior graph state is discarded first, so the call is an idempotent
/// full rebuild. Malformed entries (an unresolved stop reference) are
/// skipped and logged, never surfaced: the data source is assumed
/// pre-validated upstream, and an empty result is observed through the
/// solver's `SYSTEM_ERROR` pre-check rather than a return value here.
///
/// `route_stops` groups the entries of each route under its route id;
/// ordering within a route comes from `sequence_order`, not from slice
/// position.
pub fn build_graph(
    graph: &mut TransitGraph,
    routes: &[RouteRecord],
    route_stops: &HashMap<String, Vec<RouteStopRecord>>,
) {
    graph.clear();

    for route in routes {
        graph
            .route_names
            .insert(route.id.clone(), route.route_number.clone());
    }

    let grouped = grouped_entries(routes, route_stops);

    register_stops(graph, &grouped);
    let bus_edges = add_bus_edges(graph, &grouped);
    let walk_links = add_walk_links(graph);

    info!(
        "built transit graph: {} stops, {bus_edges} bus edges, {walk_links} walking links",
        graph.stop_count()
    );
}

/// Entries grouped per route, in `routes` slice order so that node
/// insertion (and with it nearest-stop tie-breaking) is deterministic
/// across rebuilds. Route-stop keys missing from `routes` still
/// contribute their stops and edges; they follow in sorted-id order.
fn grouped_entries<'a>(
    routes: &'a [RouteRecord],
    route_stops: &'a HashMap<String, Vec<RouteStopRecord>>,
) -> Vec<(&'a str, &'a [RouteStopRecord])> {
    let mut grouped: Vec<(&str, &[RouteStopRecord])> = Vec::with_capacity(route_stops.len());
    let mut taken: HashSet<&str> = HashSet::with_capacity(routes.len());

    for route in routes {
        if let Some(entries) = route_stops.get(&route.id) {
            if taken.insert(route.id.as_str()) {
                grouped.push((route.id.as_str(), entries.as_slice()));
            }
        }
    }

    let mut orphans: Vec<&str> = route_stops
        .keys()
        .map(String::as_str)
        .filter(|id| !taken.contains(id))
        .collect();
    orphans.sort_unstable();
    for id in orphans {
        grouped.push((id, route_stops[id].as_slice()));
    }

    grouped
}

/// Register a node for every distinct stop id referenced by any entry.
fn register_stops(graph: &mut TransitGraph, grouped: &[(&str, &[RouteStopRecord])]) {
    let mut skipped = 0usize;
    for (_, entries) in grouped {
        for entry in *entries {
            match &entry.stops {
                Some(stop) => {
                    graph.intern_stop(&stop.id, &stop.stop_name, stop.lat, stop.lng);
                }
                None => skipped += 1,
            }
        }
    }
    if skipped > 0 {
        warn!("skipped {skipped} route-stop entries with unresolved stop references");
    }
}

/// One directed bus edge per consecutive pair of each route's
/// sequence-sorted entries. No shortcut edges between non-adjacent
/// stops of a route.
fn add_bus_edges(graph: &mut TransitGraph, grouped: &[(&str, &[RouteStopRecord])]) -> usize {
    let bus_speed = graph.config().bus_speed_kmh;
    let mut added = 0;

    for (route_id, entries) in grouped {
        let mut ordered: Vec<&RouteStopRecord> = entries.iter().collect();
        // stable, so equal sequence numbers keep their input order
        ordered.sort_by_key(|entry| entry.sequence_order);

        for (from, to) in ordered.iter().tuple_windows() {
            let (Some(from_stop), Some(to_stop)) = (&from.stops, &to.stops) else {
                continue;
            };
            let Some(&source) = graph.stop_ids.get(&from_stop.id) else {
                continue;
            };
            let Some(&target) = graph.stop_ids.get(&to_stop.id) else {
                continue;
            };

            let dist = distance_km(graph.graph[source].geometry, graph.graph[target].geometry);
            graph.graph.add_edge(
                source,
                target,
                TransitEdge {
                    mode: EdgeMode::Bus((*route_id).to_owned()),
                    distance_km: dist,
                    time_min: travel_time_min(dist, bus_speed),
                    geometry: drawn_path(from),
                },
            );
            added += 1;
        }
    }

    added
}

/// Drawn polyline for the hop starting at `entry`, when present and
/// carrying at least two vertices.
fn drawn_path(entry: &RouteStopRecord) -> Option<LineString<f64>> {
    let points = entry.path_coordinates.as_ref()?;
    if points.len() < 2 {
        return None;
    }
    Some(LineString::new(
        points.iter().map(|p| Coord { x: p.lng, y: p.lat }).collect(),
    ))
}

/// Mirrored walking links between every unordered pair of stops under
/// the walk-link radius, independent of route membership.
///
/// Quadratic in the number of distinct stops; fine for the few hundred
/// stops of one city network.
fn add_walk_links(graph: &mut TransitGraph) -> usize {
    let walking_speed = graph.config().walking_speed_kmh;
    let nodes: Vec<_> = graph.graph.node_indices().collect();
    let mut added = 0;

    for (&a, &b) in nodes.iter().tuple_combinations() {
        let dist = distance_km(graph.graph[a].geometry, graph.graph[b].geometry);
        if dist >= WALK_LINK_MAX_KM {
            continue;
        }
        let edge = TransitEdge {
            mode: EdgeMode::Walk,
            distance_km: dist,
            time_min: travel_time_min(dist, walking_speed) + WALK_LINK_PENALTY_MIN,
            geometry: None,
        };
        graph.graph.add_edge(a, b, edge.clone());
        graph.graph.add_edge(b, a, edge);
        added += 2;
    }

    added
}
