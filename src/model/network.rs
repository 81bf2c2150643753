//! In-memory bus network graph.

use geo::Point;
use hashbrown::HashMap;
use petgraph::graph::{DiGraph, NodeIndex};

use super::types::{GraphConfig, Stop, TransitEdge};
use crate::geo_util::{distance_km, point};

/// Directed weighted graph over the bus network.
///
/// Nodes are stops, edges are bus hops or synthesized walking links.
/// The whole structure is rebuilt from scratch on every
/// [`build_graph`](crate::loading::build_graph) call; there is no
/// incremental update. One instance serves one generation of data.
#[derive(Debug, Clone, Default)]
pub struct TransitGraph {
    pub(crate) graph: DiGraph<Stop, TransitEdge>,
    /// Stop id to node translation, filled once at build time
    pub(crate) stop_ids: HashMap<String, NodeIndex>,
    /// Route id to human-readable route number
    pub(crate) route_names: HashMap<String, String>,
    config: GraphConfig,
}

impl TransitGraph {
    pub fn new(config: GraphConfig) -> Self {
        TransitGraph {
            graph: DiGraph::new(),
            stop_ids: HashMap::new(),
            route_names: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn stop_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// True when the graph cannot answer queries: no stops, or stops
    /// with no edges between them. This is the solver's
    /// `SYSTEM_ERROR` precondition.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0 || self.graph.edge_count() == 0
    }

    /// Look up a stop by its upstream id.
    pub fn stop(&self, id: &str) -> Option<&Stop> {
        self.stop_ids.get(id).map(|&idx| &self.graph[idx])
    }

    /// Human-readable route number for a route id, if known.
    pub fn route_name(&self, route_id: &str) -> Option<&str> {
        self.route_names.get(route_id).map(String::as_str)
    }

    /// Nearest registered stop to a coordinate, with its distance in
    /// kilometers, or `None` when nothing lies within
    /// `max_distance_km` ([`SNAP_RADIUS_KM`](crate::SNAP_RADIUS_KM)
    /// is the conventional radius).
    ///
    /// Linear scan over all stops in node-insertion order; on an exact
    /// distance tie the first stop encountered wins. That order is
    /// deterministic for a fixed build, but otherwise arbitrary.
    pub fn find_nearest_stop(
        &self,
        lat: f64,
        lng: f64,
        max_distance_km: f64,
    ) -> Option<(&Stop, f64)> {
        self.nearest_node(point(lat, lng), max_distance_km)
            .map(|(idx, dist)| (&self.graph[idx], dist))
    }

    pub(crate) fn nearest_node(
        &self,
        origin: Point<f64>,
        max_distance_km: f64,
    ) -> Option<(NodeIndex, f64)> {
        let mut best: Option<(NodeIndex, f64)> = None;
        for idx in self.graph.node_indices() {
            let dist = distance_km(origin, self.graph[idx].geometry);
            if dist <= max_distance_km && best.is_none_or(|(_, b)| dist < b) {
                best = Some((idx, dist));
            }
        }
        best
    }

    /// Drop all graph state ahead of a full rebuild.
    pub(crate) fn clear(&mut self) {
        self.graph.clear();
        self.stop_ids.clear();
        self.route_names.clear();
    }

    /// Register a stop node, returning the existing node when the id
    /// was seen before (first record wins for name and coordinates).
    pub(crate) fn intern_stop(&mut self, id: &str, name: &str, lat: f64, lng: f64) -> NodeIndex {
        if let Some(&idx) = self.stop_ids.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(Stop {
            id: id.to_owned(),
            name: name.to_owned(),
            geometry: point(lat, lng),
        });
        self.stop_ids.insert(id.to_owned(), idx);
        idx
    }
}
