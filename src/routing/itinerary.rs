//! Turn-by-turn result assembly: segments, geometry, GeoJSON export.

use geo::{Coord, LineString, Point, line_string};
use geojson::{Feature, FeatureCollection, Geometry};
use petgraph::graph::{EdgeIndex, NodeIndex};
use serde_json::{Map, Value as JsonValue};

use super::dijkstra::SearchTree;
use crate::GEOMETRY_GAP_KM;
use crate::geo_util::distance_km;
use crate::model::{EdgeMode, Stop, TransitGraph};

/// Endpoint of a segment: a real stop, or one of the two sentinels
/// bounding the leading/trailing walking legs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopRef {
    /// The rider's origin coordinate
    Start,
    /// The rider's destination coordinate
    End,
    Stop { id: String, name: String },
}

impl StopRef {
    pub(crate) fn of(stop: &Stop) -> Self {
        StopRef::Stop {
            id: stop.id.clone(),
            name: stop.name.clone(),
        }
    }

    /// Display label: the stop name, or the `START`/`END` sentinel.
    pub fn label(&self) -> &str {
        match self {
            StopRef::Start => "START",
            StopRef::End => "END",
            StopRef::Stop { name, .. } => name,
        }
    }
}

/// One leg of a trip: a bus hop or a walking stretch.
#[derive(Debug, Clone)]
pub struct Segment {
    pub mode: EdgeMode,
    /// Human-readable route number for bus legs
    pub route_name: Option<String>,
    pub from: StopRef,
    pub to: StopRef,
    pub distance_km: f64,
    pub time_min: f64,
    /// Polyline for rendering, already stitched to the endpoint stops
    pub geometry: LineString<f64>,
}

impl Segment {
    fn to_feature(&self) -> Feature {
        let mut properties = Map::new();
        properties.insert(
            "leg_type".to_owned(),
            JsonValue::String(if self.mode.is_walk() { "walk" } else { "bus" }.to_owned()),
        );
        properties.insert(
            "route".to_owned(),
            JsonValue::String(self.mode.label().to_owned()),
        );
        if let Some(name) = &self.route_name {
            properties.insert("route_name".to_owned(), JsonValue::String(name.clone()));
        }
        properties.insert(
            "from".to_owned(),
            JsonValue::String(self.from.label().to_owned()),
        );
        properties.insert(
            "to".to_owned(),
            JsonValue::String(self.to.label().to_owned()),
        );
        properties.insert("duration_min".to_owned(), JsonValue::from(self.time_min));
        properties.insert("distance_km".to_owned(), JsonValue::from(self.distance_km));

        Feature {
            bbox: None,
            geometry: Some(Geometry::new((&self.geometry).into())),
            id: None,
            properties: Some(properties),
            foreign_members: None,
        }
    }
}

/// A complete routed trip. Built fresh per query, never cached or
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct PathResult {
    /// Walking leg in, core bus/walk legs, walking leg out
    pub segments: Vec<Segment>,
    pub total_time_min: f64,
    pub total_distance_km: f64,
    /// Route/mode changes within the core path
    pub transfers: usize,
}

impl PathResult {
    /// One `Feature` per segment, for the map layer.
    pub fn to_geojson(&self) -> FeatureCollection {
        FeatureCollection {
            bbox: None,
            features: self.segments.iter().map(Segment::to_feature).collect(),
            foreign_members: None,
        }
    }

    pub fn to_geojson_string(&self) -> String {
        serde_json::to_string(&self.to_geojson()).unwrap_or_default()
    }
}

/// Walk the predecessor edges backward from `end` to `start` and emit
/// the core segments in forward order.
pub(crate) fn reconstruct_segments(
    graph: &TransitGraph,
    tree: &SearchTree,
    start: NodeIndex,
    end: NodeIndex,
) -> Vec<Segment> {
    let mut edges: Vec<(EdgeIndex, NodeIndex, NodeIndex)> = Vec::new();
    let mut current = end;
    while current != start {
        let Some(&edge) = tree.parent_edge.get(&current) else {
            break;
        };
        let Some((source, target)) = graph.graph.edge_endpoints(edge) else {
            break;
        };
        edges.push((edge, source, target));
        current = source;
    }
    edges.reverse();

    edges
        .into_iter()
        .map(|(edge, source, target)| segment_from_edge(graph, edge, source, target))
        .collect()
}

fn segment_from_edge(
    graph: &TransitGraph,
    edge_idx: EdgeIndex,
    source: NodeIndex,
    target: NodeIndex,
) -> Segment {
    let weight = &graph.graph[edge_idx];
    let from = &graph.graph[source];
    let to = &graph.graph[target];

    let geometry = match &weight.geometry {
        Some(line) => stitch_to_stops(line.clone(), from.geometry, to.geometry),
        None => straight_line(from.geometry, to.geometry),
    };

    let route_name = match &weight.mode {
        EdgeMode::Bus(route_id) => graph.route_name(route_id).map(str::to_owned),
        EdgeMode::Walk => None,
    };

    Segment {
        mode: weight.mode.clone(),
        route_name,
        from: StopRef::of(from),
        to: StopRef::of(to),
        distance_km: weight.distance_km,
        time_min: weight.time_min,
        geometry,
    }
}

pub(crate) fn straight_line(from: Point<f64>, to: Point<f64>) -> LineString<f64> {
    line_string![(x: from.x(), y: from.y()), (x: to.x(), y: to.y())]
}

/// Splice the stop coordinates onto a drawn polyline wherever its
/// endpoint drifts more than the gap threshold from the stop, so the
/// rendered line always reaches both stops. Applied independently at
/// each end.
fn stitch_to_stops(
    mut line: LineString<f64>,
    from: Point<f64>,
    to: Point<f64>,
) -> LineString<f64> {
    if let Some(&first) = line.0.first() {
        if distance_km(Point::from(first), from) > GEOMETRY_GAP_KM {
            line.0.insert(0, Coord::from(from));
        }
    }
    if let Some(&last) = line.0.last() {
        if distance_km(Point::from(last), to) > GEOMETRY_GAP_KM {
            line.0.push(Coord::from(to));
        }
    }
    line
}
