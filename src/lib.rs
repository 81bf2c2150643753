//! Trip-planning core for a city bus network.
//!
//! The crate has two halves. [`loading::build_graph`] turns flat
//! route/stop records into a weighted directed graph: one node per
//! distinct stop, bus edges between consecutive stops of each route,
//! and synthesized pedestrian links between every pair of stops close
//! enough to walk. [`routing::find_shortest_path`] snaps a pair of
//! query coordinates onto that graph and runs a transfer-penalized
//! label-setting search, returning either a segment-by-segment
//! [`PathResult`](routing::PathResult) or a typed
//! [`RouteError`](error::RouteError) explaining why no route can be
//! produced.
//!
//! The core is synchronous and pure computation: no I/O, no internal
//! concurrency, no state shared between queries. Rebuilding the graph
//! while a query is in flight on the same instance is not supported;
//! embedders serialize build-then-query or keep one instance per data
//! generation.

pub mod error;
pub mod geo_util;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::RouteError;
pub use loading::build_graph;
pub use model::{BoundingBox, EdgeMode, GraphConfig, Stop, TransitGraph};
pub use routing::{PathResult, Segment, StopRef, find_shortest_path};

/// Maximum stop-to-stop distance for a synthesized walking link, km.
pub const WALK_LINK_MAX_KM: f64 = 0.5;

/// Flat boarding/alighting overhead added to every walking link, minutes.
pub const WALK_LINK_PENALTY_MIN: f64 = 1.0;

/// Cost added when a path continues on a different route or mode, minutes.
pub const TRANSFER_PENALTY_MIN: f64 = 5.0;

/// Radius for snapping a query coordinate to its nearest stop, km.
pub const SNAP_RADIUS_KM: f64 = 2.0;

/// Below this direct distance start and end count as one location, km.
pub const SAME_LOCATION_KM: f64 = 0.01;

/// Minimum direct distance worth routing at all, km.
pub const MIN_TRIP_KM: f64 = 0.5;

/// Most route changes a returned path may contain.
pub const MAX_TRANSFERS: usize = 4;

/// Absolute walking-distance cap for the dominance check, km.
pub const MAX_WALKING_KM: f64 = 1.5;

/// Walking share of the trip above which walking dominates.
pub const WALKING_SHARE_LIMIT: f64 = 0.8;

/// Gap between a drawn polyline endpoint and its stop that triggers
/// splicing the stop coordinate onto the geometry, km.
pub const GEOMETRY_GAP_KM: f64 = 0.005;
