//! Data model for the bus network graph.

pub mod network;
pub mod types;

pub use network::TransitGraph;
pub use types::{BoundingBox, EdgeMode, GraphConfig, Stop, TransitEdge};
