//! Convenience re-export of the crate's working set.

pub use crate::error::RouteError;
pub use crate::loading::build_graph;
pub use crate::loading::records::{PathPoint, RouteRecord, RouteStopRecord, StopDetail};
pub use crate::model::{BoundingBox, EdgeMode, GraphConfig, Stop, TransitGraph};
pub use crate::routing::{PathResult, Segment, StopRef, find_shortest_path};

// Tuning constants most embedders end up referencing
pub use crate::{MAX_TRANSFERS, SNAP_RADIUS_KM, TRANSFER_PENALTY_MIN, WALK_LINK_MAX_KM};
