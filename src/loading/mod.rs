//! Input records and graph construction.

mod builder;
pub mod records;

pub use builder::build_graph;
pub use records::{PathPoint, RouteRecord, RouteStopRecord, StopDetail};
