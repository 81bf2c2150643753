use serde::Serialize;
use thiserror::Error;

/// Why a query could not be turned into a route.
///
/// These are terminal classifications returned by value, never
/// panicked: callers map each code to a user-facing message. The set
/// is closed — no undocumented codes are ever produced — so that
/// mapping can be exhaustive. Serialization yields the bare wire code
/// (`"START_TOO_FAR"` etc.), the same string [`RouteError::code`]
/// returns.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RouteError {
    /// The graph has no stops or no edges — nothing was built yet.
    #[error("transit graph is empty or was never built")]
    SystemError,
    /// Start and end are within ten meters of each other.
    #[error("start and end are the same location")]
    SameLocation,
    /// Start and end are under half a kilometer apart.
    #[error("start and end are too close to be worth routing")]
    TooClose,
    /// Either endpoint lies outside the service-area bounding box.
    #[error("point is outside the service area")]
    OutOfServiceArea,
    /// No stop within snapping range of the start coordinate.
    #[error("no stop within reach of the start point")]
    StartTooFar,
    /// No stop within snapping range of the end coordinate.
    #[error("no stop within reach of the end point")]
    EndTooFar,
    /// The search exhausted the network without reaching the end stop.
    #[error("no path connects the snapped stops")]
    NoPathFound,
    /// The best path changes routes more often than allowed.
    #[error("best path exceeds the transfer limit")]
    TransferLimitExceeded,
    /// Walking would dominate the trip.
    #[error("walking share of the trip is too large")]
    WalkingTooLong,
}

impl RouteError {
    /// Stable machine-readable code for this outcome.
    pub fn code(self) -> &'static str {
        match self {
            RouteError::SystemError => "SYSTEM_ERROR",
            RouteError::SameLocation => "SAME_LOCATION",
            RouteError::TooClose => "TOO_CLOSE",
            RouteError::OutOfServiceArea => "OUT_OF_SERVICE_AREA",
            RouteError::StartTooFar => "START_TOO_FAR",
            RouteError::EndTooFar => "END_TOO_FAR",
            RouteError::NoPathFound => "NO_PATH_FOUND",
            RouteError::TransferLimitExceeded => "TRANSFER_LIMIT_EXCEEDED",
            RouteError::WalkingTooLong => "WALKING_TOO_LONG",
        }
    }
}
