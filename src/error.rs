use thiserror::Error;

use crate::VertexId;

/// Terminal outcomes of a route computation.
///
/// Every variant is a caller-facing result, not an internal fault: the
/// computation is deterministic for a given snapshot, so nothing here is
/// worth retrying without fresh data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoutingError {
    #[error("supply a start vertex id or a start coordinate, and an end vertex id")]
    MissingParameters,
    #[error("vertex not found: {0}")]
    VertexNotFound(VertexId),
    #[error("no nearby start location within snapping range")]
    NoNearbyStart,
    #[error("no path found between the requested locations")]
    NoPathFound,
}
