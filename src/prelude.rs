// Re-export of key components
pub use crate::error::RoutingError;
pub use crate::geomath::{SegmentProjection, haversine_meters, project_onto_segment};
pub use crate::graph::CampusGraph;
pub use crate::model::{GraphSnapshot, Segment, SegmentAccessibility, Vertex, VertexCategory};
pub use crate::routing::{
    RouteQuery, RouteResult, RouteStep, SnapResolution, SnapThresholds, StartSnap, find_route,
    resolve_coordinate, shortest_path,
};

pub use crate::{SEGMENT_SNAP_RADIUS_M, VERTEX_SNAP_RADIUS_M};
pub use crate::{SegmentId, VertexId};
