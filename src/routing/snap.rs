//! Resolution of raw coordinates onto the campus network.
//!
//! A caller who only knows a GPS position gets it translated into something
//! the search can start from: an existing vertex when one is close enough,
//! otherwise the closest point along an open segment.

use geo::Point;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::geomath::{SegmentProjection, haversine_meters, project_onto_segment};
use crate::model::GraphSnapshot;
use crate::{SEGMENT_SNAP_RADIUS_M, SegmentId, VERTEX_SNAP_RADIUS_M, VertexId};

/// Distance limits for snapping, in meters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SnapThresholds {
    /// Within this distance of a vertex the coordinate is "at" the vertex.
    pub vertex_m: f64,
    /// Within this distance of a segment projection the coordinate is "on"
    /// the segment.
    pub segment_m: f64,
}

impl Default for SnapThresholds {
    fn default() -> Self {
        Self {
            vertex_m: VERTEX_SNAP_RADIUS_M,
            segment_m: SEGMENT_SNAP_RADIUS_M,
        }
    }
}

/// A coordinate resolved to the closest point along an open segment.
#[derive(Debug, Clone)]
pub struct SegmentSnap {
    pub segment_id: SegmentId,
    /// Endpoint the interpolation parameter is measured from.
    pub a: VertexId,
    pub b: VertexId,
    /// Stored walking distance of the whole segment, in meters.
    pub segment_distance_m: f64,
    pub projection: SegmentProjection,
}

/// Outcome of resolving a raw coordinate against a snapshot.
#[derive(Debug, Clone)]
pub enum SnapResolution {
    /// Within the vertex radius of an existing vertex.
    Vertex { id: VertexId, distance_m: f64 },
    /// Within the segment radius of a point along an open segment.
    Segment(SegmentSnap),
    /// Too far from every vertex and every open segment.
    OutOfRange,
}

/// Resolves `point` onto the network.
///
/// The nearest vertex wins when it lies within the vertex radius, even if a
/// segment projection would be closer. Otherwise the best projection over all
/// open segments is taken if it lies within the segment radius. Distances are
/// continuous, so exact ties are not expected; when one occurs the first
/// minimum encountered wins.
pub fn resolve_coordinate(
    point: Point<f64>,
    snapshot: &GraphSnapshot,
    thresholds: SnapThresholds,
) -> SnapResolution {
    let mut nearest_vertex: Option<(&VertexId, f64)> = None;
    for vertex in snapshot.vertices() {
        let d = haversine_meters(point, vertex.coordinate);
        if nearest_vertex.is_none_or(|(_, best)| d < best) {
            nearest_vertex = Some((&vertex.id, d));
        }
    }

    if let Some((id, distance_m)) = nearest_vertex {
        if distance_m <= thresholds.vertex_m {
            debug!("coordinate snapped to vertex {id} at {distance_m:.1} m");
            return SnapResolution::Vertex {
                id: id.clone(),
                distance_m,
            };
        }
    }

    let mut nearest_segment: Option<SegmentSnap> = None;
    for open in snapshot.open_segments() {
        let projection = project_onto_segment(point, open.a.coordinate, open.b.coordinate);
        let better = nearest_segment
            .as_ref()
            .is_none_or(|best| projection.distance_m < best.projection.distance_m);
        if better {
            nearest_segment = Some(SegmentSnap {
                segment_id: open.segment.id.clone(),
                a: open.a.id.clone(),
                b: open.b.id.clone(),
                segment_distance_m: open.segment.distance_m,
                projection,
            });
        }
    }

    if let Some(snap) = nearest_segment {
        if snap.projection.distance_m <= thresholds.segment_m {
            debug!(
                "coordinate snapped onto segment {} at {:.1} m (t = {:.3})",
                snap.segment_id, snap.projection.distance_m, snap.projection.t
            );
            return SnapResolution::Segment(snap);
        }
    }

    SnapResolution::OutOfRange
}
