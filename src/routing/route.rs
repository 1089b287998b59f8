//! Route request validation and orchestration.

use geo::Point;
use serde::{Deserialize, Serialize};

use crate::error::RoutingError;
use crate::graph::{CampusGraph, GraphNode};
use crate::model::{GraphSnapshot, VertexCategory};
use crate::routing::dijkstra::shortest_path;
use crate::routing::snap::{SegmentSnap, SnapResolution, SnapThresholds, resolve_coordinate};
use crate::{SegmentId, VertexId};

/// A route request. The end must always be a known vertex; the start is
/// either a vertex id or a raw coordinate to be resolved onto the network.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_vertex: Option<VertexId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_coordinate: Option<Point<f64>>,
    pub end_vertex: VertexId,
}

impl RouteQuery {
    /// Vertex-to-vertex query.
    pub fn between(start: impl Into<VertexId>, end: impl Into<VertexId>) -> Self {
        Self {
            start_vertex: Some(start.into()),
            start_coordinate: None,
            end_vertex: end.into(),
        }
    }

    /// Coordinate-to-vertex query; the start is resolved by snapping.
    pub fn from_coordinate(start: Point<f64>, end: impl Into<VertexId>) -> Self {
        Self {
            start_vertex: None,
            start_coordinate: Some(start),
            end_vertex: end.into(),
        }
    }
}

/// One stop along a computed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RouteStep {
    /// A persisted campus vertex.
    Vertex {
        id: VertexId,
        name: String,
        category: VertexCategory,
        coordinate: Point<f64>,
    },
    /// The virtual start spliced onto a segment for this query.
    Origin {
        segment_id: SegmentId,
        coordinate: Point<f64>,
    },
}

impl RouteStep {
    pub fn coordinate(&self) -> Point<f64> {
        match self {
            Self::Vertex { coordinate, .. } | Self::Origin { coordinate, .. } => *coordinate,
        }
    }
}

/// How a raw start coordinate was resolved, reported as advisory metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StartSnap {
    Vertex { vertex_id: VertexId, distance_m: f64 },
    Segment { segment_id: SegmentId, distance_m: f64 },
}

/// A computed route: ordered steps from start to end inclusive, total
/// walking distance, and snapping metadata when the start was a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub steps: Vec<RouteStep>,
    pub total_distance_m: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_snap: Option<StartSnap>,
}

enum Start {
    Vertex(VertexId),
    OnSegment(SegmentSnap),
}

/// Computes the minimum-distance route described by `query` over `snapshot`.
///
/// An explicit start vertex id always takes precedence over a coordinate.
/// When only a coordinate is given it is resolved first: to a vertex within
/// the vertex radius, or to a virtual origin on the nearest open segment
/// within the segment radius. Failures are terminal; no partial results.
///
/// # Errors
///
/// [`RoutingError::MissingParameters`] when the query has neither start form,
/// [`RoutingError::NoNearbyStart`] when a coordinate resolves to nothing,
/// [`RoutingError::VertexNotFound`] for unknown vertex ids, and
/// [`RoutingError::NoPathFound`] when the endpoints are not connected by open
/// segments.
pub fn find_route(
    snapshot: &GraphSnapshot,
    query: &RouteQuery,
) -> Result<RouteResult, RoutingError> {
    let (start, start_snap) = match (&query.start_vertex, query.start_coordinate) {
        (Some(id), _) => (Start::Vertex(id.clone()), None),
        (None, Some(point)) => {
            match resolve_coordinate(point, snapshot, SnapThresholds::default()) {
                SnapResolution::Vertex { id, distance_m } => {
                    let meta = StartSnap::Vertex {
                        vertex_id: id.clone(),
                        distance_m,
                    };
                    (Start::Vertex(id), Some(meta))
                }
                SnapResolution::Segment(snap) => {
                    let meta = StartSnap::Segment {
                        segment_id: snap.segment_id.clone(),
                        distance_m: snap.projection.distance_m,
                    };
                    (Start::OnSegment(snap), Some(meta))
                }
                SnapResolution::OutOfRange => return Err(RoutingError::NoNearbyStart),
            }
        }
        (None, None) => return Err(RoutingError::MissingParameters),
    };

    if !snapshot.contains_vertex(&query.end_vertex) {
        return Err(RoutingError::VertexNotFound(query.end_vertex.clone()));
    }
    if let Start::Vertex(id) = &start {
        if !snapshot.contains_vertex(id) {
            return Err(RoutingError::VertexNotFound(id.clone()));
        }
    }

    let mut graph = CampusGraph::build(snapshot);
    let start_node = match &start {
        Start::Vertex(id) => graph
            .node(id)
            .ok_or_else(|| RoutingError::VertexNotFound(id.clone()))?,
        // Endpoints were joined from the snapshot, so splicing only fails if
        // the snapshot changed under us, which it cannot.
        Start::OnSegment(snap) => graph
            .splice_virtual_origin(snap)
            .ok_or(RoutingError::NoPathFound)?,
    };
    let end_node = graph
        .node(&query.end_vertex)
        .ok_or_else(|| RoutingError::VertexNotFound(query.end_vertex.clone()))?;

    let path = shortest_path(&graph, start_node, end_node).ok_or(RoutingError::NoPathFound)?;

    let mut steps = Vec::with_capacity(path.nodes.len());
    for node in &path.nodes {
        match graph.node_payload(*node) {
            Some(GraphNode::Vertex { id, .. }) => {
                let vertex = snapshot
                    .vertex(id)
                    .ok_or_else(|| RoutingError::VertexNotFound(id.clone()))?;
                steps.push(RouteStep::Vertex {
                    id: vertex.id.clone(),
                    name: vertex.name.clone(),
                    category: vertex.category,
                    coordinate: vertex.coordinate,
                });
            }
            Some(GraphNode::Origin {
                segment_id,
                coordinate,
            }) => steps.push(RouteStep::Origin {
                segment_id: segment_id.clone(),
                coordinate: *coordinate,
            }),
            None => return Err(RoutingError::NoPathFound),
        }
    }

    Ok(RouteResult {
        steps,
        total_distance_m: path.distance_m,
        start_snap,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Segment, Vertex};

    fn vertex(id: &str, lon: f64, lat: f64) -> Vertex {
        Vertex::new(id, id.to_uppercase(), VertexCategory::Other, Point::new(lon, lat))
    }

    fn chain() -> GraphSnapshot {
        GraphSnapshot::new(
            vec![
                vertex("a", 0.0, 0.0),
                vertex("b", 0.0009, 0.0),
                vertex("c", 0.0018, 0.0),
            ],
            vec![
                Segment::new("ab", "a", "b", 100.0),
                Segment::new("bc", "b", "c", 100.0),
            ],
        )
    }

    #[test]
    fn missing_both_start_forms() {
        let query = RouteQuery {
            start_vertex: None,
            start_coordinate: None,
            end_vertex: "c".into(),
        };
        assert_eq!(
            find_route(&chain(), &query),
            Err(RoutingError::MissingParameters)
        );
    }

    #[test]
    fn unknown_end_vertex() {
        let query = RouteQuery::between("a", "nowhere");
        assert_eq!(
            find_route(&chain(), &query),
            Err(RoutingError::VertexNotFound("nowhere".into()))
        );
    }

    #[test]
    fn unknown_start_vertex() {
        let query = RouteQuery::between("nowhere", "c");
        assert_eq!(
            find_route(&chain(), &query),
            Err(RoutingError::VertexNotFound("nowhere".into()))
        );
    }

    #[test]
    fn explicit_start_vertex_wins_over_coordinate() {
        let mut query = RouteQuery::between("a", "c");
        query.start_coordinate = Some(Point::new(0.0018, 0.0)); // at c
        let route = find_route(&chain(), &query).unwrap();
        assert_eq!(route.steps.len(), 3);
        assert!(route.start_snap.is_none());
    }

    #[test]
    fn coordinate_start_attaches_snap_metadata() {
        // ~10 m north of a.
        let query = RouteQuery::from_coordinate(Point::new(0.0, 0.00009), "c");
        let route = find_route(&chain(), &query).unwrap();

        match route.start_snap {
            Some(StartSnap::Vertex {
                ref vertex_id,
                distance_m,
            }) => {
                assert_eq!(vertex_id, "a");
                assert!((distance_m - 10.0).abs() < 0.5);
            }
            ref other => panic!("expected vertex snap metadata, got {other:?}"),
        }
        assert!((route.total_distance_m - 200.0).abs() < 1e-9);
    }

    #[test]
    fn coordinate_far_from_everything() {
        let query = RouteQuery::from_coordinate(Point::new(1.0, 1.0), "c");
        assert_eq!(find_route(&chain(), &query), Err(RoutingError::NoNearbyStart));
    }

    #[test]
    fn on_segment_start_routes_from_projected_point() {
        // Halfway along ab, ~20 m off the line: the route must originate at
        // the projected point, costing half of ab plus all of bc.
        let query = RouteQuery::from_coordinate(Point::new(0.00045, 0.00018), "c");
        let route = find_route(&chain(), &query).unwrap();

        match &route.steps[0] {
            RouteStep::Origin { segment_id, .. } => assert_eq!(segment_id, "ab"),
            other => panic!("expected virtual origin, got {other:?}"),
        }
        match &route.steps[1] {
            RouteStep::Vertex { id, .. } => assert_eq!(id, "b"),
            other => panic!("expected vertex b, got {other:?}"),
        }
        assert!((route.total_distance_m - 150.0).abs() < 1e-6);
        assert!(matches!(
            route.start_snap,
            Some(StartSnap::Segment { .. })
        ));
    }

    #[test]
    fn degenerate_route_start_equals_end() {
        let route = find_route(&chain(), &RouteQuery::between("b", "b")).unwrap();
        assert_eq!(route.steps.len(), 1);
        assert_eq!(route.total_distance_m, 0.0);
    }
}
