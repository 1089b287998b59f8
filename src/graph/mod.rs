//! Adjacency structure for shortest-path search.
//!
//! Rebuilt from a [`GraphSnapshot`] on every request; there is no cross-
//! request graph cache. Blocked segments never become edges and segments with
//! dangling endpoints are dropped by the snapshot join, while vertices with
//! no surviving segments still get a node so they remain valid search
//! endpoints.

use geo::Point;
use hashbrown::HashMap;
use itertools::Itertools;
use log::debug;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::model::GraphSnapshot;
use crate::routing::snap::SegmentSnap;
use crate::{SegmentId, VertexId};

/// Node payload of the search graph.
#[derive(Debug, Clone)]
pub enum GraphNode {
    /// A persisted campus vertex.
    Vertex {
        id: VertexId,
        coordinate: Point<f64>,
    },
    /// A per-query origin spliced onto a segment; never persisted.
    Origin {
        segment_id: SegmentId,
        coordinate: Point<f64>,
    },
}

impl GraphNode {
    pub fn coordinate(&self) -> Point<f64> {
        match self {
            Self::Vertex { coordinate, .. } | Self::Origin { coordinate, .. } => *coordinate,
        }
    }
}

/// Undirected, distance-weighted adjacency over one snapshot.
#[derive(Debug, Clone)]
pub struct CampusGraph {
    pub(crate) graph: UnGraph<GraphNode, f64>,
    index: HashMap<VertexId, NodeIndex>,
}

impl CampusGraph {
    /// Builds the adjacency structure from a snapshot. Each open segment
    /// contributes a single undirected edge, traversable at equal cost in
    /// both directions.
    pub fn build(snapshot: &GraphSnapshot) -> Self {
        let vertex_count = snapshot.vertices().len();
        let mut graph = UnGraph::with_capacity(vertex_count, snapshot.segments().len());
        let mut index = HashMap::with_capacity(vertex_count);

        for vertex in snapshot.vertices() {
            let node = graph.add_node(GraphNode::Vertex {
                id: vertex.id.clone(),
                coordinate: vertex.coordinate,
            });
            index.insert(vertex.id.clone(), node);
        }

        for open in snapshot.open_segments() {
            // Endpoints are present by construction of the snapshot join.
            if let (Some(&a), Some(&b)) = (index.get(&open.a.id), index.get(&open.b.id)) {
                graph.add_edge(a, b, open.segment.distance_m);
            }
        }

        debug!(
            "campus graph built: {} vertices, {} open segments",
            graph.node_count(),
            graph.edge_count()
        );

        Self { graph, index }
    }

    /// Node for a persisted vertex id, if present in the snapshot.
    pub fn node(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn node_payload(&self, node: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(node)
    }

    /// Splices a virtual origin at a point projected onto a segment.
    ///
    /// The origin gets two edges, to the segment's endpoints, splitting the
    /// segment's cost at the interpolation parameter. Routing from the exact
    /// projected point avoids the bias of snapping to the nearest endpoint.
    pub fn splice_virtual_origin(&mut self, snap: &SegmentSnap) -> Option<NodeIndex> {
        let a = self.node(&snap.a)?;
        let b = self.node(&snap.b)?;

        let origin = self.graph.add_node(GraphNode::Origin {
            segment_id: snap.segment_id.clone(),
            coordinate: snap.projection.point,
        });
        self.graph
            .add_edge(origin, a, snap.segment_distance_m * snap.projection.t);
        self.graph
            .add_edge(origin, b, snap.segment_distance_m * (1.0 - snap.projection.t));
        Some(origin)
    }

    /// Total weight of a node sequence, or `None` when two consecutive nodes
    /// are not adjacent. The distance reported by the search must match this
    /// sum for the route it returns.
    pub fn path_weight(&self, nodes: &[NodeIndex]) -> Option<f64> {
        nodes
            .iter()
            .tuple_windows()
            .map(|(&a, &b)| self.graph.find_edge(a, b).map(|e| self.graph[e]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use geo::Point;

    use super::*;
    use crate::geomath::project_onto_segment;
    use crate::model::{Segment, Vertex, VertexCategory};

    fn vertex(id: &str, lon: f64, lat: f64) -> Vertex {
        Vertex::new(id, id.to_uppercase(), VertexCategory::Other, Point::new(lon, lat))
    }

    #[test]
    fn blocked_segments_do_not_become_edges() {
        let snapshot = GraphSnapshot::new(
            vec![vertex("a", 0.0, 0.0), vertex("b", 0.001, 0.0)],
            vec![Segment::new("ab", "a", "b", 100.0).blocked()],
        );

        let graph = CampusGraph::build(&snapshot);
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.graph.edge_count(), 0);
    }

    #[test]
    fn isolated_vertices_keep_their_node() {
        let snapshot = GraphSnapshot::new(vec![vertex("lonely", 0.0, 0.0)], vec![]);
        let graph = CampusGraph::build(&snapshot);
        assert!(graph.node("lonely").is_some());
    }

    #[test]
    fn malformed_segments_are_skipped() {
        let snapshot = GraphSnapshot::new(
            vec![vertex("a", 0.0, 0.0), vertex("b", 0.001, 0.0)],
            vec![
                Segment::new("ab", "a", "b", 100.0),
                Segment::new("broken", "a", "missing", 10.0),
            ],
        );

        let graph = CampusGraph::build(&snapshot);
        assert_eq!(graph.graph.edge_count(), 1);
    }

    #[test]
    fn virtual_origin_splits_segment_cost() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0009, 0.0);
        let snapshot = GraphSnapshot::new(
            vec![vertex("a", a.x(), a.y()), vertex("b", b.x(), b.y())],
            vec![Segment::new("ab", "a", "b", 100.0)],
        );
        let mut graph = CampusGraph::build(&snapshot);

        // Point a quarter of the way from a to b, slightly off the line.
        let projection = project_onto_segment(Point::new(0.000225, 0.0001), a, b);
        let snap = SegmentSnap {
            segment_id: "ab".into(),
            a: "a".into(),
            b: "b".into(),
            segment_distance_m: 100.0,
            projection,
        };

        let origin = graph.splice_virtual_origin(&snap).unwrap();
        let to_a = graph.graph.find_edge(origin, graph.node("a").unwrap()).unwrap();
        let to_b = graph.graph.find_edge(origin, graph.node("b").unwrap()).unwrap();
        assert!((graph.graph[to_a] - 25.0).abs() < 1e-6);
        assert!((graph.graph[to_b] - 75.0).abs() < 1e-6);
    }
}
