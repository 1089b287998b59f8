use hashbrown::HashMap;
use log::trace;

use super::{Segment, Vertex};
use crate::VertexId;

/// Immutable view of the campus network for one route computation.
///
/// Built fresh from the store for every request, so edits (new vertices,
/// blocked segments) are visible to the very next computation without any
/// invalidation logic. The core never mutates or persists a snapshot.
#[derive(Debug, Clone)]
pub struct GraphSnapshot {
    vertices: Vec<Vertex>,
    segments: Vec<Segment>,
    by_id: HashMap<VertexId, usize>,
}

/// A non-blocked segment with both endpoint vertices resolved.
#[derive(Debug, Clone, Copy)]
pub struct OpenSegment<'a> {
    pub segment: &'a Segment,
    pub a: &'a Vertex,
    pub b: &'a Vertex,
}

impl GraphSnapshot {
    pub fn new(vertices: Vec<Vertex>, segments: Vec<Segment>) -> Self {
        let by_id = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.id.clone(), i))
            .collect();
        Self {
            vertices,
            segments,
            by_id,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.by_id.get(id).map(|&i| &self.vertices[i])
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Non-blocked segments whose endpoints both exist in the snapshot.
    ///
    /// Segments referencing an unknown vertex are skipped rather than failing
    /// the whole computation; the authoritative integrity check lives in the
    /// persistence layer.
    pub fn open_segments(&self) -> impl Iterator<Item = OpenSegment<'_>> {
        self.segments
            .iter()
            .filter(|s| !s.blocked)
            .filter_map(|segment| {
                match (self.vertex(&segment.a), self.vertex(&segment.b)) {
                    (Some(a), Some(b)) => Some(OpenSegment { segment, a, b }),
                    _ => {
                        trace!(
                            "skipping segment {} with dangling endpoint ({} - {})",
                            segment.id, segment.a, segment.b
                        );
                        None
                    }
                }
            })
    }
}
