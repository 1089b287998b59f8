use serde::{Deserialize, Serialize};

use crate::{SegmentId, VertexId};

/// Accessibility attributes of a segment.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SegmentAccessibility {
    pub stairs: bool,
    pub slope: bool,
    /// Slope grade in percent, 0-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_grade: Option<u8>,
}

/// An undirected walkable connection between two distinct vertices.
///
/// Traversal cost is `distance_m` in both directions. The persistence layer
/// guarantees at most one segment per unordered vertex pair; the core assumes
/// that but does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub a: VertexId,
    pub b: VertexId,
    /// Walking distance in meters, non-negative.
    pub distance_m: f64,
    /// Blocked segments are invisible to routing and snapping.
    #[serde(default)]
    pub blocked: bool,
    #[serde(default)]
    pub accessibility: SegmentAccessibility,
}

impl Segment {
    pub fn new(
        id: impl Into<SegmentId>,
        a: impl Into<VertexId>,
        b: impl Into<VertexId>,
        distance_m: f64,
    ) -> Self {
        Self {
            id: id.into(),
            a: a.into(),
            b: b.into(),
            distance_m,
            blocked: false,
            accessibility: SegmentAccessibility::default(),
        }
    }

    pub fn blocked(mut self) -> Self {
        self.blocked = true;
        self
    }
}
