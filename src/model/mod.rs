//! Data model for campus routing.
//!
//! Vertices and segments are owned by the persistence layer; the core only
//! ever sees an immutable snapshot of them, taken per request.

pub mod segment;
pub mod snapshot;
pub mod vertex;

pub use segment::{Segment, SegmentAccessibility};
pub use snapshot::{GraphSnapshot, OpenSegment};
pub use vertex::{Vertex, VertexAccessibility, VertexCategory};
