//! Pedestrian routing over a campus path network.
//!
//! The crate computes minimum-distance walking routes between named campus
//! locations. Callers that only know a raw GPS position can have it resolved
//! onto the network first: the position snaps to the nearest vertex when one
//! is close enough, or to the nearest point along an open path segment, in
//! which case routing originates from that exact projected point.
//!
//! All computation is a pure function of a [`model::GraphSnapshot`] supplied
//! by the caller. The crate holds no state between calls, performs no I/O and
//! never mutates the snapshot; persistence, authorization and presentation
//! belong to the surrounding service.
//!
//! ```
//! use campus_routing::prelude::*;
//! use geo::Point;
//!
//! let snapshot = GraphSnapshot::new(
//!     vec![
//!         Vertex::new("a", "Library", VertexCategory::Building, Point::new(0.0, 0.0)),
//!         Vertex::new("b", "Fountain", VertexCategory::Landmark, Point::new(0.0009, 0.0)),
//!     ],
//!     vec![Segment::new("ab", "a", "b", 100.0)],
//! );
//!
//! let query = RouteQuery::between("a", "b");
//! let route = find_route(&snapshot, &query).unwrap();
//! assert_eq!(route.total_distance_m, 100.0);
//! ```

pub mod error;
pub mod geomath;
pub mod graph;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::RoutingError;
pub use model::GraphSnapshot;
pub use routing::{RouteQuery, RouteResult, find_route};

/// Stable identifier of a campus vertex, assigned by the persistence layer.
pub type VertexId = String;

/// Stable identifier of a path segment, assigned by the persistence layer.
pub type SegmentId = String;

/// Maximum distance at which a raw coordinate is considered to be "at" a
/// vertex, in meters.
pub const VERTEX_SNAP_RADIUS_M: f64 = 40.0;

/// Maximum distance at which a raw coordinate is considered to lie "on" a
/// segment, in meters.
pub const SEGMENT_SNAP_RADIUS_M: f64 = 120.0;
