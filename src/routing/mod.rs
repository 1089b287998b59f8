//! Route computation: shortest-path search, coordinate snapping and the
//! orchestration that ties them together.

pub mod dijkstra;
mod route;
pub mod snap;
mod to_geojson;

pub use dijkstra::{PathFound, shortest_path};
pub use route::{RouteQuery, RouteResult, RouteStep, StartSnap, find_route};
pub use snap::{SegmentSnap, SnapResolution, SnapThresholds, resolve_coordinate};
