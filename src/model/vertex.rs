use geo::Point;
use serde::{Deserialize, Serialize};

use crate::VertexId;

/// Kind of location a vertex represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VertexCategory {
    #[default]
    Building,
    Intersection,
    Entrance,
    Exit,
    Landmark,
    Other,
}

/// Accessibility attributes of a vertex.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VertexAccessibility {
    pub wheelchair: bool,
    pub visually_impaired: bool,
}

impl Default for VertexAccessibility {
    fn default() -> Self {
        Self {
            wheelchair: true,
            visually_impaired: false,
        }
    }
}

/// A named campus location with a geographic coordinate.
///
/// Read-only to the core; created, updated and deleted by the external CRUD
/// layer. `name` is unique across the campus, as is `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
    #[serde(default)]
    pub category: VertexCategory,
    /// Position as lon/lat (`x` = longitude, `y` = latitude).
    pub coordinate: Point<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub accessibility: VertexAccessibility,
}

impl Vertex {
    pub fn new(
        id: impl Into<VertexId>,
        name: impl Into<String>,
        category: VertexCategory,
        coordinate: Point<f64>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            coordinate,
            description: None,
            accessibility: VertexAccessibility::default(),
        }
    }
}
