//! `GeoJSON` export of computed routes, for map display.

use geo::{Coord, LineString};
use geojson::{Feature, FeatureCollection, Geometry};
use serde_json::{Map, Value as JsonValue, json};

use crate::routing::route::{RouteResult, RouteStep};

impl RouteResult {
    /// Converts the route to a `GeoJSON` `FeatureCollection`: one LineString
    /// for the walked geometry plus one Point per step.
    pub fn to_geojson(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.steps.len() + 1);

        let line: LineString<f64> = self
            .steps
            .iter()
            .map(|step| {
                let p = step.coordinate();
                Coord { x: p.x(), y: p.y() }
            })
            .collect();

        let mut properties = Map::new();
        properties.insert("total_distance_m".to_string(), json!(self.total_distance_m));
        properties.insert("steps".to_string(), json!(self.steps.len()));
        features.push(feature(Geometry::new((&line).into()), properties));

        for step in &self.steps {
            let p = step.coordinate();
            let geometry = Geometry::new((&geo::Point::new(p.x(), p.y())).into());
            features.push(feature(geometry, step_properties(step)));
        }

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

fn feature(geometry: Geometry, properties: Map<String, JsonValue>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn step_properties(step: &RouteStep) -> Map<String, JsonValue> {
    let mut properties = Map::new();
    match step {
        RouteStep::Vertex {
            id, name, category, ..
        } => {
            properties.insert("kind".to_string(), json!("vertex"));
            properties.insert("id".to_string(), json!(id));
            properties.insert("name".to_string(), json!(name));
            properties.insert("category".to_string(), json!(category));
        }
        RouteStep::Origin { segment_id, .. } => {
            properties.insert("kind".to_string(), json!("origin"));
            properties.insert("segment_id".to_string(), json!(segment_id));
        }
    }
    properties
}
