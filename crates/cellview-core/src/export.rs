//! GeoJSON export of a rendered scene.
//!
//! The feature collection carries every map element with its styling
//! attached as properties, so any GeoJSON-aware renderer (or the bundled
//! Leaflet page) can reproduce the look. GeoJSON positions are
//! longitude-first.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::config::SceneConfig;
use crate::models::{GeoLine, GeoPoint};
use crate::scene::Scene;

/// Feature `kind` property values
pub const KIND_SITE: &str = "site";
pub const KIND_SECTOR: &str = "sector";
pub const KIND_GRID_LINE: &str = "grid-line";
pub const KIND_GRID_LABEL: &str = "grid-label";
pub const KIND_PERIMETER: &str = "perimeter";

/// Build the feature collection for a scene.
///
/// Features follow the draw order: site markers and sector wedges first,
/// then grid lines, labels, and the perimeter. The collection bbox is the
/// coverage bounds the viewport fits to, when coverage exists.
pub fn feature_collection(scene: &Scene, config: &SceneConfig) -> FeatureCollection {
    let mut features = Vec::new();

    for sector in &scene.sectors {
        let apex = sector.spec.apex;
        features.push(point_feature(
            apex,
            props(vec![
                ("kind", json!(KIND_SITE)),
                ("name", json!(format!("BTS {}, {}", apex.lat, apex.lon))),
                ("color", json!(sector.color)),
            ]),
        ));

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::Polygon(vec![ring_positions(&sector.ring)]))),
            id: None,
            properties: Some(props(vec![
                ("kind", json!(KIND_SECTOR)),
                ("color", json!(sector.color)),
                ("fill-opacity", json!(0.3)),
            ])),
            foreign_members: None,
        });
    }

    if let Some(grid) = &scene.grid {
        let color = config.grid_color.value.as_str();

        for line in &grid.lines {
            features.push(line_feature(
                line,
                props(vec![
                    ("kind", json!(KIND_GRID_LINE)),
                    ("color", json!(color)),
                    ("weight", json!(2)),
                    ("opacity", json!(0.9)),
                ]),
            ));
        }

        for label in &grid.labels {
            features.push(point_feature(
                label.anchor,
                props(vec![
                    ("kind", json!(KIND_GRID_LABEL)),
                    ("label", json!(label.text)),
                    ("color", json!(color)),
                ]),
            ));
        }

        features.push(Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(
                grid.perimeter.iter().map(GeoPoint::position).collect(),
            ))),
            id: None,
            properties: Some(props(vec![
                ("kind", json!(KIND_PERIMETER)),
                ("color", json!(color)),
                ("weight", json!(4)),
                ("opacity", json!(1.0)),
            ])),
            foreign_members: None,
        });
    }

    FeatureCollection {
        bbox: scene.bounds.map(|b| b.to_geojson_bbox()),
        features,
        foreign_members: None,
    }
}

/// Feature collection for a single stand-alone grid (the `grid` subcommand)
pub fn grid_feature_collection(grid: &crate::models::Grid, color: &str) -> FeatureCollection {
    let scene = Scene {
        sectors: Vec::new(),
        coverage: None,
        bounds: None,
        grid: Some(grid.clone()),
    };
    let mut config = SceneConfig::with_defaults();
    config.grid_color.value = color.to_string();
    feature_collection(&scene, &config)
}

/// A single sector ring as a stand-alone feature (the `sector` subcommand)
pub fn sector_feature(ring: &[GeoPoint], color: &str) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Polygon(vec![ring_positions(ring)]))),
        id: None,
        properties: Some(props(vec![
            ("kind", json!(KIND_SECTOR)),
            ("color", json!(color)),
            ("fill-opacity", json!(0.3)),
        ])),
        foreign_members: None,
    }
}

fn point_feature(point: GeoPoint, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(point.position()))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn line_feature(line: &GeoLine, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::LineString(vec![
            line.start.position(),
            line.end.position(),
        ]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

fn ring_positions(ring: &[GeoPoint]) -> Vec<Vec<f64>> {
    let mut positions: Vec<Vec<f64>> = ring.iter().map(GeoPoint::position).collect();
    // GeoJSON rings are explicitly closed.
    if let (Some(first), Some(last)) = (positions.first(), positions.last()) {
        if first != last {
            positions.push(first.clone());
        }
    }
    positions
}

fn props(pairs: Vec<(&str, serde_json::Value)>) -> JsonObject {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}
