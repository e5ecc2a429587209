//! Integration tests for the full render pipeline:
//! scene file -> config -> scene -> GeoJSON.

use std::io::Write;

use cellview_core::config::SceneConfig;
use cellview_core::export::{self, KIND_GRID_LABEL, KIND_SECTOR, KIND_SITE};
use cellview_core::scene;
use tempfile::NamedTempFile;

fn scene_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_full_pipeline_from_scene_file() {
    let file = scene_file(
        r#"
[map]
tiles = "openstreetmap"

[grid]
show = true
cell_size_m = 500.0

[cells]
range_km = 3.0

[[cells.site]]
lat = 39.2369
lon = -8.6807
azimuth_deg = 40.0

[[cells.site]]
lat = 39.2369
lon = -8.6807
azimuth_deg = 160.0
"#,
    );

    let config = SceneConfig::with_defaults().load_from_file(file.path()).unwrap();
    config.validate().unwrap();

    let built = scene::build(&config);
    assert_eq!(built.sectors.len(), 2);
    assert!(built.coverage.is_some());
    assert!(built.grid.is_some());

    let fc = export::feature_collection(&built, &config);
    let json = serde_json::to_string(&fc).unwrap();

    // The output must survive a GeoJSON round trip.
    let parsed: geojson::GeoJson = json.parse().unwrap();
    match parsed {
        geojson::GeoJson::FeatureCollection(parsed_fc) => {
            assert_eq!(parsed_fc.features.len(), fc.features.len());
        }
        other => panic!("Expected FeatureCollection, got {:?}", other),
    }
}

#[test]
fn test_pipeline_is_idempotent() {
    let mut config = SceneConfig::with_defaults();
    config.show_grid.value = true;

    let first =
        serde_json::to_string(&export::feature_collection(&scene::build(&config), &config))
            .unwrap();
    let second =
        serde_json::to_string(&export::feature_collection(&scene::build(&config), &config))
            .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_grid_labels_start_at_a1_top_left() {
    let mut config = SceneConfig::with_defaults();
    config.show_grid.value = true;
    let built = scene::build(&config);
    let fc = export::feature_collection(&built, &config);

    let labels: Vec<(&str, Vec<f64>)> = fc
        .features
        .iter()
        .filter(|f| {
            f.properties.as_ref().and_then(|p| p.get("kind")).and_then(|k| k.as_str())
                == Some(KIND_GRID_LABEL)
        })
        .map(|f| {
            let text = f
                .properties
                .as_ref()
                .and_then(|p| p.get("label"))
                .and_then(|l| l.as_str())
                .unwrap();
            let pos = match &f.geometry {
                Some(geojson::Geometry { value: geojson::Value::Point(pos), .. }) => pos.clone(),
                other => panic!("Expected Point for label, got {:?}", other),
            };
            (text, pos)
        })
        .collect();

    assert!(!labels.is_empty());
    assert_eq!(labels[0].0, "A1");

    // "A1" anchors at the north-west corner of the labeled cells.
    let (a1_lon, a1_lat) = (labels[0].1[0], labels[0].1[1]);
    for (_, pos) in &labels[1..] {
        assert!(pos[1] <= a1_lat + 1e-12);
        assert!(pos[0] >= a1_lon - 1e-12 || pos[1] < a1_lat - 1e-12);
    }
}

#[test]
fn test_sector_count_drives_feature_count() {
    let file = scene_file(
        r#"
[[cells.site]]
lat = 39.0
lon = -8.0
azimuth_deg = 0.0

[[cells.site]]
enabled = false
lat = 39.1
lon = -8.1
azimuth_deg = 120.0

[[cells.site]]
lat = 39.2
lon = -8.2
azimuth_deg = 240.0
"#,
    );

    let config = SceneConfig::with_defaults().load_from_file(file.path()).unwrap();
    let built = scene::build(&config);
    let fc = export::feature_collection(&built, &config);

    let count = |kind: &str| {
        fc.features
            .iter()
            .filter(|f| {
                f.properties.as_ref().and_then(|p| p.get("kind")).and_then(|k| k.as_str())
                    == Some(kind)
            })
            .count()
    };

    // Two enabled sites, one marker and one wedge each.
    assert_eq!(count(KIND_SITE), 2);
    assert_eq!(count(KIND_SECTOR), 2);
}
