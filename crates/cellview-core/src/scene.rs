//! Scene assembly: one full render pass over the current configuration.
//!
//! Every pass rebuilds all active sector polygons, unions them into the
//! coverage area, and regenerates the grid. Nothing is cached between
//! passes; `build` is a pure function of the configuration, so re-rendering
//! identical inputs yields identical scenes.

use geo::MultiPolygon;
use tracing::debug;

use crate::config::SceneConfig;
use crate::coverage::{coverage_bounds, union_sectors};
use crate::grid::generate_grid;
use crate::models::{BoundingBox, GeoPoint, Grid, SectorSpec};

/// Fixed sector colors by site index
pub const SECTOR_COLORS: [&str; 3] = ["blue", "red", "green"];

/// One active sector, ready to render
#[derive(Debug, Clone)]
pub struct SectorRender {
    /// Index of the originating site slot (fixes the color)
    pub site_index: usize,
    pub spec: SectorSpec,
    pub color: &'static str,
    pub ring: Vec<GeoPoint>,
}

/// Everything one render pass produces
#[derive(Debug, Clone)]
pub struct Scene {
    pub sectors: Vec<SectorRender>,
    pub coverage: Option<MultiPolygon<f64>>,
    pub bounds: Option<BoundingBox>,
    pub grid: Option<Grid>,
}

/// Build the scene for the given configuration.
///
/// Disabled sites are skipped entirely; with no active site the scene is
/// empty but still renderable (no coverage, no grid). The grid is generated
/// only when enabled and some coverage exists to bound it.
pub fn build(config: &SceneConfig) -> Scene {
    let mut sectors = Vec::new();
    for (index, site) in config.sites.iter().enumerate() {
        if !site.enabled {
            continue;
        }
        let spec = SectorSpec::new(
            GeoPoint::new(site.lat, site.lon),
            site.azimuth_deg,
            config.range_km.value,
        );
        sectors.push(SectorRender {
            site_index: index,
            spec,
            color: SECTOR_COLORS[index % SECTOR_COLORS.len()],
            ring: spec.ring(),
        });
    }

    let rings: Vec<Vec<GeoPoint>> = sectors.iter().map(|s| s.ring.clone()).collect();
    let coverage = union_sectors(&rings);
    let bounds = coverage.as_ref().and_then(coverage_bounds);

    let grid = match (config.show_grid.value, bounds) {
        (true, Some(bounds)) => Some(generate_grid(bounds, config.cell_size_m.value)),
        _ => None,
    };

    debug!(
        sectors = sectors.len(),
        has_coverage = coverage.is_some(),
        grid_lines = grid.as_ref().map(|g| g.lines.len()).unwrap_or(0),
        "scene built"
    );

    Scene { sectors, coverage, bounds, grid }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::sector::ARC_SAMPLES;

    #[test]
    fn test_default_scene_has_one_sector_no_grid() {
        let config = SceneConfig::with_defaults();
        let scene = build(&config);

        assert_eq!(scene.sectors.len(), 1);
        assert_eq!(scene.sectors[0].color, "blue");
        assert_eq!(scene.sectors[0].ring.len(), ARC_SAMPLES + 1);
        assert!(scene.coverage.is_some());
        assert!(scene.bounds.is_some());
        assert!(scene.grid.is_none());
    }

    #[test]
    fn test_grid_follows_coverage_bounds() {
        let mut config = SceneConfig::with_defaults();
        config.show_grid.value = true;
        let scene = build(&config);

        let grid = scene.grid.expect("grid enabled with coverage");
        assert!(!grid.lines.is_empty());
        assert!(!grid.labels.is_empty());

        let bounds = scene.bounds.unwrap();
        assert_eq!(grid.perimeter[0], GeoPoint::new(bounds.min_lat, bounds.min_lon));
    }

    #[test]
    fn test_disabled_sites_are_skipped() {
        let mut config = SceneConfig::with_defaults();
        config.sites = vec![
            SiteConfig { enabled: false, ..SiteConfig::default_at(0) },
            SiteConfig { enabled: true, ..SiteConfig::default_at(1) },
        ];
        let scene = build(&config);

        assert_eq!(scene.sectors.len(), 1);
        assert_eq!(scene.sectors[0].site_index, 1);
        // Colors stay bound to the site slot, not the render order.
        assert_eq!(scene.sectors[0].color, "red");
    }

    #[test]
    fn test_empty_scene_is_renderable() {
        let mut config = SceneConfig::with_defaults();
        config.sites[0].enabled = false;
        config.show_grid.value = true;
        let scene = build(&config);

        assert!(scene.sectors.is_empty());
        assert!(scene.coverage.is_none());
        assert!(scene.bounds.is_none());
        // No coverage means nothing to fit a grid to.
        assert!(scene.grid.is_none());
    }

    #[test]
    fn test_three_sites_one_coverage() {
        let mut config = SceneConfig::with_defaults();
        config.sites = (0..3)
            .map(|i| SiteConfig { enabled: true, ..SiteConfig::default_at(i) })
            .collect();
        let scene = build(&config);

        assert_eq!(scene.sectors.len(), 3);
        let colors: Vec<&str> = scene.sectors.iter().map(|s| s.color).collect();
        assert_eq!(colors, vec!["blue", "red", "green"]);
        assert!(scene.coverage.is_some());
    }

    #[test]
    fn test_build_is_idempotent() {
        let mut config = SceneConfig::with_defaults();
        config.show_grid.value = true;

        let a = build(&config);
        let b = build(&config);

        assert_eq!(a.sectors.len(), b.sectors.len());
        for (sa, sb) in a.sectors.iter().zip(b.sectors.iter()) {
            assert_eq!(sa.ring, sb.ring);
        }
        assert_eq!(a.bounds, b.bounds);
        assert_eq!(a.grid, b.grid);
    }
}
