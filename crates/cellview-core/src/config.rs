//! Scene configuration: what the surrounding UI holds between renders.
//!
//! Values are layered with the precedence Default < File < Environment < Cli
//! and tracked per value, so `cellview inspect` can show where each setting
//! came from. Validation enforces the input widget bounds before any
//! geometry is computed; the generators themselves accept whatever they are
//! given.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{CellviewError, Result};
use crate::models::{parse_tile_style, TileStyle};

/// Maximum number of configurable sector sites
pub const MAX_SITES: usize = 3;

/// Default BTS location (Santarém district)
pub const DEFAULT_LAT: f64 = 39.2369;
pub const DEFAULT_LON: f64 = -8.6807;
/// Default azimuth of the first site; later sites stagger by 120 degrees
pub const DEFAULT_AZIMUTH_DEG: f64 = 40.0;
pub const DEFAULT_RANGE_KM: f64 = 3.0;
pub const DEFAULT_CELL_SIZE_M: f64 = 500.0;
pub const DEFAULT_GRID_COLOR: &str = "#FFA500";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from a scene file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// One configurable BTS site
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub enabled: bool,
    pub lat: f64,
    pub lon: f64,
    pub azimuth_deg: f64,
}

impl SiteConfig {
    /// Default site at slot `index`: azimuths stagger by 120 degrees and
    /// only the first slot starts enabled
    pub fn default_at(index: usize) -> Self {
        Self {
            enabled: index == 0,
            lat: DEFAULT_LAT,
            lon: DEFAULT_LON,
            azimuth_deg: DEFAULT_AZIMUTH_DEG + index as f64 * 120.0,
        }
    }
}

/// Layered scene configuration
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub tiles: ConfigValue<TileStyle>,
    pub show_grid: ConfigValue<bool>,
    pub cell_size_m: ConfigValue<f64>,
    pub grid_color: ConfigValue<String>,
    /// Radial range shared by every sector
    pub range_km: ConfigValue<f64>,
    /// Up to [`MAX_SITES`] sites; comes from the scene file or the
    /// interactive builder, never from env or flags
    pub sites: Vec<SiteConfig>,
}

impl SceneConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            tiles: ConfigValue::new(TileStyle::Standard, ConfigSource::Default),
            show_grid: ConfigValue::new(false, ConfigSource::Default),
            cell_size_m: ConfigValue::new(DEFAULT_CELL_SIZE_M, ConfigSource::Default),
            grid_color: ConfigValue::new(DEFAULT_GRID_COLOR.to_string(), ConfigSource::Default),
            range_km: ConfigValue::new(DEFAULT_RANGE_KM, ConfigSource::Default),
            sites: vec![SiteConfig::default_at(0)],
        }
    }

    /// Load configuration from a TOML scene file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| CellviewError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(map) = file_config.map {
            if let Some(tiles) = map.tiles {
                self.tiles.update(parse_tile_style(&tiles)?, ConfigSource::File);
            }
        }

        if let Some(grid) = file_config.grid {
            if let Some(show) = grid.show {
                self.show_grid.update(show, ConfigSource::File);
            }
            if let Some(cell_size_m) = grid.cell_size_m {
                self.cell_size_m.update(cell_size_m, ConfigSource::File);
            }
            if let Some(color) = grid.color {
                self.grid_color.update(color, ConfigSource::File);
            }
        }

        if let Some(cells) = file_config.cells {
            if let Some(range_km) = cells.range_km {
                self.range_km.update(range_km, ConfigSource::File);
            }
            if let Some(sites) = cells.site {
                self.sites = sites
                    .into_iter()
                    .map(|s| SiteConfig {
                        enabled: s.enabled.unwrap_or(true),
                        lat: s.lat,
                        lon: s.lon,
                        azimuth_deg: s.azimuth_deg,
                    })
                    .collect();
            }
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // CELLVIEW_TILES
        if let Ok(tiles_str) = env::var("CELLVIEW_TILES") {
            match parse_tile_style(&tiles_str) {
                Ok(tiles) => self.tiles.update(tiles, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CELLVIEW_TILES value '{}': expected standard, satellite, or openstreetmap",
                    tiles_str
                ),
            }
        }

        // CELLVIEW_CELL_SIZE_M
        if let Ok(size_str) = env::var("CELLVIEW_CELL_SIZE_M") {
            match size_str.parse::<f64>() {
                Ok(size) => self.cell_size_m.update(size, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CELLVIEW_CELL_SIZE_M value '{}': expected a size in meters",
                    size_str
                ),
            }
        }

        // CELLVIEW_RANGE_KM
        if let Ok(range_str) = env::var("CELLVIEW_RANGE_KM") {
            match range_str.parse::<f64>() {
                Ok(range) => self.range_km.update(range, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid CELLVIEW_RANGE_KM value '{}': expected a range in kilometers",
                    range_str
                ),
            }
        }

        // CELLVIEW_GRID_COLOR
        if let Ok(color) = env::var("CELLVIEW_GRID_COLOR") {
            self.grid_color.update(color, ConfigSource::Environment);
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(tiles) = overrides.tiles {
            self.tiles.update(tiles, ConfigSource::Cli);
        }

        if let Some(show_grid) = overrides.show_grid {
            self.show_grid.update(show_grid, ConfigSource::Cli);
        }

        if let Some(cell_size_m) = overrides.cell_size_m {
            self.cell_size_m.update(cell_size_m, ConfigSource::Cli);
        }

        if let Some(grid_color) = overrides.grid_color {
            self.grid_color.update(grid_color, ConfigSource::Cli);
        }

        if let Some(range_km) = overrides.range_km {
            self.range_km.update(range_km, ConfigSource::Cli);
        }
    }

    /// Enforce the input widget bounds before the generators run.
    ///
    /// The generators accept any numeric input, so rejecting out-of-range
    /// values is the shell's job and happens here.
    pub fn validate(&self) -> Result<()> {
        if self.sites.len() > MAX_SITES {
            return Err(CellviewError::ConfigInvalid {
                key: "cells.site".to_string(),
                reason: format!("At most {} sites are supported, got {}", MAX_SITES, self.sites.len()),
            });
        }

        for (i, site) in self.sites.iter().enumerate() {
            if !(-90.0..=90.0).contains(&site.lat) {
                return Err(CellviewError::ConfigInvalid {
                    key: format!("cells.site[{}].lat", i),
                    reason: format!("Latitude {} out of range [-90, 90]", site.lat),
                });
            }
            if !(-180.0..=180.0).contains(&site.lon) {
                return Err(CellviewError::ConfigInvalid {
                    key: format!("cells.site[{}].lon", i),
                    reason: format!("Longitude {} out of range [-180, 180]", site.lon),
                });
            }
            if !(0.0..=360.0).contains(&site.azimuth_deg) {
                return Err(CellviewError::ConfigInvalid {
                    key: format!("cells.site[{}].azimuth_deg", i),
                    reason: format!("Azimuth {} out of range [0, 360]", site.azimuth_deg),
                });
            }
        }

        if !(1.0..=20.0).contains(&self.range_km.value) {
            return Err(CellviewError::ConfigInvalid {
                key: "cells.range_km".to_string(),
                reason: format!("Range {} km out of range [1, 20]", self.range_km.value),
            });
        }

        if self.cell_size_m.value <= 0.0 || self.cell_size_m.value > 1000.0 {
            return Err(CellviewError::ConfigInvalid {
                key: "grid.cell_size_m".to_string(),
                reason: format!("Cell size {} m out of range (0, 1000]", self.cell_size_m.value),
            });
        }

        validate_hex_color(&self.grid_color.value)?;

        Ok(())
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("tiles".to_string(), (self.tiles.value.to_string(), self.tiles.source));

        map.insert(
            "show_grid".to_string(),
            (self.show_grid.value.to_string(), self.show_grid.source),
        );

        map.insert(
            "cell_size_m".to_string(),
            (format!("{} m", self.cell_size_m.value), self.cell_size_m.source),
        );

        map.insert(
            "grid_color".to_string(),
            (self.grid_color.value.clone(), self.grid_color.source),
        );

        map.insert(
            "range_km".to_string(),
            (format!("{} km", self.range_km.value), self.range_km.source),
        );

        map
    }
}

/// Configuration loaded from a TOML scene file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    map: Option<MapTable>,
    grid: Option<GridTable>,
    cells: Option<CellsTable>,
}

#[derive(Debug, Deserialize, Serialize)]
struct MapTable {
    tiles: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct GridTable {
    show: Option<bool>,
    cell_size_m: Option<f64>,
    color: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
struct CellsTable {
    range_km: Option<f64>,
    site: Option<Vec<SiteTable>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct SiteTable {
    enabled: Option<bool>,
    lat: f64,
    lon: f64,
    azimuth_deg: f64,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub tiles: Option<TileStyle>,
    pub show_grid: Option<bool>,
    pub cell_size_m: Option<f64>,
    pub grid_color: Option<String>,
    pub range_km: Option<f64>,
}

/// Validate a `#RRGGBB` color string
pub fn validate_hex_color(color: &str) -> Result<()> {
    let valid = color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit());
    if valid {
        Ok(())
    } else {
        Err(CellviewError::ConfigInvalid {
            key: "grid.color".to_string(),
            reason: format!("Invalid color: {}. Use #RRGGBB", color),
        })
    }
}
