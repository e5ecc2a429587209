//! Value types shared across the cellview crates.
//!
//! Everything here is a transient value recomputed per render pass; there is
//! no stored identity and no mutable state. Coordinates are WGS 84 decimal
//! degrees, latitude first, matching the map-facing convention. Conversions
//! to the `geo` crate (x = longitude, y = latitude) live here so the
//! computational modules can lean on its algorithms.

use serde::{Deserialize, Serialize};

use crate::error::{CellviewError, Result};

/// A (latitude, longitude) pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// GeoJSON position, longitude first
    pub fn position(&self) -> Vec<f64> {
        vec![self.lon, self.lat]
    }
}

impl From<GeoPoint> for geo::Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        geo::Coord { x: p.lon, y: p.lat }
    }
}

impl From<geo::Coord<f64>> for GeoPoint {
    fn from(c: geo::Coord<f64>) -> Self {
        Self { lat: c.y, lon: c.x }
    }
}

/// One horizontal or vertical grid line spanning the covered area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLine {
    pub start: GeoPoint,
    pub end: GeoPoint,
}

impl GeoLine {
    pub fn new(start: GeoPoint, end: GeoPoint) -> Self {
        Self { start, end }
    }
}

/// Geographic bounding box in decimal degrees.
///
/// Degenerate boxes (min >= max on either axis) are representable; downstream
/// consumers produce empty output for them rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self { min_lat, min_lon, max_lat, max_lon }
    }

    /// Latitude midway between the box edges, where the longitude step of a
    /// grid is evaluated
    pub fn mid_lat(&self) -> f64 {
        (self.min_lat + self.max_lat) / 2.0
    }

    /// GeoJSON bbox member, [west, south, east, north]
    pub fn to_geojson_bbox(&self) -> Vec<f64> {
        vec![self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}

impl From<geo::Rect<f64>> for BoundingBox {
    fn from(rect: geo::Rect<f64>) -> Self {
        Self {
            min_lat: rect.min().y,
            min_lon: rect.min().x,
            max_lat: rect.max().y,
            max_lon: rect.max().x,
        }
    }
}

/// Immutable input to sector generation: one directional antenna wedge
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectorSpec {
    /// BTS location, the wedge apex
    pub apex: GeoPoint,
    /// Compass direction the sector points toward, degrees clockwise from north
    pub bearing_deg: f64,
    /// Angular width of the wedge in degrees
    pub aperture_deg: f64,
    /// Radial range in kilometers
    pub range_km: f64,
}

impl SectorSpec {
    pub fn new(apex: GeoPoint, bearing_deg: f64, range_km: f64) -> Self {
        Self { apex, bearing_deg, aperture_deg: crate::sector::DEFAULT_APERTURE_DEG, range_km }
    }

    pub fn with_aperture(mut self, aperture_deg: f64) -> Self {
        self.aperture_deg = aperture_deg;
        self
    }
}

/// A cell label paired with its anchor near the cell's visual center
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridCellLabel {
    pub anchor: GeoPoint,
    pub text: String,
}

/// Output of grid generation: lines, labels, and the bounding perimeter ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub lines: Vec<GeoLine>,
    pub labels: Vec<GridCellLabel>,
    /// 5-point closed ring over the bounding box corners
    pub perimeter: Vec<GeoPoint>,
}

/// Base-map tile style, one of a fixed set of supported tile servers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TileStyle {
    /// CartoDB Positron, the muted default
    #[default]
    Standard,
    /// Esri WorldImagery
    Satellite,
    /// OpenStreetMap standard tiles
    OpenStreetMap,
}

impl TileStyle {
    /// Tile server URL template for Leaflet
    pub fn url_template(&self) -> &'static str {
        match self {
            TileStyle::Standard => "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png",
            TileStyle::Satellite => {
                "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{z}/{y}/{x}"
            }
            TileStyle::OpenStreetMap => "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        }
    }

    pub fn attribution(&self) -> &'static str {
        match self {
            TileStyle::Standard => "&copy; OpenStreetMap contributors &copy; CARTO",
            TileStyle::Satellite => "Tiles &copy; Esri",
            TileStyle::OpenStreetMap => "&copy; OpenStreetMap contributors",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TileStyle::Standard => "standard",
            TileStyle::Satellite => "satellite",
            TileStyle::OpenStreetMap => "openstreetmap",
        }
    }
}

impl std::fmt::Display for TileStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a tile style from a config or CLI string
pub fn parse_tile_style(s: &str) -> Result<TileStyle> {
    match s.to_lowercase().as_str() {
        "standard" | "carto" | "positron" => Ok(TileStyle::Standard),
        "satellite" | "esri" => Ok(TileStyle::Satellite),
        "openstreetmap" | "osm" => Ok(TileStyle::OpenStreetMap),
        _ => Err(CellviewError::ConfigInvalid {
            key: "tiles".to_string(),
            reason: format!("Invalid tile style: {}. Use standard, satellite, or openstreetmap", s),
        }),
    }
}
