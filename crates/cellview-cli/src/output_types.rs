//! Serializable payloads for `--json` output

use serde::Serialize;
use tabled::Tabled;

#[derive(Debug, Serialize)]
pub struct InitOutput {
    pub scene_path: String,
}

#[derive(Debug, Serialize)]
pub struct RenderOutput {
    pub output_path: Option<String>,
    pub format: String,
    pub active_sites: usize,
    pub features: usize,
    pub grid_lines: usize,
    pub grid_labels: usize,
    /// [west, south, east, north] coverage bounds, when any sector is active
    pub bounds: Option<Vec<f64>>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct SettingRow {
    #[tabled(rename = "Setting")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct SiteRow {
    #[tabled(rename = "Site")]
    pub index: usize,
    #[tabled(rename = "Enabled")]
    pub enabled: bool,
    #[tabled(rename = "Latitude")]
    pub lat: f64,
    #[tabled(rename = "Longitude")]
    pub lon: f64,
    #[tabled(rename = "Azimuth")]
    pub azimuth_deg: f64,
    #[tabled(rename = "Color")]
    pub color: &'static str,
}

#[derive(Debug, Serialize)]
pub struct InspectOutput {
    pub settings: Vec<SettingRow>,
    pub sites: Vec<SiteRow>,
    pub active_sites: usize,
    pub bounds: Option<Vec<f64>>,
    pub grid_lines: usize,
    pub grid_labels: usize,
}
