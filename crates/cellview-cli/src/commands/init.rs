//! Init command: write a commented starter scene file

use crate::cli::InitArgs;
use crate::output::OutputWriter;
use crate::output_types::InitOutput;
use anyhow::{bail, Context, Result};
use cellview_core::config::{
    SiteConfig, DEFAULT_CELL_SIZE_M, DEFAULT_GRID_COLOR, DEFAULT_RANGE_KM,
};
use std::fs;

pub fn execute(args: InitArgs, output: &OutputWriter) -> Result<()> {
    if args.path.exists() && !args.force {
        bail!(
            "Scene file already exists at {}. Use --force to overwrite",
            args.path.display()
        );
    }

    let site1 = SiteConfig::default_at(0);
    let site2 = SiteConfig::default_at(1);
    let site3 = SiteConfig::default_at(2);

    let scene_toml = format!(
        r#"# cellview scene configuration

[map]
# Base map tile style
# Options: "standard" (CartoDB Positron), "satellite" (Esri WorldImagery), "openstreetmap"
tiles = "standard"

[grid]
# Overlay the labeled reference grid over the covered area
show = false
# Grid cell size in meters, up to 1000
cell_size_m = {cell_size}
# Grid line and label color
color = "{grid_color}"

[cells]
# Radial range in kilometers shared by all sectors, 1 to 20
range_km = {range_km}

# Up to three sector sites; azimuth in degrees clockwise from north
[[cells.site]]
enabled = true
lat = {lat}
lon = {lon}
azimuth_deg = {az1}

[[cells.site]]
enabled = false
lat = {lat}
lon = {lon}
azimuth_deg = {az2}

[[cells.site]]
enabled = false
lat = {lat}
lon = {lon}
azimuth_deg = {az3}
"#,
        cell_size = DEFAULT_CELL_SIZE_M,
        grid_color = DEFAULT_GRID_COLOR,
        range_km = DEFAULT_RANGE_KM,
        lat = site1.lat,
        lon = site1.lon,
        az1 = site1.azimuth_deg,
        az2 = site2.azimuth_deg,
        az3 = site3.azimuth_deg,
    );

    fs::write(&args.path, scene_toml)
        .with_context(|| format!("Failed to write {}", args.path.display()))?;

    if output.is_json() {
        output.result(InitOutput { scene_path: args.path.display().to_string() })?;
    } else {
        output.success(format!("Wrote starter scene to {}", args.path.display()));
        output.info(format!("Render it with: cellview render {}", args.path.display()));
    }

    Ok(())
}
