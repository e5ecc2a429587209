//! Render command: compute the scene and emit GeoJSON or an HTML map

use crate::cli::{RenderArgs, RenderFormat};
use crate::config_loader::load_scene_config;
use crate::html;
use crate::interactive;
use crate::output::OutputWriter;
use crate::output_types::RenderOutput;
use anyhow::{Context, Result};
use cellview_core::config::CliConfigOverrides;
use cellview_core::models::parse_tile_style;
use cellview_core::{export, scene};
use std::fs;

pub fn execute(args: RenderArgs, output: &OutputWriter) -> Result<()> {
    let config = if args.interactive {
        interactive::scene_setup()?
    } else {
        let overrides = CliConfigOverrides {
            tiles: args.tiles.as_deref().map(parse_tile_style).transpose()?,
            show_grid: args.grid_override(),
            cell_size_m: args.cell_size_m,
            grid_color: args.grid_color.clone(),
            range_km: args.range_km,
        };
        load_scene_config(args.config.as_ref(), overrides)?
    };
    config.validate()?;

    let built = scene::build(&config);
    if config.show_grid.value && built.coverage.is_none() {
        output.warning("Grid requested but no active site provides coverage to bound it");
    }

    let fc = export::feature_collection(&built, &config);
    let body = match args.format {
        RenderFormat::Geojson => serde_json::to_string_pretty(&fc)?,
        RenderFormat::Html => html::render_page(&fc, &config)?,
    };

    let grid_lines = built.grid.as_ref().map(|g| g.lines.len()).unwrap_or(0);
    let grid_labels = built.grid.as_ref().map(|g| g.labels.len()).unwrap_or(0);

    match &args.output {
        Some(path) => {
            fs::write(path, &body)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            if output.is_json() {
                output.result(RenderOutput {
                    output_path: Some(path.display().to_string()),
                    format: format!("{:?}", args.format).to_lowercase(),
                    active_sites: built.sectors.len(),
                    features: fc.features.len(),
                    grid_lines,
                    grid_labels,
                    bounds: built.bounds.map(|b| b.to_geojson_bbox()),
                })?;
            } else {
                output.success(format!("Wrote scene to {}", path.display()));
                output.section("Scene");
                output.kv("Active sites", built.sectors.len());
                if let Some(bounds) = built.bounds {
                    output.kv(
                        "Coverage",
                        format!(
                            "({:.4}, {:.4}) to ({:.4}, {:.4})",
                            bounds.min_lat, bounds.min_lon, bounds.max_lat, bounds.max_lon
                        ),
                    );
                }
                if built.grid.is_some() {
                    output.kv("Grid", format!("{} lines, {} labels", grid_lines, grid_labels));
                }
            }
        }
        None => {
            // The document itself is the output.
            println!("{}", body);
        }
    }

    Ok(())
}
