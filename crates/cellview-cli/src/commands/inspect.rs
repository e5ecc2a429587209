//! Inspect command: effective configuration and scene summary

use crate::cli::InspectArgs;
use crate::config_loader::load_scene_config;
use crate::output::OutputWriter;
use crate::output_types::{InspectOutput, SettingRow, SiteRow};
use anyhow::Result;
use cellview_core::config::CliConfigOverrides;
use cellview_core::scene::{self, SECTOR_COLORS};

pub fn execute(args: InspectArgs, output: &OutputWriter) -> Result<()> {
    let config = load_scene_config(args.config.as_ref(), CliConfigOverrides::default())?;
    config.validate()?;

    let mut settings: Vec<SettingRow> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| SettingRow {
            key,
            value,
            source: format!("{:?}", source),
        })
        .collect();
    settings.sort_by(|a, b| a.key.cmp(&b.key));

    let sites: Vec<SiteRow> = config
        .sites
        .iter()
        .enumerate()
        .map(|(index, site)| SiteRow {
            index: index + 1,
            enabled: site.enabled,
            lat: site.lat,
            lon: site.lon,
            azimuth_deg: site.azimuth_deg,
            color: SECTOR_COLORS[index % SECTOR_COLORS.len()],
        })
        .collect();

    let built = scene::build(&config);
    let grid_lines = built.grid.as_ref().map(|g| g.lines.len()).unwrap_or(0);
    let grid_labels = built.grid.as_ref().map(|g| g.labels.len()).unwrap_or(0);

    if output.is_json() {
        output.result(InspectOutput {
            settings,
            sites,
            active_sites: built.sectors.len(),
            bounds: built.bounds.map(|b| b.to_geojson_bbox()),
            grid_lines,
            grid_labels,
        })?;
        return Ok(());
    }

    output.section("Configuration");
    output.table(settings);

    output.section("Sites");
    output.table(sites);

    output.section("Scene");
    output.kv("Active sites", built.sectors.len());
    match built.bounds {
        Some(bounds) => output.kv(
            "Coverage",
            format!(
                "({:.4}, {:.4}) to ({:.4}, {:.4})",
                bounds.min_lat, bounds.min_lon, bounds.max_lat, bounds.max_lon
            ),
        ),
        None => output.kv("Coverage", "none"),
    }
    if config.show_grid.value {
        output.kv("Grid", format!("{} lines, {} labels", grid_lines, grid_labels));
    } else {
        output.kv("Grid", "off");
    }

    Ok(())
}
