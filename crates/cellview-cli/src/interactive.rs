//! Interactive scene builder: every scene setting as a guided prompt.

use anyhow::Result;
use cellview_core::config::{
    ConfigSource, ConfigValue, SceneConfig, SiteConfig, MAX_SITES,
};
use cellview_core::models::TileStyle;
use dialoguer::{Confirm, Input, Select};

/// Build a scene configuration from prompts.
///
/// Prompted values take CLI precedence: the interactive session stands in
/// for flags, not for the scene file.
pub fn scene_setup() -> Result<SceneConfig> {
    println!("\nCellview Scene Setup\n");

    // Base map
    let tile_options = vec![
        "standard - CartoDB Positron (muted default)",
        "satellite - Esri WorldImagery",
        "openstreetmap - OpenStreetMap standard tiles",
    ];
    let tile_selection = Select::new()
        .with_prompt("Base map tile style")
        .items(&tile_options)
        .default(0)
        .interact()?;
    let tiles = match tile_selection {
        1 => TileStyle::Satellite,
        2 => TileStyle::OpenStreetMap,
        _ => TileStyle::Standard,
    };

    // Grid overlay
    let show_grid = Confirm::new()
        .with_prompt("Overlay the labeled reference grid?")
        .default(false)
        .interact()?;

    let (cell_size_m, grid_color) = if show_grid {
        let cell_size_m: f64 = Input::new()
            .with_prompt("Grid cell size in meters (up to 1000)")
            .default(500.0)
            .interact()?;
        let grid_color: String = Input::new()
            .with_prompt("Grid color (#RRGGBB)")
            .default("#FFA500".to_string())
            .interact()?;
        (cell_size_m, grid_color)
    } else {
        (500.0, "#FFA500".to_string())
    };

    // Shared sector range
    let range_km: f64 = Input::new()
        .with_prompt("Sector range in kilometers (1 to 20)")
        .default(3.0)
        .interact()?;

    // Sites
    let mut sites = Vec::with_capacity(MAX_SITES);
    for index in 0..MAX_SITES {
        let defaults = SiteConfig::default_at(index);
        let enabled = Confirm::new()
            .with_prompt(format!("Enable cell {}?", index + 1))
            .default(defaults.enabled)
            .interact()?;
        if !enabled {
            sites.push(SiteConfig { enabled: false, ..defaults });
            continue;
        }

        let lat: f64 = Input::new()
            .with_prompt(format!("Cell {} latitude", index + 1))
            .default(defaults.lat)
            .interact()?;
        let lon: f64 = Input::new()
            .with_prompt(format!("Cell {} longitude", index + 1))
            .default(defaults.lon)
            .interact()?;
        let azimuth_deg: f64 = Input::new()
            .with_prompt(format!("Cell {} azimuth (0 to 360)", index + 1))
            .default(defaults.azimuth_deg)
            .interact()?;

        sites.push(SiteConfig { enabled: true, lat, lon, azimuth_deg });
    }

    // Confirmation
    println!("\nScene Summary\n");
    println!("  Tiles:       {}", tiles);
    println!("  Grid:        {}", if show_grid {
        format!("{} m cells, {}", cell_size_m, grid_color)
    } else {
        "off".to_string()
    });
    println!("  Range:       {} km", range_km);
    for (i, site) in sites.iter().enumerate() {
        if site.enabled {
            println!(
                "  Cell {}:      {}, {} @ {} deg",
                i + 1,
                site.lat,
                site.lon,
                site.azimuth_deg
            );
        } else {
            println!("  Cell {}:      off", i + 1);
        }
    }
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Render with these settings?")
        .default(true)
        .interact()?;

    if !confirmed {
        anyhow::bail!("Scene setup cancelled");
    }

    let mut config = SceneConfig::with_defaults();
    config.tiles = ConfigValue::new(tiles, ConfigSource::Cli);
    config.show_grid = ConfigValue::new(show_grid, ConfigSource::Cli);
    config.cell_size_m = ConfigValue::new(cell_size_m, ConfigSource::Cli);
    config.grid_color = ConfigValue::new(grid_color, ConfigSource::Cli);
    config.range_km = ConfigValue::new(range_km, ConfigSource::Cli);
    config.sites = sites;
    Ok(config)
}
