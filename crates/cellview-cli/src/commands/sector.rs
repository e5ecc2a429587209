//! Sector command: one stand-alone coverage wedge

use crate::cli::SectorArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use cellview_core::config::{SceneConfig, SiteConfig};
use cellview_core::export;
use cellview_core::models::GeoPoint;
use cellview_core::scene::SECTOR_COLORS;
use cellview_core::sector::generate_sector;
use std::fs;

pub fn execute(args: SectorArgs, output: &OutputWriter) -> Result<()> {
    // Reuse the scene validation so the one-off surface enforces the same
    // widget bounds as a configured site.
    let mut config = SceneConfig::with_defaults();
    config.sites = vec![SiteConfig {
        enabled: true,
        lat: args.lat,
        lon: args.lon,
        azimuth_deg: args.azimuth,
    }];
    config.range_km.value = args.range_km;
    config.validate()?;

    let ring = generate_sector(
        GeoPoint::new(args.lat, args.lon),
        args.azimuth,
        args.range_km,
        args.aperture,
    );
    let feature = export::sector_feature(&ring, SECTOR_COLORS[0]);
    let body = serde_json::to_string_pretty(&feature)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output.success(format!("Wrote sector to {}", path.display()));
        }
        None => println!("{}", body),
    }

    Ok(())
}
