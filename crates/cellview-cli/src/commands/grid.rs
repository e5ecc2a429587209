//! Grid command: a stand-alone grid over explicit bounds

use crate::cli::GridArgs;
use crate::output::OutputWriter;
use anyhow::{Context, Result};
use cellview_core::config::validate_hex_color;
use cellview_core::export;
use cellview_core::grid::generate_grid;
use cellview_core::models::BoundingBox;
use cellview_core::CellviewError;
use std::fs;

pub fn execute(args: GridArgs, output: &OutputWriter) -> Result<()> {
    if args.cell_size_m <= 0.0 || args.cell_size_m > 1000.0 {
        return Err(CellviewError::ConfigInvalid {
            key: "cell_size_m".to_string(),
            reason: format!("Cell size {} m out of range (0, 1000]", args.cell_size_m),
        }
        .into());
    }
    validate_hex_color(&args.color)?;

    let bounds = BoundingBox::new(args.min_lat, args.min_lon, args.max_lat, args.max_lon);
    let grid = generate_grid(bounds, args.cell_size_m);
    if grid.labels.is_empty() {
        output.warning("Bounds are smaller than one grid cell; no labels generated");
    }

    let fc = export::grid_feature_collection(&grid, &args.color);
    let body = serde_json::to_string_pretty(&fc)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output.success(format!(
                "Wrote grid ({} lines, {} labels) to {}",
                grid.lines.len(),
                grid.labels.len(),
                path.display()
            ));
        }
        None => println!("{}", body),
    }

    Ok(())
}
