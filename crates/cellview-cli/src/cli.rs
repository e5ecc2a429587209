use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// cellview - BTS sector coverage and reference grids on web maps
#[derive(Parser, Debug)]
#[command(name = "cellview")]
#[command(about = "BTS sector coverage and reference grids on web maps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a starter scene file
    Init(InitArgs),

    /// Compute the scene and write GeoJSON or an HTML map
    Render(RenderArgs),

    /// Generate a single sector wedge
    Sector(SectorArgs),

    /// Generate a stand-alone grid over explicit bounds
    Grid(GridArgs),

    /// Show the effective configuration and scene summary
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the scene file
    #[arg(default_value = "scene.toml")]
    pub path: PathBuf,

    /// Overwrite an existing scene file
    #[arg(long)]
    pub force: bool,
}

/// Output document format for `render`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RenderFormat {
    /// GeoJSON FeatureCollection with styling properties
    Geojson,
    /// Self-contained Leaflet HTML page
    Html,
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Scene file (defaults to scene.toml in the current directory, when present)
    pub config: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Output document format
    #[arg(long, value_enum, default_value = "geojson")]
    pub format: RenderFormat,

    /// Interactive mode - build the scene with prompts
    #[arg(long, short = 'i')]
    pub interactive: bool,

    /// Base map tile style (standard, satellite, openstreetmap)
    #[arg(long)]
    pub tiles: Option<String>,

    /// Overlay the labeled reference grid
    #[arg(long, overrides_with = "no_grid")]
    pub grid: bool,

    /// Hide the reference grid
    #[arg(long)]
    pub no_grid: bool,

    /// Grid cell size in meters
    #[arg(long)]
    pub cell_size_m: Option<f64>,

    /// Grid line and label color (#RRGGBB)
    #[arg(long)]
    pub grid_color: Option<String>,

    /// Radial range in kilometers shared by all sectors
    #[arg(long)]
    pub range_km: Option<f64>,
}

impl RenderArgs {
    /// The grid visibility override, when either flag was given
    pub fn grid_override(&self) -> Option<bool> {
        if self.grid {
            Some(true)
        } else if self.no_grid {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct SectorArgs {
    /// BTS latitude in decimal degrees
    #[arg(long)]
    pub lat: f64,

    /// BTS longitude in decimal degrees
    #[arg(long)]
    pub lon: f64,

    /// Azimuth in degrees clockwise from north
    #[arg(long, default_value = "40")]
    pub azimuth: f64,

    /// Radial range in kilometers
    #[arg(long, default_value = "3")]
    pub range_km: f64,

    /// Angular width of the wedge in degrees
    #[arg(long, default_value = "120")]
    pub aperture: f64,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(allow_negative_numbers = true)]
pub struct GridArgs {
    /// Southern bound in decimal degrees
    #[arg(long)]
    pub min_lat: f64,

    /// Western bound in decimal degrees
    #[arg(long)]
    pub min_lon: f64,

    /// Northern bound in decimal degrees
    #[arg(long)]
    pub max_lat: f64,

    /// Eastern bound in decimal degrees
    #[arg(long)]
    pub max_lon: f64,

    /// Grid cell size in meters
    #[arg(long, default_value = "500")]
    pub cell_size_m: f64,

    /// Grid line and label color (#RRGGBB)
    #[arg(long, default_value = "#FFA500")]
    pub color: String,

    /// Write to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Scene file (defaults to scene.toml in the current directory, when present)
    pub config: Option<PathBuf>,
}
