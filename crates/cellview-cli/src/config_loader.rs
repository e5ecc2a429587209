//! Layered scene configuration loading for the CLI commands.

use anyhow::Result;
use cellview_core::config::{CliConfigOverrides, SceneConfig};
use cellview_core::CellviewError;
use std::path::{Path, PathBuf};

/// Scene file picked up implicitly from the working directory
pub const DEFAULT_SCENE_FILE: &str = "scene.toml";

/// Load the effective configuration: defaults, then the scene file (an
/// explicit path must exist; the implicit `scene.toml` is optional), then
/// environment variables, then CLI overrides.
pub fn load_scene_config(
    path: Option<&PathBuf>,
    overrides: CliConfigOverrides,
) -> Result<SceneConfig> {
    let mut config = SceneConfig::with_defaults();

    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CellviewError::SceneNotFound { path: path.clone() }.into());
            }
            config = config.load_from_file(path)?;
        }
        None => {
            let implicit = Path::new(DEFAULT_SCENE_FILE);
            if implicit.exists() {
                tracing::debug!("loading implicit scene file {}", DEFAULT_SCENE_FILE);
                config = config.load_from_file(implicit)?;
            }
        }
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}
