//! cellview core - sector coverage and reference grid geometry
//!
//! This crate contains the computational core: sector wedge generation, grid
//! generation with spreadsheet-style cell labels, coverage union, scene
//! assembly, and GeoJSON export. The CLI crate provides the presentation
//! shell around it.

pub mod config;
pub mod coverage;
pub mod error;
pub mod export;
pub mod grid;
pub mod models;
pub mod scene;
pub mod sector;

pub use error::{CellviewError, Result};
