//! Data loading
//!
//! This module handles loading the gamemode schema and level curve from
//! external RON files, so new modes can be added without a rebuild.

pub mod loader;

pub use loader::{DataManager, data_directory, export_default_data};
