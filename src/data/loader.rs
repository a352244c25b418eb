//! RON data loader
//!
//! Loads the gamemode schema and level curve from RON files, with fallback
//! to the built-in Bedwars defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::StatsError;
use crate::progression::LevelCurve;
use crate::stats::GamemodeSchema;

pub const SCHEMA_FILE: &str = "gamemodes.ron";
pub const CURVE_FILE: &str = "leveling.ron";

/// Engine configuration, loaded once at startup and shared read-only afterwards
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataManager {
    pub schema: GamemodeSchema,
    pub curve: LevelCurve,
}

impl DataManager {
    /// Load from `base_path`; each missing or invalid file falls back to its default
    pub fn load_from(base_path: &Path) -> Self {
        let schema = Self::load_schema(base_path).unwrap_or_else(|e| {
            log::warn!("Using default gamemode schema: {}", e);
            GamemodeSchema::bedwars()
        });
        let curve = Self::load_curve(base_path).unwrap_or_else(|e| {
            log::warn!("Using default level curve: {}", e);
            LevelCurve::bedwars()
        });
        Self { schema, curve }
    }

    /// Load and validate the gamemode schema
    pub fn load_schema(base_path: &Path) -> Result<GamemodeSchema, StatsError> {
        let schema: GamemodeSchema = read_ron(&base_path.join(SCHEMA_FILE))?;
        schema.validate()?;
        log::info!("Loaded {} gamemodes from {:?}", schema.len(), base_path);
        Ok(schema)
    }

    /// Load and validate the level curve
    pub fn load_curve(base_path: &Path) -> Result<LevelCurve, StatsError> {
        let curve: LevelCurve = read_ron(&base_path.join(CURVE_FILE))?;
        curve.validate()?;
        log::info!("Loaded level curve from {:?}", base_path);
        Ok(curve)
    }

    pub fn schema(&self) -> &GamemodeSchema {
        &self.schema
    }

    pub fn curve(&self) -> &LevelCurve {
        &self.curve
    }
}

fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, StatsError> {
    let content = fs::read_to_string(path)?;
    Ok(ron::from_str(&content)?)
}

/// Platform config directory for data files, or `./assets/data`
pub fn data_directory() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("net", "bedwars-stats", "BedwarsStats") {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("data");
        path
    } else {
        PathBuf::from("./assets/data")
    }
}

/// Export the default schema and curve to RON files for easy editing
pub fn export_default_data(base_path: &Path) -> Result<(), StatsError> {
    fs::create_dir_all(base_path)?;

    let pretty = ron::ser::PrettyConfig::default();
    let schema_ron = ron::ser::to_string_pretty(&GamemodeSchema::bedwars(), pretty.clone())?;
    fs::write(base_path.join(SCHEMA_FILE), schema_ron)?;

    let curve_ron = ron::ser::to_string_pretty(&LevelCurve::bedwars(), pretty)?;
    fs::write(base_path.join(CURVE_FILE), curve_ron)?;

    log::info!("Exported default data to {:?}", base_path);
    Ok(())
}
