//! Bedwars Stats - statistics aggregation and prestige leveling
//!
//! Turns the flat per-mode counters a Hypixel player document carries into
//! per-gamemode totals and ratios, and experience into stars and prestige.

pub mod error;
pub mod progression;
pub mod stats;
pub mod report;
pub mod data;

// Re-export commonly used types
pub use error::StatsError;
pub use progression::{compute_level, LevelCurve, LevelProgress, Experience};
pub use stats::{aggregate, GamemodeSchema, ModeMetrics, ModeStatsTable, RawCounters};
pub use report::{build_report, BedwarsReport, PlayerPayload};
pub use data::DataManager;
