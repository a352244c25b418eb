//! Gamemode statistics
//!
//! Turns the flat Bedwars counter map into per-mode totals and ratios.

pub mod counters;
pub mod schema;
pub mod metrics;
pub mod aggregate;

pub use counters::{Counter, RawCounters};
pub use schema::{GamemodeSchema, ModeDescriptor, ModeKind, default_schema};
pub use metrics::{ModeMetrics, ratio, round_2dp};
pub use aggregate::{ModeStats, ModeStatsTable, aggregate};
