//! Response assembly
//!
//! Merges the aggregated stats and level progression with identity fields.

use serde::Serialize;

use crate::error::StatsError;
use crate::progression::{network_level, LevelCurve, LevelProgress};
use crate::stats::{aggregate, GamemodeSchema, ModeStatsTable};

use super::resources::Resources;
use super::upstream::{normalize_uuid, PlayerPayload};

/// Bedwars stats for one player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedwarsReport {
    pub uuid: String,
    pub username: String,
    pub xp: u64,
    pub level: f64,
    pub prestige: u64,
    pub next_level: u64,
    pub xp_to_next_level: u64,
    pub progress_to_next_level_percentage: f64,
    /// Hypixel network level from `networkExp`
    pub network_level: f64,
    pub resources: Resources,
    pub stats: ModeStatsTable,
}

impl BedwarsReport {
    pub fn new(
        uuid: &str,
        username: String,
        progress: LevelProgress,
        network_level: f64,
        resources: Resources,
        stats: ModeStatsTable,
    ) -> Self {
        Self {
            uuid: normalize_uuid(uuid),
            username,
            xp: progress.experience,
            level: progress.level,
            prestige: progress.prestige,
            next_level: progress.next_level,
            xp_to_next_level: progress.xp_to_next_level,
            progress_to_next_level_percentage: progress.progress_percentage,
            network_level,
            resources,
            stats,
        }
    }
}

/// Run both engines over one player's payload
pub fn build_report(
    uuid: &str,
    payload: PlayerPayload,
    schema: &GamemodeSchema,
    curve: &LevelCurve,
) -> BedwarsReport {
    let stats = aggregate(&payload.counters, schema);
    let progress = curve.compute(payload.experience.value());
    BedwarsReport::new(
        uuid,
        payload.username,
        progress,
        network_level(payload.network_exp),
        payload.resources,
        stats,
    )
}

/// Successful response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

/// Failed response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub cause: String,
}

impl From<&StatsError> for ErrorBody {
    fn from(err: &StatsError) -> Self {
        Self {
            success: false,
            cause: err.to_string(),
        }
    }
}
