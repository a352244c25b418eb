//! Mode stats aggregation
//!
//! Runs every descriptor of a [`GamemodeSchema`] through the same transform.
//! Core and combined modes differ from simple ones only by how many prefixes
//! they sum over.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::counters::RawCounters;
use super::metrics::ModeMetrics;
use super::schema::GamemodeSchema;

/// Metrics for one mode, tagged with its key
#[derive(Debug, Clone, PartialEq)]
pub struct ModeStats {
    pub key: String,
    pub metrics: ModeMetrics,
}

impl ModeStats {
    /// Field name as it appears in responses, e.g. `eight_one_wins`
    pub fn field_name(&self, field: &str) -> String {
        format!("{}_{}", self.key, field)
    }
}

impl Serialize for ModeStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let m = &self.metrics;
        let counts = [
            ("wins", m.wins),
            ("losses", m.losses),
            ("final_kills", m.final_kills),
            ("final_deaths", m.final_deaths),
            ("kills", m.kills),
            ("deaths", m.deaths),
            ("beds_broken", m.beds_broken),
            ("beds_lost", m.beds_lost),
            ("emeralds", m.emeralds),
            ("diamonds", m.diamonds),
            ("gold", m.gold),
            ("iron", m.iron),
        ];
        let ratios = [("wlr", m.wlr), ("kdr", m.kdr), ("fkdr", m.fkdr), ("bblr", m.bblr)];

        let mut map = serializer.serialize_map(Some(counts.len() + ratios.len()))?;
        for (field, value) in counts {
            map.serialize_entry(&self.field_name(field), &value)?;
        }
        for (field, value) in ratios {
            map.serialize_entry(&self.field_name(field), &value)?;
        }
        map.end()
    }
}

/// Aggregated stats for every mode, in schema order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModeStatsTable {
    modes: Vec<ModeStats>,
}

impl ModeStatsTable {
    pub fn get(&self, key: &str) -> Option<&ModeMetrics> {
        self.modes.iter().find(|m| m.key == key).map(|m| &m.metrics)
    }

    /// Metrics for `key`, or an all-zero record when the mode is not in the table
    pub fn metrics_or_default(&self, key: &str) -> ModeMetrics {
        self.get(key).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeStats> {
        self.modes.iter()
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }
}

impl Serialize for ModeStatsTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.modes.len()))?;
        for mode in &self.modes {
            map.serialize_entry(&mode.key, mode)?;
        }
        map.end()
    }
}

/// Aggregate raw counters into per-mode metrics
///
/// Missing counters count as zero, so this cannot fail for a valid schema.
pub fn aggregate(raw: &RawCounters, schema: &GamemodeSchema) -> ModeStatsTable {
    let modes: Vec<ModeStats> = schema
        .modes
        .iter()
        .map(|mode| ModeStats {
            key: mode.key.clone(),
            metrics: ModeMetrics::from_raw(raw, &mode.prefixes),
        })
        .collect();

    log::debug!("Aggregated {} counters into {} modes", raw.len(), modes.len());
    ModeStatsTable { modes }
}
