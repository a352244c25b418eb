//! Raw counter map
//!
//! Flat `prefix + suffix -> count` telemetry as the upstream API reports it.

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Metric read from the raw map for every gamemode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Counter {
    Wins,
    Losses,
    FinalKills,
    FinalDeaths,
    Kills,
    Deaths,
    BedsBroken,
    BedsLost,
    Emeralds,
    Diamonds,
    Gold,
    Iron,
}

impl Counter {
    pub const ALL: [Counter; 12] = [
        Counter::Wins,
        Counter::Losses,
        Counter::FinalKills,
        Counter::FinalDeaths,
        Counter::Kills,
        Counter::Deaths,
        Counter::BedsBroken,
        Counter::BedsLost,
        Counter::Emeralds,
        Counter::Diamonds,
        Counter::Gold,
        Counter::Iron,
    ];

    /// Key suffix appended to a mode prefix
    pub fn suffix(&self) -> &'static str {
        match self {
            Counter::Wins => "wins_bedwars",
            Counter::Losses => "losses_bedwars",
            Counter::FinalKills => "final_kills_bedwars",
            Counter::FinalDeaths => "final_deaths_bedwars",
            Counter::Kills => "kills_bedwars",
            Counter::Deaths => "deaths_bedwars",
            Counter::BedsBroken => "beds_broken_bedwars",
            Counter::BedsLost => "beds_lost_bedwars",
            Counter::Emeralds => "emerald_resources_collected_bedwars",
            Counter::Diamonds => "diamond_resources_collected_bedwars",
            Counter::Gold => "gold_resources_collected_bedwars",
            Counter::Iron => "iron_resources_collected_bedwars",
        }
    }

    /// Raw map key for this counter under a mode prefix
    pub fn key(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.suffix())
    }
}

/// Counter telemetry for one player; absent keys read as zero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCounters {
    counts: HashMap<String, u64>,
}

impl RawCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count stored under `key`, or 0
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Sum one counter over a set of mode prefixes
    pub fn sum(&self, counter: Counter, prefixes: &[String]) -> u64 {
        prefixes
            .iter()
            .map(|prefix| self.get(&counter.key(prefix)))
            .fold(0u64, u64::saturating_add)
    }

    pub fn insert(&mut self, key: impl Into<String>, count: u64) {
        self.counts.insert(key.into(), count);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Collect the numeric entries of an upstream stats object
    ///
    /// Non-negative integers are kept as-is and non-negative floats are
    /// truncated. Strings, objects, arrays and negative numbers are skipped.
    pub fn from_json_object(object: &Map<String, Value>) -> Self {
        let counts = object
            .iter()
            .filter_map(|(key, value)| json_count(value).map(|count| (key.clone(), count)))
            .collect();
        Self { counts }
    }
}

/// Read a JSON number as a count; floats are truncated, negatives and non-numbers give `None`
pub(crate) fn json_count(value: &Value) -> Option<u64> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(count) = number.as_u64() {
        return Some(count);
    }
    number
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.trunc() as u64)
}

impl<K: Into<String>> FromIterator<(K, u64)> for RawCounters {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
