//! Gamemode schema
//!
//! Which gamemodes are reported and which raw-key prefixes feed each one.
//! Built once at startup and shared read-only by every aggregation.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

/// How a mode's prefixes relate to the raw map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModeKind {
    /// One real gamemode, one prefix
    Simple,
    /// Sum of the four base team sizes
    Core,
    /// Doubles + fours variant of one rule set
    Combined,
    /// Unprefixed lifetime totals
    Overall,
}

impl ModeKind {
    /// Number of prefixes a descriptor of this kind must carry
    pub fn prefix_count(&self) -> usize {
        match self {
            ModeKind::Simple | ModeKind::Overall => 1,
            ModeKind::Core => 4,
            ModeKind::Combined => 2,
        }
    }
}

/// One output gamemode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeDescriptor {
    pub key: String,
    pub kind: ModeKind,
    pub prefixes: Vec<String>,
}

impl ModeDescriptor {
    pub fn simple(key: &str) -> Self {
        Self {
            key: key.to_string(),
            kind: ModeKind::Simple,
            prefixes: vec![format!("{}_", key)],
        }
    }

    pub fn overall() -> Self {
        Self {
            key: "overall".to_string(),
            kind: ModeKind::Overall,
            prefixes: vec![String::new()],
        }
    }

    pub fn core() -> Self {
        Self {
            key: "core".to_string(),
            kind: ModeKind::Core,
            prefixes: CORE_MODES.iter().map(|m| format!("{}_", m)).collect(),
        }
    }

    /// Doubles and fours flavours of a rule variant, e.g. `rush`
    pub fn combined(variant: &str) -> Self {
        Self {
            key: variant.to_string(),
            kind: ModeKind::Combined,
            prefixes: vec![
                format!("eight_two_{}_", variant),
                format!("four_four_{}_", variant),
            ],
        }
    }
}

/// Solo, doubles, threes, fours
pub const CORE_MODES: [&str; 4] = ["eight_one", "eight_two", "four_three", "four_four"];

/// Every gamemode reported on its own, in output order
pub const SIMPLE_MODES: &[&str] = &[
    "eight_one",            // Solo
    "eight_two",            // Doubles
    "four_three",           // Threes
    "four_four",            // Fours
    "two_four",             // 4v4
    "four_four_armed",
    "castle",               // 40v40
    "four_four_lucky",
    "eight_two_lucky",
    "eight_two_rush",
    "four_four_rush",
    "eight_two_swap",
    "four_four_swap",
    "eight_two_ultimate",
    "four_four_ultimate",
    "four_four_underworld",
    "four_four_voidless",
];

/// Rule variants rolled up across doubles and fours
pub const COMBINED_MODES: &[&str] = &["ultimate", "lucky", "rush", "swap"];

/// Ordered list of mode descriptors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamemodeSchema {
    pub modes: Vec<ModeDescriptor>,
}

impl Default for GamemodeSchema {
    fn default() -> Self {
        Self::bedwars()
    }
}

impl GamemodeSchema {
    /// The Bedwars mode table: overall, core, each simple mode, then the combined variants
    pub fn bedwars() -> Self {
        let mut modes = vec![ModeDescriptor::overall(), ModeDescriptor::core()];
        modes.extend(SIMPLE_MODES.iter().map(|key| ModeDescriptor::simple(key)));
        modes.extend(COMBINED_MODES.iter().map(|variant| ModeDescriptor::combined(variant)));
        Self { modes }
    }

    /// Find a descriptor by mode key
    pub fn find(&self, key: &str) -> Option<&ModeDescriptor> {
        self.modes.iter().find(|m| m.key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.modes.iter().map(|m| m.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Check key uniqueness and that every descriptor's prefixes fit its kind
    pub fn validate(&self) -> Result<(), StatsError> {
        let mut seen = HashSet::new();
        for mode in &self.modes {
            if mode.key.is_empty() {
                return Err(StatsError::InvalidSchema("empty mode key".into()));
            }
            if !seen.insert(mode.key.as_str()) {
                return Err(StatsError::InvalidSchema(format!("duplicate mode key '{}'", mode.key)));
            }
            if mode.prefixes.len() != mode.kind.prefix_count() {
                return Err(StatsError::InvalidSchema(format!(
                    "mode '{}' ({:?}) needs {} prefixes, found {}",
                    mode.key,
                    mode.kind,
                    mode.kind.prefix_count(),
                    mode.prefixes.len()
                )));
            }
            let has_empty_prefix = mode.prefixes.iter().any(|p| p.is_empty());
            match mode.kind {
                ModeKind::Overall if !has_empty_prefix => {
                    return Err(StatsError::InvalidSchema(format!(
                        "overall mode '{}' must use the empty prefix",
                        mode.key
                    )));
                }
                ModeKind::Simple | ModeKind::Core | ModeKind::Combined if has_empty_prefix => {
                    return Err(StatsError::InvalidSchema(format!(
                        "mode '{}' has an empty prefix",
                        mode.key
                    )));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

static DEFAULT_SCHEMA: OnceLock<GamemodeSchema> = OnceLock::new();

/// Process-wide Bedwars schema
pub fn default_schema() -> &'static GamemodeSchema {
    DEFAULT_SCHEMA.get_or_init(GamemodeSchema::bedwars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bedwars_schema_is_valid() {
        let schema = GamemodeSchema::bedwars();
        assert!(schema.validate().is_ok());
        assert_eq!(schema.len(), 2 + SIMPLE_MODES.len() + COMBINED_MODES.len());
    }

    #[test]
    fn test_bedwars_schema_order() {
        let keys: Vec<&str> = default_schema().keys().collect();
        assert_eq!(&keys[..3], &["overall", "core", "eight_one"]);
        assert_eq!(&keys[keys.len() - 4..], &["ultimate", "lucky", "rush", "swap"]);
    }

    #[test]
    fn test_descriptor_prefixes() {
        let schema = default_schema();
        assert_eq!(schema.find("overall").unwrap().prefixes, vec![""]);
        assert_eq!(schema.find("castle").unwrap().prefixes, vec!["castle_"]);
        assert_eq!(
            schema.find("core").unwrap().prefixes,
            vec!["eight_one_", "eight_two_", "four_three_", "four_four_"]
        );
        assert_eq!(
            schema.find("ultimate").unwrap().prefixes,
            vec!["eight_two_ultimate_", "four_four_ultimate_"]
        );
        assert!(schema.find("eight_three").is_none());
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let mut schema = GamemodeSchema::bedwars();
        schema.modes.push(ModeDescriptor::simple("eight_one"));
        assert!(matches!(schema.validate(), Err(StatsError::InvalidSchema(_))));
    }

    #[test]
    fn test_prefix_count_rejected() {
        let mut schema = GamemodeSchema::bedwars();
        schema.modes.push(ModeDescriptor {
            key: "pairs".to_string(),
            kind: ModeKind::Combined,
            prefixes: vec!["eight_two_pairs_".to_string()],
        });
        assert!(schema.validate().is_err());
    }

    #[test]
    fn test_overall_needs_empty_prefix() {
        let schema = GamemodeSchema {
            modes: vec![ModeDescriptor {
                key: "overall".to_string(),
                kind: ModeKind::Overall,
                prefixes: vec!["eight_one_".to_string()],
            }],
        };
        assert!(schema.validate().is_err());

        let schema = GamemodeSchema {
            modes: vec![ModeDescriptor {
                key: "solo".to_string(),
                kind: ModeKind::Simple,
                prefixes: vec![String::new()],
            }],
        };
        assert!(schema.validate().is_err());
    }
}
