//! Upstream player document
//!
//! Pulls the engine's inputs out of an already-fetched `/player` response.

use serde_json::{Map, Value};

use crate::error::StatsError;
use crate::progression::Experience;
use crate::stats::counters::json_count;
use crate::stats::RawCounters;

use super::resources::Resources;

/// Username reported when the document carries no display name
pub const UNKNOWN_USERNAME: &str = "not found";

/// Everything the engine needs from one player document
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerPayload {
    pub username: String,
    pub experience: Experience,
    /// Account-wide `networkExp`, 0 when absent
    pub network_exp: u64,
    pub counters: RawCounters,
    pub resources: Resources,
}

impl PlayerPayload {
    /// Parse a raw JSON document
    pub fn parse(document: &str) -> Result<Self, StatsError> {
        let value: Value = serde_json::from_str(document)?;
        Self::from_json(&value)
    }

    /// Extract the Bedwars inputs from a decoded document
    pub fn from_json(document: &Value) -> Result<Self, StatsError> {
        if !document.get("success").and_then(Value::as_bool).unwrap_or(false) {
            return Err(match document.get("cause").and_then(Value::as_str) {
                Some(cause) => StatsError::Upstream(cause.to_string()),
                None => StatsError::PlayerNotFound,
            });
        }

        let player = document
            .get("player")
            .and_then(Value::as_object)
            .filter(|p| !p.is_empty())
            .ok_or(StatsError::PlayerNotFound)?;

        let bedwars = player
            .get("stats")
            .and_then(|s| s.get("Bedwars"))
            .and_then(Value::as_object)
            .filter(|b| !b.is_empty())
            .ok_or(StatsError::MissingGameStats)?;

        let username = player
            .get("displayname")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_USERNAME)
            .to_string();

        Ok(Self {
            username,
            experience: read_experience(bedwars)?,
            network_exp: player.get("networkExp").and_then(json_count).unwrap_or(0),
            counters: RawCounters::from_json_object(bedwars),
            resources: Resources::from_bedwars(bedwars),
        })
    }
}

/// Missing XP counts as 0 and negative XP is clamped to 0; anything non-numeric is rejected
fn read_experience(bedwars: &Map<String, Value>) -> Result<Experience, StatsError> {
    match bedwars.get("Experience") {
        None | Some(Value::Null) => Ok(Experience::default()),
        Some(Value::Number(n)) => {
            if let Some(xp) = n.as_u64() {
                return Ok(Experience::from(xp));
            }
            let xp = n
                .as_f64()
                .ok_or_else(|| StatsError::InvalidInput(format!("experience {} is not representable", n)))?;
            if xp < 0.0 {
                log::warn!("Negative experience {} treated as 0", xp);
                return Ok(Experience::default());
            }
            Experience::new(xp)
        }
        Some(other) => Err(StatsError::InvalidInput(format!("experience {} is not a number", other))),
    }
}

/// Strip dashes so dashed and undashed UUIDs compare equal
pub fn normalize_uuid(uuid: &str) -> String {
    uuid.chars().filter(|c| *c != '-').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(bedwars: Value) -> Value {
        json!({
            "success": true,
            "player": {
                "displayname": "Technoblade",
                "stats": { "Bedwars": bedwars }
            }
        })
    }

    #[test]
    fn test_extracts_payload() {
        let doc = document(json!({
            "Experience": 7000,
            "eight_one_wins_bedwars": 10,
            "coins": 99,
            "slumber": { "tickets": 5 }
        }));
        let payload = PlayerPayload::from_json(&doc).unwrap();
        assert_eq!(payload.username, "Technoblade");
        assert_eq!(payload.experience.value(), 7000);
        assert_eq!(payload.counters.get("eight_one_wins_bedwars"), 10);
        assert_eq!(payload.resources.tokens, 99);
        assert_eq!(payload.resources.slumber_tickets, 5);
    }

    #[test]
    fn test_missing_experience_is_zero() {
        let payload = PlayerPayload::from_json(&document(json!({ "wins_bedwars": 1 }))).unwrap();
        assert_eq!(payload.experience.value(), 0);
    }

    #[test]
    fn test_negative_experience_is_clamped() {
        let payload = PlayerPayload::from_json(&document(json!({ "Experience": -40 }))).unwrap();
        assert_eq!(payload.experience.value(), 0);
    }

    #[test]
    fn test_large_integer_experience_is_exact() {
        let doc = document(json!({ "Experience": 9_007_199_254_740_993u64 }));
        let payload = PlayerPayload::from_json(&doc).unwrap();
        assert_eq!(payload.experience.value(), 9_007_199_254_740_993);

        let doc = document(json!({ "Experience": u64::MAX }));
        assert_eq!(PlayerPayload::from_json(&doc).unwrap().experience.value(), u64::MAX);
    }

    #[test]
    fn test_out_of_range_experience_rejected() {
        let err = PlayerPayload::from_json(&document(json!({ "Experience": 1e30 }))).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));

        let payload = PlayerPayload::from_json(&document(json!({ "Experience": 1234.9 }))).unwrap();
        assert_eq!(payload.experience.value(), 1234);
    }

    #[test]
    fn test_network_exp() {
        let doc = json!({
            "success": true,
            "player": { "networkExp": 10_000.5, "stats": { "Bedwars": { "coins": 1 } } }
        });
        assert_eq!(PlayerPayload::from_json(&doc).unwrap().network_exp, 10_000);

        let payload = PlayerPayload::from_json(&document(json!({ "coins": 1 }))).unwrap();
        assert_eq!(payload.network_exp, 0);
    }

    #[test]
    fn test_non_numeric_experience_rejected() {
        let err = PlayerPayload::from_json(&document(json!({ "Experience": "lots" }))).unwrap_err();
        assert!(matches!(err, StatsError::InvalidInput(_)));
    }

    #[test]
    fn test_upstream_failures() {
        let err = PlayerPayload::from_json(&json!({ "success": false, "cause": "Invalid API key" }))
            .unwrap_err();
        assert!(matches!(err, StatsError::Upstream(ref c) if c == "Invalid API key"));

        let err = PlayerPayload::from_json(&json!({ "success": true, "player": null })).unwrap_err();
        assert!(matches!(err, StatsError::PlayerNotFound));

        let err = PlayerPayload::from_json(&json!({ "success": true, "player": { "stats": {} } }))
            .unwrap_err();
        assert!(matches!(err, StatsError::MissingGameStats));

        let err = PlayerPayload::from_json(&document(json!({}))).unwrap_err();
        assert!(matches!(err, StatsError::MissingGameStats));
    }

    #[test]
    fn test_missing_displayname() {
        let doc = json!({ "success": true, "player": { "stats": { "Bedwars": { "coins": 1 } } } });
        assert_eq!(PlayerPayload::from_json(&doc).unwrap().username, UNKNOWN_USERNAME);
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(matches!(PlayerPayload::parse("{not json"), Err(StatsError::Json(_))));
    }

    #[test]
    fn test_normalize_uuid() {
        assert_eq!(
            normalize_uuid("b876ec32-e396-476b-a115-8438d83c67d4"),
            "b876ec32e396476ba1158438d83c67d4"
        );
    }
}
