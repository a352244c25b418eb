//! Global Bedwars resources
//!
//! Tokens and slumber tickets are account-wide, not per mode.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::stats::counters::json_count;

/// Slumber ticket wallet upgrades
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlumberWallet {
    Mini,
    LightSlumbers,
    LightImperial,
    Explorers,
    HotelStaff,
    PlatinumMembership,
}

impl SlumberWallet {
    pub fn from_bag_type(bag_type: &str) -> Option<Self> {
        match bag_type {
            "MINI_WALLET" => Some(SlumberWallet::Mini),
            "LIGHT_SLUMBERS_WALLET" => Some(SlumberWallet::LightSlumbers),
            "LIGHT_IMPERIAL_WALLET" => Some(SlumberWallet::LightImperial),
            "EXPLORERS_WALLET" => Some(SlumberWallet::Explorers),
            "HOTEL_STAFF_WALLET" => Some(SlumberWallet::HotelStaff),
            "PLATINUM_MEMBERSHIP_WALLET" => Some(SlumberWallet::PlatinumMembership),
            _ => None,
        }
    }

    /// Maximum tickets the wallet holds
    pub fn capacity(&self) -> u64 {
        match self {
            SlumberWallet::Mini => 25,
            SlumberWallet::LightSlumbers => 99,
            SlumberWallet::LightImperial => 500,
            SlumberWallet::Explorers => 5_000,
            SlumberWallet::HotelStaff => 10_000,
            SlumberWallet::PlatinumMembership => 100_000,
        }
    }
}

/// Account-wide currencies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Resources {
    pub tokens: u64,
    pub slumber_tickets: u64,
    /// Wallet capacity; 0 when no known wallet is equipped
    pub slumber_tickets_max: u64,
    pub slumber_tickets_total: u64,
}

impl Resources {
    /// Read resources from the upstream Bedwars stats object
    pub fn from_bedwars(bedwars: &Map<String, Value>) -> Self {
        let slumber = bedwars.get("slumber").and_then(Value::as_object);
        let slumber_count = |key: &str| {
            slumber
                .and_then(|s| s.get(key))
                .and_then(json_count)
                .unwrap_or(0)
        };
        let wallet = slumber
            .and_then(|s| s.get("bag_type"))
            .and_then(Value::as_str)
            .and_then(SlumberWallet::from_bag_type);

        Self {
            tokens: bedwars.get("coins").and_then(json_count).unwrap_or(0),
            slumber_tickets: slumber_count("tickets"),
            slumber_tickets_max: wallet.map(|w| w.capacity()).unwrap_or(0),
            slumber_tickets_total: slumber_count("total_tickets_earned"),
        }
    }
}
