//! Per-mode metrics record and ratio math

use serde::Serialize;

use super::counters::{Counter, RawCounters};

/// Round to 2 decimal places, halves away from zero
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `numerator / denominator`, or the numerator itself when the denominator is 0
///
/// A player with 5 wins and no losses has a WLR of 5.0, not infinity or 0.
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    let value = if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        numerator as f64
    };
    round_2dp(value)
}

/// Totals and ratios for one gamemode
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ModeMetrics {
    pub wins: u64,
    pub losses: u64,
    pub final_kills: u64,
    pub final_deaths: u64,
    pub kills: u64,
    pub deaths: u64,
    pub beds_broken: u64,
    pub beds_lost: u64,

    // Resources collected
    pub emeralds: u64,
    pub diamonds: u64,
    pub gold: u64,
    pub iron: u64,

    pub wlr: f64,
    pub kdr: f64,
    pub fkdr: f64,
    pub bblr: f64,
}

impl ModeMetrics {
    /// Sum every counter over `prefixes` and derive the ratios
    pub fn from_raw(raw: &RawCounters, prefixes: &[String]) -> Self {
        let sum = |counter| raw.sum(counter, prefixes);
        Self::from_counts(
            [
                sum(Counter::Wins),
                sum(Counter::Losses),
                sum(Counter::FinalKills),
                sum(Counter::FinalDeaths),
                sum(Counter::Kills),
                sum(Counter::Deaths),
                sum(Counter::BedsBroken),
                sum(Counter::BedsLost),
            ],
            [
                sum(Counter::Emeralds),
                sum(Counter::Diamonds),
                sum(Counter::Gold),
                sum(Counter::Iron),
            ],
        )
    }

    /// Build from the 8 combat counters and 4 resource totals, in `Counter::ALL` order
    pub fn from_counts(combat: [u64; 8], resources: [u64; 4]) -> Self {
        let [wins, losses, final_kills, final_deaths, kills, deaths, beds_broken, beds_lost] = combat;
        let [emeralds, diamonds, gold, iron] = resources;
        Self {
            wins,
            losses,
            final_kills,
            final_deaths,
            kills,
            deaths,
            beds_broken,
            beds_lost,
            emeralds,
            diamonds,
            gold,
            iron,
            wlr: ratio(wins, losses),
            kdr: ratio(kills, deaths),
            fkdr: ratio(final_kills, final_deaths),
            bblr: ratio(beds_broken, beds_lost),
        }
    }

    /// Counter value by metric
    pub fn count(&self, counter: Counter) -> u64 {
        match counter {
            Counter::Wins => self.wins,
            Counter::Losses => self.losses,
            Counter::FinalKills => self.final_kills,
            Counter::FinalDeaths => self.final_deaths,
            Counter::Kills => self.kills,
            Counter::Deaths => self.deaths,
            Counter::BedsBroken => self.beds_broken,
            Counter::BedsLost => self.beds_lost,
            Counter::Emeralds => self.emeralds,
            Counter::Diamonds => self.diamonds,
            Counter::Gold => self.gold,
            Counter::Iron => self.iron,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ratio_zero_denominator_uses_numerator() {
        assert_eq!(ratio(5, 0), 5.0);
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(0, 7), 0.0);
    }

    #[test]
    fn test_ratio_rounding() {
        assert_eq!(ratio(10, 5), 2.0);
        assert_eq!(ratio(1, 3), 0.33);
        assert_eq!(ratio(2, 3), 0.67);
        assert_eq!(ratio(1, 8), 0.13); // 0.125 rounds away from zero
        assert_eq!(ratio(1234, 1000), 1.23);
    }

    #[test]
    fn test_from_counts() {
        let m = ModeMetrics::from_counts([10, 5, 20, 4, 0, 0, 3, 0], [1, 2, 3, 4]);
        assert_eq!(m.wlr, 2.0);
        assert_eq!(m.fkdr, 5.0);
        assert_eq!(m.kdr, 0.0);
        assert_eq!(m.bblr, 3.0);
        assert_eq!(m.count(Counter::Iron), 4);
        assert_eq!(m.count(Counter::FinalKills), 20);
    }

    #[test]
    fn test_default_is_all_zero() {
        let m = ModeMetrics::from_raw(&RawCounters::new(), &["eight_one_".to_string()]);
        assert_eq!(m, ModeMetrics::default());
    }

    proptest! {
        #[test]
        fn prop_wlr_equals_wins_without_losses(wins in 0u64..1_000_000) {
            prop_assert_eq!(ratio(wins, 0), wins as f64);
        }

        #[test]
        fn prop_ratio_has_two_decimals(n in 0u64..1_000_000, d in 1u64..1_000_000) {
            let r = ratio(n, d);
            prop_assert!((r * 100.0 - (r * 100.0).round()).abs() < 1e-6);
        }
    }
}
