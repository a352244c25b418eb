//! Network level
//!
//! Hypixel's account-wide level, derived from total network experience.

use crate::stats::round_2dp;

/// Convert network experience into the (fractional) network level, rounded to 2 decimals
pub fn network_level(network_exp: u64) -> f64 {
    let level = ((2.0 * network_exp as f64) + 30625.0).sqrt() / 50.0 - 2.5;
    round_2dp(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_level() {
        assert_eq!(network_level(0), 1.0);
        // sqrt(2 * 10000 + 30625) = 225 -> 225 / 50 - 2.5 = 2.0
        assert_eq!(network_level(10_000), 2.0);
        assert_eq!(network_level(100_000), 7.1);
        assert_eq!(network_level(1_000_000), 26.0);
        assert_eq!(network_level(2_500_000), 42.36);
    }
}
