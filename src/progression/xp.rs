//! Experience and leveling
//!
//! The Bedwars star curve, level/prestige conversion, and progress helpers.
//!
//! Each prestige is a block of levels. The first few level-ups of a block are
//! cheap ("easy" levels), every other level-up costs the same flat amount,
//! and the discount starts over at the next block.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::error::StatsError;

/// Level a player holds at 0 xp
pub const MIN_LEVEL: u64 = 1;

/// Experience curve parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelCurve {
    /// Cost of the first level-ups inside each prestige block
    pub easy_level_costs: Vec<u64>,
    /// Cost of every other level-up
    pub level_cost: u64,
    /// Levels per prestige
    pub prestige_levels: u64,
}

impl Default for LevelCurve {
    fn default() -> Self {
        Self::bedwars()
    }
}

impl LevelCurve {
    /// The public Bedwars table: 500/1000/2000/3500 then 5000 per level, 100 levels per prestige
    pub fn bedwars() -> Self {
        Self {
            easy_level_costs: vec![500, 1000, 2000, 3500],
            level_cost: 5000,
            prestige_levels: 100,
        }
    }

    /// Reject curves that cannot be strictly increasing or that overflow one block
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.prestige_levels == 0 {
            return Err(StatsError::InvalidCurve("prestige_levels must be positive".into()));
        }
        if self.easy_level_costs.len() as u64 >= self.prestige_levels {
            return Err(StatsError::InvalidCurve(format!(
                "{} easy levels do not fit in a {}-level prestige",
                self.easy_level_costs.len(),
                self.prestige_levels
            )));
        }
        if self.level_cost == 0 || self.easy_level_costs.contains(&0) {
            return Err(StatsError::InvalidCurve("level costs must be positive".into()));
        }
        let regular = self.prestige_levels - self.easy_level_costs.len() as u64;
        self.easy_level_costs
            .iter()
            .try_fold(0u64, |acc, &c| acc.checked_add(c))
            .and_then(|easy| regular.checked_mul(self.level_cost)?.checked_add(easy))
            .ok_or_else(|| StatsError::InvalidCurve("xp per prestige overflows".into()))?;
        Ok(())
    }

    /// Cost of leveling up from the given position inside a block (0-indexed)
    fn step_cost(&self, index_in_block: u64) -> u64 {
        self.easy_level_costs
            .get(index_in_block as usize)
            .copied()
            .unwrap_or(self.level_cost)
    }

    /// Total XP to clear one full prestige block
    pub fn xp_per_prestige(&self) -> u64 {
        let easy: u64 = self.easy_level_costs.iter().sum();
        let regular = self.prestige_levels - self.easy_level_costs.len() as u64;
        easy + regular * self.level_cost
    }

    /// Total XP needed to reach a level, starting from level 1 at 0 XP
    pub fn xp_for_level(&self, level: u64) -> u64 {
        if level <= MIN_LEVEL {
            return 0;
        }
        let steps = level - MIN_LEVEL;
        let prestiges = steps / self.prestige_levels;
        let within = steps % self.prestige_levels;
        let partial: u64 = (0..within).map(|i| self.step_cost(i)).sum();
        prestiges
            .saturating_mul(self.xp_per_prestige())
            .saturating_add(partial)
    }

    /// Resolve XP into a full progression record
    ///
    /// The curve must pass [`LevelCurve::validate`].
    pub fn compute(&self, xp: u64) -> LevelProgress {
        debug_assert!(self.validate().is_ok(), "compute called on an invalid level curve");
        let per_prestige = self.xp_per_prestige();
        let prestige_blocks = xp / per_prestige;
        let mut remaining = xp % per_prestige;

        let mut whole_level = MIN_LEVEL + prestige_blocks * self.prestige_levels;
        let mut step = 0;
        // remaining < per_prestige, so this always stops inside the block
        while remaining >= self.step_cost(step) {
            remaining -= self.step_cost(step);
            whole_level += 1;
            step += 1;
        }
        let cost = self.step_cost(step);

        let progress_percentage = progress_hundredths(remaining, cost) as f64 / 100.0;
        let level = whole_level as f64 + progress_percentage / 100.0;
        let next_level = whole_level + 1;

        LevelProgress {
            experience: xp,
            level,
            whole_level,
            prestige: (whole_level - MIN_LEVEL) / self.prestige_levels,
            next_level,
            xp_to_next_level: xp_remaining(self.xp_for_level(next_level), xp),
            progress_percentage,
        }
    }
}

/// Progress through one level in hundredths of a percent, truncated so it never reaches 100%
fn progress_hundredths(into_level: u64, cost: u64) -> u64 {
    ((into_level as u128 * 10_000) / cost as u128) as u64
}

/// XP left until `target`, clamped at zero
pub fn xp_remaining(target: u64, xp: u64) -> u64 {
    match target.checked_sub(xp) {
        Some(left) => left,
        None => {
            log::error!("xp {} is already past the next level threshold {}", xp, target);
            0
        }
    }
}

/// Where a player stands on the level curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelProgress {
    pub experience: u64,
    /// Whole level plus the fraction of the current level completed
    pub level: f64,
    pub whole_level: u64,
    pub prestige: u64,
    pub next_level: u64,
    pub xp_to_next_level: u64,
    /// Progress toward `next_level`, in [0, 100)
    pub progress_percentage: f64,
}

/// Validated experience value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Experience(u64);

impl Experience {
    /// Accept a finite, non-negative number below 2^64; fractional XP is truncated
    pub fn new(value: f64) -> Result<Self, StatsError> {
        if !value.is_finite() {
            return Err(StatsError::InvalidInput(format!("experience {} is not finite", value)));
        }
        if value < 0.0 {
            return Err(StatsError::InvalidInput(format!("experience {} is negative", value)));
        }
        // u64::MAX rounds up to 2^64 as an f64
        if value >= u64::MAX as f64 {
            return Err(StatsError::InvalidInput(format!("experience {} is out of range", value)));
        }
        Ok(Self(value.trunc() as u64))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Integer XP is always valid
impl From<u64> for Experience {
    fn from(xp: u64) -> Self {
        Self(xp)
    }
}

static DEFAULT_CURVE: OnceLock<LevelCurve> = OnceLock::new();

/// Process-wide Bedwars curve
pub fn default_curve() -> &'static LevelCurve {
    DEFAULT_CURVE.get_or_init(LevelCurve::bedwars)
}

/// Compute level progression on the default Bedwars curve
pub fn compute_level(xp: u64) -> LevelProgress {
    default_curve().compute(xp)
}

/// Total XP needed to reach a level on the default Bedwars curve
pub fn xp_for_level(level: u64) -> u64 {
    default_curve().xp_for_level(level)
}

/// Get the prestige name shown next to a player's stars
pub fn prestige_name(prestige: u64) -> &'static str {
    match prestige {
        0 => "Stone",
        1 => "Iron",
        2 => "Gold",
        3 => "Diamond",
        4 => "Emerald",
        5 => "Sapphire",
        6 => "Ruby",
        7 => "Crystal",
        8 => "Opal",
        9 => "Amethyst",
        _ => "Rainbow",
    }
}
