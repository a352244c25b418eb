//! Progression systems

pub mod xp;
pub mod network;

pub use xp::{
    LevelCurve, LevelProgress, Experience, MIN_LEVEL,
    compute_level, xp_for_level, xp_remaining, prestige_name, default_curve,
};
pub use network::network_level;
