//! Error types
//!
//! One error enum for the whole library. The binary wraps it in `anyhow`.

use thiserror::Error;

/// Errors produced while validating input, loading data, or assembling a report
#[derive(Debug, Error)]
pub enum StatsError {
    /// Experience (or another numeric input) was negative, non-finite or not a number
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("Player not found")]
    PlayerNotFound,

    /// The player exists but has never played Bedwars
    #[error("BedWars data not found")]
    MissingGameStats,

    /// Upstream document reported a failure cause (bad API key, malformed UUID, ...)
    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("invalid gamemode schema: {0}")]
    InvalidSchema(String),

    #[error("invalid level curve: {0}")]
    InvalidCurve(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("RON serialization error: {0}")]
    RonSer(#[from] ron::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
