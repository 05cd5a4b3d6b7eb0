use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeagueRankError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    /// The multiplier table has no entry for the requested level. The ceiling
    /// and the table disagree, which is a caller bug; never substitute a
    /// nearby level.
    #[error("Unknown CP multiplier for level {level} (index {index})")]
    UnknownLevel { level: f64, index: i64 },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Cache lock poisoned")]
    Lock,
}

pub type LrResult<T> = Result<T, LeagueRankError>;
