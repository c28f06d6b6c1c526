use thiserror::Error;

#[derive(Error, Debug)]
pub enum LineupError {
    #[error("Invalid distribution for {player}: {reason}")]
    InvalidDistribution { player: String, reason: String },

    #[error("Invalid roster size: expected {expected}, found {found}")]
    InvalidRosterSize { expected: usize, found: usize },

    #[error("Duplicate player in roster: {0}")]
    DuplicatePlayer(String),

    #[error("Invalid speed for {player}: {value}")]
    InvalidSpeed { player: String, value: f64 },

    #[error("Roster mixes reduced and full outcome layouts (first mismatch: {0})")]
    MixedSchema(String),

    #[error("No player in the roster can make an out; an inning would never end")]
    UnendingInning,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Search cancelled after {completed} of {requested} trials")]
    Cancelled { completed: usize, requested: usize },

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl LineupError {
    /// True when the caller can fix the failure by correcting its input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, LineupError::Cancelled { .. })
    }

    /// Stable code prefix used by the JSON API.
    pub fn code(&self) -> &'static str {
        match self {
            LineupError::InvalidDistribution { .. } => "E_INVALID_DISTRIBUTION",
            LineupError::InvalidRosterSize { .. } => "E_ROSTER_SIZE",
            LineupError::DuplicatePlayer(_) => "E_DUPLICATE_PLAYER",
            LineupError::InvalidSpeed { .. } => "E_INVALID_SPEED",
            LineupError::MixedSchema(_) => "E_MIXED_SCHEMA",
            LineupError::UnendingInning => "E_UNENDING_INNING",
            LineupError::InvalidConfig(_) => "E_CONFIG",
            LineupError::InvalidRequest(_) => "E_REQUEST",
            LineupError::Cancelled { .. } => "E_CANCELLED",
            LineupError::Serialization(_) => "E_JSON",
        }
    }
}

pub type Result<T> = std::result::Result<T, LineupError>;
