use schema::{GrowthRate, MoveId, PokeballId, SpeciesId};
use thiserror::Error;

/// Main error type for the creature battle engine.
///
/// Errors only surface at the input boundary: once a turn or a throw has
/// been accepted, everything that happens inside it is reported as battle
/// messages instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BattleError {
    /// Error related to looking up static reference data
    #[error("Static data error: {0}")]
    StaticData(#[from] StaticDataError),
    /// Error related to invalid player input
    #[error("Action error: {0}")]
    Action(#[from] ActionError),
    /// Error related to loading configuration or data bundles
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to static data lookups
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StaticDataError {
    #[error("Species not found: {0:?}")]
    SpeciesNotFound(SpeciesId),
    #[error("Move not found: {0}")]
    MoveNotFound(MoveId),
    #[error("Pokeball not found: {0:?}")]
    PokeballNotFound(PokeballId),
    #[error("Growth rate missing from XP table: {0:?}")]
    GrowthRateNotFound(GrowthRate),
    #[error("Level {level} is not defined for growth rate {rate:?}")]
    InvalidLevel { rate: GrowthRate, level: u8 },
}

/// Errors related to player actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Move index is beyond the creature's move list
    #[error("Invalid move index: {0}")]
    InvalidMoveIndex(usize),
    /// The player has none of this pokeball left
    #[error("Pokeball not owned: {0:?}")]
    PokeballNotOwned(PokeballId),
    /// Creatures that belong to a trainer cannot be caught
    #[error("Cannot catch a creature owned by {trainer}")]
    CatchNotAllowed { trainer: String },
    /// A creature already fainted; no further actions are accepted
    #[error("The battle is already over")]
    BattleOver,
}

/// Errors related to reading configuration and data bundles
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Malformed RON: {0}")]
    Parse(String),
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(err: ron::error::SpannedError) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Type alias for Results using BattleError
pub type BattleResult<T> = Result<T, BattleError>;

/// Type alias for Results using StaticDataError
pub type StaticDataResult<T> = Result<T, StaticDataError>;
