// In: src/lib.rs

//! Creature Battle Engine
//!
//! A turn-based, one-on-one battle system between a player's creature and a
//! wild or trainer-owned opponent: move execution with stat stages and type
//! effectiveness, speed-ordered turns, experience and level-ups, and
//! pokeball captures. All randomness flows through a single seedable
//! `TurnRng`, so whole battles can be replayed.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod config;
pub mod creature;
pub mod creature_creator;
pub mod errors;
pub mod moves;
pub mod player;
pub mod static_data;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
// Static reference data definitions.
pub use schema::{
    Ailment, DamageClass, GrowthRate, MoveData, MoveId, MoveTargetCategory, Pokeball, PokeballId,
    Species, SpeciesId, Stat, StatTable, Type, TypeChart, XpLookup,
};

// --- From this crate's modules (`src/`) ---

// Battle session and turn resolution.
pub use battle::ai::{MoveSelector, RandomMoveAi, ScoringAi};
pub use battle::battle_creature::BattleCreature;
pub use battle::catch::{throw_pokeball, CatchOutcome};
pub use battle::messages::{BattleMessage, MessageLog, StatChange};
pub use battle::progression::LevelUpSnapshot;
pub use battle::rng::TurnRng;
pub use battle::state::{BattleData, BattleSummary, Opponent};
pub use battle::turn_orchestrator::{resolve_turn, TurnOutcome};

// Persistent runtime types.
pub use config::BattleConfig;
pub use creature::{Creature, Trainer};
pub use creature_creator::create_wild_creature;
pub use moves::Move;
pub use player::Player;
pub use static_data::StaticGameData;

// Crate-specific error and result types.
pub use errors::{
    ActionError, BattleError, BattleResult, ConfigError, StaticDataError, StaticDataResult,
};
