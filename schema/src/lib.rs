// Creature Battle Schema - Static reference data definitions
// This crate contains the read-only tables the battle engine consumes:
// stats, types, the type chart, move and species data, growth curves and
// the pokeball catalogue. Nothing here is mutated during a battle.

// Re-export the main types
pub use growth::*;
pub use move_data::*;
pub use pokeball::*;
pub use pokemon_types::*;
pub use species_data::*;
pub use stat::*;

pub mod growth;
pub mod move_data;
pub mod pokeball;
pub mod pokemon_types;
pub mod species_data;
pub mod stat;
