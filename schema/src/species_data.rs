use crate::{GrowthRate, MoveId, Stat, StatTable, Type};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesId(pub u16);

/// Base value every species carries for Accuracy and Evasion.
pub const BASE_ACCURACY_EVASION: u16 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub id: SpeciesId,
    pub pokedex_number: u16,
    pub name: String,
    pub types: Vec<Type>,
    pub base_stats: StatTable<u16>,
    pub base_xp_yield: u16,
    pub growth_rate: GrowthRate,
    /// level -> moves learned at that level
    pub level_moves: BTreeMap<u8, Vec<MoveId>>,
    pub capture_rate: u8,
}

impl Species {
    pub fn has_type(&self, pokemon_type: Type) -> bool {
        self.types.contains(&pokemon_type)
    }

    pub fn base_stat(&self, stat: Stat) -> u16 {
        self.base_stats[stat]
    }

    /// The moves a freshly generated creature of this species knows at
    /// `level`: the most recently learned ones, newest level first, capped
    /// at `max_moves`.
    pub fn moves_at_level(&self, level: u8, max_moves: usize) -> Vec<MoveId> {
        let mut moves = Vec::new();
        if level == 0 {
            return moves;
        }

        for (_, learned) in self.level_moves.range(1..=level).rev() {
            moves.extend(learned.iter().copied());
            if moves.len() >= max_moves {
                break;
            }
        }

        moves.truncate(max_moves);
        moves
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
