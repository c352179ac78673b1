// In: src/static_data.rs

//! The already-loaded, read-only reference tables a battle consumes.

use crate::errors::{ConfigError, StaticDataError, StaticDataResult};
use schema::{
    MoveData, MoveId, Pokeball, PokeballId, Species, SpeciesId, TypeChart, XpLookup,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticGameData {
    pub species: HashMap<SpeciesId, Species>,
    pub moves: HashMap<MoveId, MoveData>,
    pub type_chart: TypeChart,
    pub xp_lookup: XpLookup,
    pub pokeballs: HashMap<PokeballId, Pokeball>,
}

impl StaticGameData {
    pub fn new(type_chart: TypeChart, xp_lookup: XpLookup) -> Self {
        Self {
            type_chart,
            xp_lookup,
            ..Self::default()
        }
    }

    /// Deserializes a complete data bundle from RON.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    pub fn with_species(mut self, species: Species) -> Self {
        self.species.insert(species.id, species);
        self
    }

    pub fn with_move(mut self, id: MoveId, move_data: MoveData) -> Self {
        self.moves.insert(id, move_data);
        self
    }

    pub fn with_pokeball(mut self, pokeball: Pokeball) -> Self {
        self.pokeballs.insert(pokeball.id, pokeball);
        self
    }

    pub fn species(&self, id: SpeciesId) -> StaticDataResult<&Species> {
        self.species
            .get(&id)
            .ok_or(StaticDataError::SpeciesNotFound(id))
    }

    pub fn move_data(&self, id: MoveId) -> StaticDataResult<&MoveData> {
        self.moves.get(&id).ok_or(StaticDataError::MoveNotFound(id))
    }

    pub fn pokeball(&self, id: PokeballId) -> StaticDataResult<&Pokeball> {
        self.pokeballs
            .get(&id)
            .ok_or(StaticDataError::PokeballNotFound(id))
    }

    /// Minimum XP a creature of `species` needs to be at `level`.
    pub fn xp_at_level(&self, species: &Species, level: u8) -> StaticDataResult<u32> {
        self.xp_lookup
            .xp_at_level(species.growth_rate, level)
            .ok_or(StaticDataError::InvalidLevel {
                rate: species.growth_rate,
                level,
            })
    }

    /// The level a creature of `species` is at with exactly `xp` experience.
    pub fn level_at_xp(&self, species: &Species, xp: u32) -> StaticDataResult<u8> {
        self.xp_lookup
            .level_at_xp(species.growth_rate, xp)
            .ok_or(StaticDataError::GrowthRateNotFound(species.growth_rate))
    }
}
