use crate::battle::state::BattleSummary;
use crate::creature::{Creature, Trainer};
use crate::errors::ActionError;
use log::info;
use schema::PokeballId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The human player: their roster and their pokeball inventory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub name: String,
    pub creatures: Vec<Creature>,
    pokeballs: BTreeMap<PokeballId, u32>,
    // Roster slot of the creature currently lent out to a battle.
    battling_slot: Option<usize>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            creatures: Vec::new(),
            pokeballs: BTreeMap::new(),
            battling_slot: None,
        }
    }

    pub fn trainer(&self) -> Trainer {
        Trainer::new(self.name.clone())
    }

    pub fn add_pokeballs(&mut self, pokeball: PokeballId, count: u32) {
        *self.pokeballs.entry(pokeball).or_insert(0) += count;
    }

    pub fn pokeball_count(&self, pokeball: PokeballId) -> u32 {
        self.pokeballs.get(&pokeball).copied().unwrap_or(0)
    }

    /// Every pokeball the player has at least one of, with its count.
    pub fn available_pokeballs(&self) -> Vec<(PokeballId, u32)> {
        self.pokeballs
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(&pokeball, &count)| (pokeball, count))
            .collect()
    }

    /// Spends one pokeball.
    pub fn use_pokeball(&mut self, pokeball: PokeballId) -> Result<(), ActionError> {
        match self.pokeballs.get_mut(&pokeball) {
            Some(count) if *count > 0 => {
                *count -= 1;
                Ok(())
            }
            _ => Err(ActionError::PokeballNotOwned(pokeball)),
        }
    }

    /// Adds a caught creature to the roster under this player's name.
    pub fn catch_creature(&mut self, mut creature: Creature) {
        info!("{} joined {}'s roster", creature.nickname, self.name);
        creature.trainer = Some(self.trainer());
        self.creatures.push(creature);
    }

    /// Takes the first creature able to fight out of the roster so a battle
    /// can own it. `None` if every creature has fainted.
    pub fn start_battle(&mut self) -> Option<Creature> {
        let slot = self.creatures.iter().position(|creature| !creature.is_fainted())?;
        self.battling_slot = Some(slot);
        Some(self.creatures.remove(slot))
    }

    /// Puts the battling creature back in its slot and keeps the opponent
    /// if it was caught.
    pub fn end_battle(&mut self, summary: BattleSummary) {
        let slot = self
            .battling_slot
            .take()
            .unwrap_or(0)
            .min(self.creatures.len());
        self.creatures.insert(slot, summary.player_creature);

        if summary.caught {
            self.catch_creature(summary.opponent_creature);
        }
    }
}
