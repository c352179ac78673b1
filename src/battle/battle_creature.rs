use crate::battle::calculators::{stage_multiplier, MAX_STAGE, MIN_STAGE};
use crate::creature::Creature;
use schema::{Stat, StatTable};
use std::fmt;

/// A creature taking part in a battle.
///
/// Owns the persistent `Creature` for the battle's duration and layers the
/// temporary stat stages on top of it. Stages are thrown away when the
/// creature is handed back with `into_creature`.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleCreature {
    creature: Creature,
    stat_adjusts: StatTable<i8>,
}

impl BattleCreature {
    pub fn new(creature: Creature) -> Self {
        Self {
            creature,
            stat_adjusts: StatTable::default(),
        }
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn creature_mut(&mut self) -> &mut Creature {
        &mut self.creature
    }

    /// Ends the battle for this creature, dropping its stat stages.
    pub fn into_creature(self) -> Creature {
        self.creature
    }

    pub fn stat_adjust(&self, stat: Stat) -> i8 {
        self.stat_adjusts[stat]
    }

    /// Moves the stage of `stat` by `delta`, saturating at [-6, 6].
    /// Returns the change that was actually applied.
    pub fn adjust_stat_adjusts(&mut self, stat: Stat, delta: i8) -> i8 {
        let old = self.stat_adjusts[stat];
        let new = (old as i16 + delta as i16).clamp(MIN_STAGE as i16, MAX_STAGE as i16) as i8;
        self.stat_adjusts[stat] = new;
        new - old
    }

    /// The creature's current value of `stat` scaled by its stage.
    pub fn stat_value(&self, stat: Stat) -> f64 {
        self.creature.current_stat(stat) as f64 * stage_multiplier(self.stat_adjusts[stat])
    }

    pub fn in_battle_name(&self) -> String {
        self.creature.in_battle_name()
    }

    pub fn is_fainted(&self) -> bool {
        self.creature.is_fainted()
    }
}

impl fmt::Display for BattleCreature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.creature)
    }
}
