use crate::creature::Creature;
use schema::Stat;
use serde::{Deserialize, Serialize};

/// Before and after values for the level-up overlay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelUpSnapshot {
    pub name: String,
    pub old_level: u8,
    pub new_level: u8,
    /// (stat, max before, max after) for every stat shown to the player.
    pub stats: Vec<(Stat, u32, u32)>,
}

/// Experience the winner earns for making `defeated` faint. Only one
/// creature ever shares the reward in a single battle.
pub fn xp_for_defeat(defeated: &Creature, winner: &Creature) -> u32 {
    defeated.xp_given(1, winner.was_traded, 1.0)
}

/// Compares every displayed stat at `old_level` against the creature's
/// current level.
pub fn level_up_snapshot(creature: &Creature, old_level: u8) -> LevelUpSnapshot {
    let stats = Stat::all()
        .filter(|stat| !matches!(stat, Stat::Accuracy | Stat::Evasion))
        .map(|stat| {
            (
                stat,
                creature.max_stat_at_level(stat, Some(old_level)),
                creature.max_stat(stat),
            )
        })
        .collect();

    LevelUpSnapshot {
        name: creature.in_battle_name(),
        old_level,
        new_level: creature.level,
        stats,
    }
}
