// In: src/creature.rs

//! The persistent roster entry for a creature, independent of any battle.

use crate::moves::Move;
use schema::{Ailment, Species, Stat, StatTable, XpLookup};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{StaticDataError, StaticDataResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub species: Species,
    pub level: u8,
    pub nickname: String,                  // Species name if no nickname
    pub trainer: Option<Trainer>,          // None for wild creatures
    pub individual_values: StatTable<u8>,
    pub effort_values: StatTable<u16>,
    pub was_traded: bool,
    pub moves: Vec<Move>,
    /// Current value of every stat, always within [0, max_stat].
    stats: StatTable<u32>,
    pub current_xp: u32,
    pub fainted: bool,
    /// Tracked only; ailments have no effect on battle mechanics.
    pub ailments: Vec<Ailment>,
}

impl Creature {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        species: Species,
        level: u8,
        nickname: Option<String>,
        trainer: Option<Trainer>,
        individual_values: StatTable<u8>,
        effort_values: StatTable<u16>,
        was_traded: bool,
        moves: Vec<Move>,
        current_xp: u32,
    ) -> Self {
        let nickname = nickname.unwrap_or_else(|| species.name.clone());
        let mut creature = Creature {
            species,
            level,
            nickname,
            trainer,
            individual_values,
            effort_values,
            was_traded,
            moves,
            stats: StatTable::default(),
            current_xp,
            fainted: false,
            ailments: Vec::new(),
        };
        creature.stats = StatTable::from_fn(|stat| creature.max_stat(stat));
        creature
    }

    /// The stat value at the creature's current level.
    pub fn max_stat(&self, stat: Stat) -> u32 {
        self.max_stat_at_level(stat, None)
    }

    /// The stat value of a creature is a function of its level, species,
    /// IVs and EVs and differs slightly for hitpoints and normal stats.
    ///
    /// Passing a level computes what the stat was (or will be) at that level,
    /// which is how the level-up overlay shows "before" values.
    pub fn max_stat_at_level(&self, stat: Stat, level: Option<u8>) -> u32 {
        let level = level.unwrap_or(self.level) as f64;
        let iv = self.individual_values[stat] as f64;
        let base = self.species.base_stat(stat) as f64;
        let ev_bonus = (self.effort_values[stat] as f64).sqrt() / 8.0;

        let value = if stat.is_hp() {
            (iv + base + ev_bonus + 50.0) * level / 50.0 + 10.0
        } else {
            (iv + base + ev_bonus) * level / 50.0 + 5.0
        };

        value as u32
    }

    pub fn current_stat(&self, stat: Stat) -> u32 {
        self.stats[stat]
    }

    pub fn current_hp(&self) -> u32 {
        self.current_stat(Stat::Hp)
    }

    /// Reduces a stat by `delta` (negative values restore), capping the
    /// result at [0, max_stat].
    pub fn adjust_stat(&mut self, stat: Stat, delta: i64) {
        let max = self.max_stat(stat) as i64;
        let adjusted = (self.stats[stat] as i64 - delta).clamp(0, max);
        self.stats[stat] = adjusted as u32;
    }

    /// Raises each current stat by how much its max changed since
    /// `old_level`. Damage already taken is kept.
    pub fn refresh_stats_after_level_up(&mut self, old_level: u8) {
        let current_stats: Vec<(Stat, u32)> = self.stats.iter().collect();
        for (stat, current) in current_stats {
            let old_max = self.max_stat_at_level(stat, Some(old_level));
            let new_max = self.max_stat(stat);
            let gained = new_max.saturating_sub(old_max);
            self.stats[stat] = (current + gained).min(new_max);
        }
    }

    /// Experience earned for defeating this creature.
    pub fn xp_given(&self, number_winners: u32, winner_traded: bool, winner_modifier: f64) -> u32 {
        let winners = number_winners.max(1) as f64;
        let mut xp_given =
            self.species.base_xp_yield as f64 * winner_modifier * self.level as f64 / (7.0 * winners);
        if winner_traded {
            xp_given *= 1.5;
        }
        if self.trainer.is_some() {
            xp_given *= 1.5;
        }

        xp_given as u32
    }

    /// Adds experience and recomputes the level from the growth curve.
    /// Returns whether the level changed; stats are not re-derived here.
    /// Nothing changes if the growth rate is missing from `xp_lookup`.
    pub fn add_xp(&mut self, xp_lookup: &XpLookup, xp: u32) -> StaticDataResult<bool> {
        let current_xp = self.current_xp.saturating_add(xp);
        let level = xp_lookup
            .level_at_xp(self.species.growth_rate, current_xp)
            .ok_or(StaticDataError::GrowthRateNotFound(self.species.growth_rate))?;

        let old_level = self.level;
        self.current_xp = current_xp;
        self.level = level;
        Ok(old_level != level)
    }

    /// Name used in battle narration, e.g. "Wild Pidgey" or "Gary's Eevee".
    pub fn in_battle_name(&self) -> String {
        match &self.trainer {
            Some(trainer) => format!("{}'s {}", trainer.name, self.nickname),
            None => format!("Wild {}", self.nickname),
        }
    }

    pub fn is_fainted(&self) -> bool {
        self.fainted
    }
}

impl fmt::Display for Creature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.in_battle_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use schema::{GrowthRate, SpeciesId, Type};
    use std::collections::{BTreeMap, HashMap};

    fn bulbasaur() -> Species {
        let mut base_stats = StatTable::filled(1);
        base_stats[Stat::Hp] = 45;
        base_stats[Stat::Attack] = 49;
        base_stats[Stat::Defense] = 49;
        base_stats[Stat::SpAttack] = 65;
        base_stats[Stat::SpDefense] = 65;
        base_stats[Stat::Speed] = 45;

        Species {
            id: SpeciesId(1),
            pokedex_number: 1,
            name: "Bulbasaur".to_string(),
            types: vec![Type::Grass, Type::Poison],
            base_stats,
            base_xp_yield: 64,
            growth_rate: GrowthRate::MediumSlow,
            level_moves: BTreeMap::new(),
            capture_rate: 45,
        }
    }

    fn creature(level: u8, iv: u8, ev: u16, trainer: Option<Trainer>) -> Creature {
        Creature::new(
            bulbasaur(),
            level,
            None,
            trainer,
            StatTable::filled(iv),
            StatTable::filled(ev),
            false,
            Vec::new(),
            0,
        )
    }

    #[rstest]
    #[case(1, 1, 0, Stat::Hp, 11)]
    #[case(1, 15, 0, Stat::Attack, 6)]
    #[case(50, 10, 0, Stat::Hp, 115)]
    #[case(50, 10, 0, Stat::Attack, 64)]
    #[case(50, 10, 64, Stat::Attack, 65)]
    #[case(100, 10, 6400, Stat::Speed, 135)]
    fn test_max_stat_formula(
        #[case] level: u8,
        #[case] iv: u8,
        #[case] ev: u16,
        #[case] stat: Stat,
        #[case] expected: u32,
    ) {
        assert_eq!(creature(level, iv, ev, None).max_stat(stat), expected);
    }

    #[test]
    fn test_max_stat_historical_level() {
        let creature = creature(50, 10, 0, None);
        assert_eq!(creature.max_stat_at_level(Stat::Attack, Some(1)), 6);
        assert_eq!(creature.max_stat_at_level(Stat::Attack, None), 64);
    }

    #[test]
    fn test_new_creature_starts_at_full_stats() {
        let creature = creature(10, 5, 0, None);
        assert_eq!(creature.current_hp(), creature.max_stat(Stat::Hp));
        assert_eq!(creature.nickname, "Bulbasaur");
        assert!(!creature.fainted);
    }

    #[rstest]
    #[case(5, 25)]
    #[case(1000, 0)]
    #[case(-1000, 30)]
    fn test_adjust_stat_clamps(#[case] delta: i64, #[case] expected: u32) {
        let mut creature = creature(10, 5, 0, None);
        assert_eq!(creature.current_hp(), 30);
        creature.adjust_stat(Stat::Hp, delta);
        assert_eq!(creature.current_hp(), expected);
        assert!(creature.current_hp() <= creature.max_stat(Stat::Hp));
    }

    #[test]
    fn test_xp_given() {
        // 64 * 10 / 7 = 91.4
        assert_eq!(creature(10, 5, 0, None).xp_given(1, false, 1.0), 91);
        // Trainer and traded bonuses stack: 91.4 * 1.5 * 1.5 = 205.7
        let owned = creature(10, 5, 0, Some(Trainer::new("Brock")));
        assert_eq!(owned.xp_given(1, true, 1.0), 205);
        // Shared between two winners: 64 * 10 / 14 = 45.7
        assert_eq!(creature(10, 5, 0, None).xp_given(2, false, 1.0), 45);
    }

    #[test]
    fn test_add_xp_levels_up() {
        let lookup = XpLookup::standard();
        let mut creature = creature(5, 5, 0, None);
        creature.current_xp = lookup.xp_at_level(GrowthRate::MediumSlow, 5).unwrap();

        assert!(!creature.add_xp(&lookup, 1).unwrap());
        assert_eq!(creature.level, 5);

        let needed = lookup.xp_at_level(GrowthRate::MediumSlow, 7).unwrap() - creature.current_xp;
        assert!(creature.add_xp(&lookup, needed).unwrap());
        assert_eq!(creature.level, 7);
    }

    #[test]
    fn test_add_xp_with_unknown_curve_changes_nothing() {
        let mut creature = creature(5, 5, 0, None);
        let xp_before = creature.current_xp;

        let result = creature.add_xp(&XpLookup::new(HashMap::new()), 500);

        assert_eq!(
            result,
            Err(StaticDataError::GrowthRateNotFound(GrowthRate::MediumSlow))
        );
        assert_eq!(creature.current_xp, xp_before);
        assert_eq!(creature.level, 5);
    }

    #[test]
    fn test_refresh_stats_keeps_damage() {
        let mut creature = creature(5, 5, 0, None);
        creature.adjust_stat(Stat::Hp, 4);
        let damaged = creature.current_hp();
        let old_max = creature.max_stat(Stat::Hp);

        creature.level = 20;
        creature.refresh_stats_after_level_up(5);

        let gained = creature.max_stat(Stat::Hp) - old_max;
        assert_eq!(creature.current_hp(), damaged + gained);
        assert_eq!(creature.current_stat(Stat::Attack), creature.max_stat(Stat::Attack));
    }

    #[test]
    fn test_in_battle_name() {
        assert_eq!(creature(5, 5, 0, None).in_battle_name(), "Wild Bulbasaur");
        let owned = creature(5, 5, 0, Some(Trainer::new("Misty")));
        assert_eq!(owned.in_battle_name(), "Misty's Bulbasaur");
    }
}
