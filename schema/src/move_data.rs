use crate::{Stat, StatTable, Type};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key into the move catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MoveId(pub u16);

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "move #{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

impl DamageClass {
    /// The (attack, defense) stat pair a move of this class compares.
    /// Status moves deal no damage and have neither.
    pub fn stat_pair(self) -> Option<(Stat, Stat)> {
        match self {
            DamageClass::Physical => Some((Stat::Attack, Stat::Defense)),
            DamageClass::Special => Some((Stat::SpAttack, Stat::SpDefense)),
            DamageClass::Status => None,
        }
    }
}

/// Which side of a 1v1 battle a move lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSide {
    User,
    Opponent,
}

/// Every targeting category a move can declare. Only a subset is
/// meaningful in a two-creature battle; see `MoveTargetCategory::side`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTargetCategory {
    SpecificMove,
    SelectedPokemonMeFirst,
    Ally,
    UsersField,
    UserOrAlly,
    OpponentsField,
    User,
    RandomOpponent,
    AllOtherPokemon,
    SelectedPokemon,
    AllOpponents,
    EntireField,
    UserAndAllies,
    AllPokemon,
}

impl MoveTargetCategory {
    /// Resolves the category to a side for a 1v1 battle. `EntireField`
    /// lands on the opponent. Categories with no 1v1 meaning resolve to
    /// `None` and the move has no further effect.
    pub fn side(self) -> Option<TargetSide> {
        use MoveTargetCategory::*;

        match self {
            EntireField | SelectedPokemon | RandomOpponent | AllOtherPokemon | OpponentsField
            | AllOpponents => Some(TargetSide::Opponent),
            User | UsersField | UserOrAlly => Some(TargetSide::User),
            SpecificMove | SelectedPokemonMeFirst | Ally | UserAndAllies | AllPokemon => None,
        }
    }
}

/// Non-volatile ailments a move can carry. Tracked as data only; they have
/// no mechanical effect in battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ailment {
    Paralysis,
    Sleep,
    Freeze,
    Burn,
    Poison,
    Confusion,
    Infatuation,
    Trap,
    Nightmare,
    Torment,
    Disable,
    Yawn,
    HealBlock,
    NoTypeImmunity,
    LeechSeed,
    Embargo,
    PerishSong,
    Ingrain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub name: String,
    pub move_type: Type,
    pub max_pp: u8,
    /// `None` for moves that deal no damage.
    pub base_power: Option<u16>,
    /// `None` or zero means the hit check always fails.
    pub base_accuracy: Option<u8>,
    pub target: MoveTargetCategory,
    /// Stage deltas applied to the target, one per stat.
    pub stat_changes: StatTable<i8>,
    /// `None` for moves that deal no damage.
    pub attack_stat: Option<Stat>,
    pub defense_stat: Option<Stat>,
    pub accuracy_stat: Stat,
    pub evasion_stat: Stat,
    pub ailment: Option<Ailment>,
}

impl MoveData {
    /// Creates move data with the attack and defense stats implied by its
    /// damage class and no stat changes.
    pub fn new(
        name: impl Into<String>,
        move_type: Type,
        damage_class: DamageClass,
        max_pp: u8,
        base_power: Option<u16>,
        base_accuracy: Option<u8>,
        target: MoveTargetCategory,
    ) -> Self {
        let stat_pair = damage_class.stat_pair();
        MoveData {
            name: name.into(),
            move_type,
            max_pp,
            base_power,
            base_accuracy,
            target,
            stat_changes: StatTable::default(),
            attack_stat: stat_pair.map(|(attack, _)| attack),
            defense_stat: stat_pair.map(|(_, defense)| defense),
            accuracy_stat: Stat::Accuracy,
            evasion_stat: Stat::Evasion,
            ailment: None,
        }
    }

    /// Adds a stage delta for `stat`.
    pub fn with_stat_change(mut self, stat: Stat, delta: i8) -> Self {
        self.stat_changes[stat] = delta;
        self
    }

    /// Whether the move affects the target's HP.
    pub fn is_damaging(&self) -> bool {
        self.attack_stat.is_some()
    }

    /// Whether the move changes any stat stage. Independent of whether it
    /// also deals damage.
    pub fn changes_stats(&self) -> bool {
        self.stat_changes.iter().any(|(_, delta)| delta != 0)
    }
}

impl fmt::Display for MoveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
