use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Every statistic a creature carries. Accuracy and Evasion are ordinary
/// stats here: species give them a base of 1 and they share the non-HP
/// max stat formula.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
    EnumCount,
)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
    Accuracy,
    Evasion,
}

impl Stat {
    /// Position of the stat inside a `StatTable`.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "Attack",
            Stat::Defense => "Defense",
            Stat::SpAttack => "Special Attack",
            Stat::SpDefense => "Special Defense",
            Stat::Speed => "Speed",
            Stat::Accuracy => "Accuracy",
            Stat::Evasion => "Evasion",
        }
    }

    /// Every stat, in declaration order.
    pub fn all() -> impl Iterator<Item = Stat> {
        Stat::iter()
    }

    pub fn is_hp(self) -> bool {
        matches!(self, Stat::Hp)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value for every `Stat`, stored densely in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatTable<T> {
    values: [T; Stat::COUNT],
}

impl<T: Copy> StatTable<T> {
    /// A table holding the same value for every stat.
    pub fn filled(value: T) -> Self {
        Self {
            values: [value; Stat::COUNT],
        }
    }

    /// Builds a table by evaluating `f` once per stat.
    pub fn from_fn(mut f: impl FnMut(Stat) -> T) -> Self {
        let mut values = [f(Stat::Hp); Stat::COUNT];
        for stat in Stat::iter().skip(1) {
            values[stat.index()] = f(stat);
        }
        Self { values }
    }

    pub fn get(&self, stat: Stat) -> T {
        self.values[stat.index()]
    }

    pub fn set(&mut self, stat: Stat, value: T) {
        self.values[stat.index()] = value;
    }

    /// Iterates `(stat, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, T)> + '_ {
        Stat::iter().map(move |stat| (stat, self.values[stat.index()]))
    }
}

impl<T: Copy + Default> Default for StatTable<T> {
    fn default() -> Self {
        Self::filled(T::default())
    }
}

impl<T> Index<Stat> for StatTable<T> {
    type Output = T;

    fn index(&self, stat: Stat) -> &T {
        &self.values[stat.index()]
    }
}

impl<T> IndexMut<Stat> for StatTable<T> {
    fn index_mut(&mut self, stat: Stat) -> &mut T {
        &mut self.values[stat.index()]
    }
}
