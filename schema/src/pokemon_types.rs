use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// Percentage multiplier used when the chart has no entry for a pairing.
pub const NEUTRAL_MODIFIER: u16 = 100;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, EnumCount,
)]
pub enum Type {
    Normal,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Dark,
    Fairy,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Directional damage multipliers, stored as integer percentages.
/// `chart[attacking][defending]`; absent pairings are neutral.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeChart {
    chart: HashMap<Type, HashMap<Type, u16>>,
}

impl TypeChart {
    /// An empty chart where every matchup is neutral.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the multiplier for `attacking` hitting `defending`.
    pub fn set(&mut self, attacking: Type, defending: Type, percent: u16) {
        self.chart
            .entry(attacking)
            .or_default()
            .insert(defending, percent);
    }

    /// Builder form of `set`.
    pub fn with(mut self, attacking: Type, defending: Type, percent: u16) -> Self {
        self.set(attacking, defending, percent);
        self
    }

    /// Damage multiplier in percent; 100 when the chart has no entry.
    pub fn damage_modifier(&self, attacking: Type, defending: Type) -> u16 {
        self.chart
            .get(&attacking)
            .and_then(|row| row.get(&defending))
            .copied()
            .unwrap_or(NEUTRAL_MODIFIER)
    }

    /// The generation 1 type chart. Types introduced later (Steel, Dark,
    /// Fairy) are left neutral.
    pub fn standard() -> Self {
        let mut chart = Self::new();
        for attacking in Type::iter() {
            for defending in Type::iter() {
                let percent = gen1_effectiveness(attacking, defending);
                if percent != NEUTRAL_MODIFIER {
                    chart.set(attacking, defending, percent);
                }
            }
        }
        chart
    }
}

/// Returns: 200 = Super Effective, 100 = Normal, 50 = Not Very Effective, 0 = No Effect
fn gen1_effectiveness(attacking: Type, defending: Type) -> u16 {
    use Type::*;

    match (attacking, defending) {
        // Normal
        (Normal, Ghost) => 0,
        (Normal, Rock) => 50,

        // Fire
        (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 50,
        (Fire, Grass) | (Fire, Ice) | (Fire, Bug) => 200,

        // Water
        (Water, Water) | (Water, Grass) | (Water, Dragon) => 50,
        (Water, Fire) | (Water, Ground) | (Water, Rock) => 200,

        // Electric
        (Electric, Electric) | (Electric, Grass) | (Electric, Dragon) => 50,
        (Electric, Ground) => 0,
        (Electric, Water) | (Electric, Flying) => 200,

        // Grass
        (Grass, Fire)
        | (Grass, Grass)
        | (Grass, Poison)
        | (Grass, Flying)
        | (Grass, Bug)
        | (Grass, Dragon) => 50,
        (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 200,

        // Ice
        (Ice, Fire) | (Ice, Water) | (Ice, Ice) => 50,
        (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 200,

        // Fighting
        (Fighting, Poison) | (Fighting, Flying) | (Fighting, Psychic) | (Fighting, Bug) => 50,
        (Fighting, Ghost) => 0,
        (Fighting, Normal) | (Fighting, Ice) | (Fighting, Rock) => 200,

        // Poison
        (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 50,
        (Poison, Grass) | (Poison, Bug) => 200,

        // Ground
        (Ground, Grass) | (Ground, Bug) => 50,
        (Ground, Flying) => 0,
        (Ground, Fire) | (Ground, Electric) | (Ground, Poison) | (Ground, Rock) => 200,

        // Flying
        (Flying, Electric) | (Flying, Rock) => 50,
        (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 200,

        // Psychic
        (Psychic, Psychic) => 50,
        (Psychic, Fighting) | (Psychic, Poison) => 200,

        // Bug
        (Bug, Fire) | (Bug, Fighting) | (Bug, Flying) | (Bug, Ghost) => 50,
        (Bug, Grass) | (Bug, Psychic) | (Bug, Poison) => 200,

        // Rock
        (Rock, Fighting) | (Rock, Ground) => 50,
        (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 200,

        // Ghost
        (Ghost, Normal) | (Ghost, Psychic) => 0,
        (Ghost, Ghost) => 200,

        // Dragon
        (Dragon, Dragon) => 200,

        _ => NEUTRAL_MODIFIER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_is_neutral() {
        let chart = TypeChart::new();
        assert_eq!(chart.damage_modifier(Type::Fire, Type::Grass), 100);
    }

    #[test]
    fn test_chart_is_directional() {
        let chart = TypeChart::new().with(Type::Fire, Type::Grass, 200);
        assert_eq!(chart.damage_modifier(Type::Fire, Type::Grass), 200);
        assert_eq!(chart.damage_modifier(Type::Grass, Type::Fire), 100);
    }

    #[test]
    fn test_standard_chart_samples() {
        let chart = TypeChart::standard();
        assert_eq!(chart.damage_modifier(Type::Water, Type::Fire), 200);
        assert_eq!(chart.damage_modifier(Type::Fire, Type::Water), 50);
        assert_eq!(chart.damage_modifier(Type::Electric, Type::Ground), 0);
        assert_eq!(chart.damage_modifier(Type::Normal, Type::Normal), 100);
        assert_eq!(chart.damage_modifier(Type::Dark, Type::Psychic), 100);
    }
}
