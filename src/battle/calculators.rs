//! Pure battle formulas. Nothing here mutates a creature; the executor
//! applies the results.

use crate::battle::battle_creature::BattleCreature;
use crate::battle::rng::TurnRng;
use crate::config::BattleConfig;
use log::debug;
use schema::{MoveData, Type, TypeChart, NEUTRAL_MODIFIER};

pub const MIN_STAGE: i8 = -6;
pub const MAX_STAGE: i8 = 6;

/// Stat values are clamped to at least this before being used as a divisor.
pub const MIN_STAT_DIVISOR: f64 = 1.0;

/// Factor a stat stage applies to the stat value, from 1/4 at -6 to 4 at +6.
pub fn stage_multiplier(stage: i8) -> f64 {
    match stage.clamp(MIN_STAGE, MAX_STAGE) {
        -6 => 1.0 / 4.0,
        -5 => 2.0 / 7.0,
        -4 => 1.0 / 3.0,
        -3 => 2.0 / 5.0,
        -2 => 1.0 / 2.0,
        -1 => 2.0 / 3.0,
        0 => 1.0,
        positive => 1.0 + positive as f64 * 0.5,
    }
}

/// Whether the move connects. Moves without a positive base accuracy never
/// hit; otherwise the attacker's accuracy stat is compared against the
/// defender's evasion stat.
pub fn move_hits(
    move_data: &MoveData,
    attacker: &BattleCreature,
    defender: &BattleCreature,
    rng: &mut TurnRng,
) -> bool {
    let base_accuracy = match move_data.base_accuracy {
        Some(accuracy) if accuracy > 0 => accuracy as f64,
        _ => return false,
    };

    let accuracy = attacker.stat_value(move_data.accuracy_stat);
    let evasion = defender.stat_value(move_data.evasion_stat).max(MIN_STAT_DIVISOR);
    let chance = base_accuracy / 100.0 * (accuracy / evasion);

    let roll = rng.next_unit("hit check");
    debug!("Hit check for {}: rolled {:.3} against {:.3}", move_data.name, roll, chance);
    roll < chance
}

/// Critical hit multiplier for one damaging hit.
pub fn critical_modifier(config: &BattleConfig, rng: &mut TurnRng) -> f64 {
    if rng.next_percent("critical hit") < config.critical_chance_percent {
        config.critical_multiplier
    } else {
        1.0
    }
}

/// Same-type attack bonus.
pub fn stab_modifier(config: &BattleConfig, move_type: Type, attacker_types: &[Type]) -> f64 {
    if attacker_types.contains(&move_type) {
        config.stab_multiplier
    } else {
        1.0
    }
}

/// Combined effectiveness of `move_type` against every defending type. A
/// defender without types takes neutral damage.
pub fn type_modifier(type_chart: &TypeChart, move_type: Type, defender_types: &[Type]) -> f64 {
    defender_types.iter().fold(1.0, |modifier, &defending| {
        modifier * type_chart.damage_modifier(move_type, defending) as f64
            / NEUTRAL_MODIFIER as f64
    })
}

/// The damage formula, truncated to an integer.
pub fn calculate_damage(
    attacker_level: u8,
    attack_value: f64,
    defense_value: f64,
    base_power: u16,
    modifier: f64,
) -> u32 {
    let defense_value = defense_value.max(MIN_STAT_DIVISOR);
    let level_factor = (2.0 * attacker_level as f64 + 10.0) / 250.0;
    let damage = (level_factor * (attack_value / defense_value) * base_power as f64 + 2.0) * modifier;

    damage.max(0.0) as u32
}
