//! Executes one creature's move against another: PP, hit check, damage,
//! stat stages and fainting.

use crate::battle::battle_creature::BattleCreature;
use crate::battle::calculators::{
    calculate_damage, critical_modifier, move_hits, stab_modifier, type_modifier,
};
use crate::battle::messages::{BattleMessage, MessageLog, StatChange};
use crate::battle::rng::TurnRng;
use crate::config::BattleConfig;
use crate::static_data::StaticGameData;
use log::{debug, info};
use schema::{MoveData, Stat, TargetSide};

/// The data a move needs besides the two combatants.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    pub static_data: &'a StaticGameData,
    pub config: &'a BattleConfig,
}

/// Performs the move in slot `move_index` of `attacker` against `defender`.
///
/// Spends one PP, then hit checks and applies damage and stat stages to
/// whichever side the move targets. The index must already be validated;
/// an empty slot does nothing.
pub fn perform_move(
    move_index: usize,
    attacker: &mut BattleCreature,
    defender: &mut BattleCreature,
    context: MoveContext<'_>,
    rng: &mut TurnRng,
) -> MessageLog {
    let mut log = MessageLog::new();
    let user = attacker.in_battle_name();

    let Some(move_instance) = attacker.creature_mut().moves.get_mut(move_index) else {
        return log;
    };

    if !move_instance.use_move() {
        log.push(BattleMessage::NotEnoughPp {
            move_name: move_instance.name().to_string(),
        });
        return log;
    }
    let move_data = move_instance.data.clone();

    log.push(BattleMessage::MoveUsed {
        user: user.clone(),
        move_name: move_data.name.clone(),
    });

    if !move_hits(&move_data, attacker, defender, rng) {
        log.push(BattleMessage::AttackMissed { user });
        return log;
    }

    let Some(side) = move_data.target.side() else {
        debug!("{} has no target in a single battle", move_data.name);
        return log;
    };

    if move_data.is_damaging() {
        let target: &BattleCreature = match side {
            TargetSide::User => &*attacker,
            TargetSide::Opponent => &*defender,
        };
        let damage = damage_calculation(&move_data, attacker, target, context, rng, &mut log);

        let target = match side {
            TargetSide::User => &mut *attacker,
            TargetSide::Opponent => &mut *defender,
        };
        target.creature_mut().adjust_stat(Stat::Hp, damage as i64);
        debug!(
            "{} took {} damage, {} HP left",
            target.in_battle_name(),
            damage,
            target.creature().current_hp()
        );
        check_fainted(target, &mut log);
    }

    if move_data.changes_stats() {
        let target = match side {
            TargetSide::User => attacker,
            TargetSide::Opponent => defender,
        };
        apply_stat_changes(&move_data, target, &mut log);
    }

    log
}

/// Rolls the critical hit, narrates effectiveness and returns the HP loss.
fn damage_calculation(
    move_data: &MoveData,
    attacker: &BattleCreature,
    target: &BattleCreature,
    context: MoveContext<'_>,
    rng: &mut TurnRng,
    log: &mut MessageLog,
) -> u32 {
    let (Some(attack_stat), Some(defense_stat)) = (move_data.attack_stat, move_data.defense_stat)
    else {
        return 0;
    };

    let critical = critical_modifier(context.config, rng);
    let stab = stab_modifier(
        context.config,
        move_data.move_type,
        &attacker.creature().species.types,
    );
    let effectiveness = type_modifier(
        &context.static_data.type_chart,
        move_data.move_type,
        &target.creature().species.types,
    );

    if critical > 1.0 {
        log.push(BattleMessage::CriticalHit);
    }
    if effectiveness == 0.0 {
        log.push(BattleMessage::NoEffect);
    } else if effectiveness < 0.9 {
        log.push(BattleMessage::NotVeryEffective);
    } else if effectiveness > 1.1 {
        log.push(BattleMessage::SuperEffective);
    }

    calculate_damage(
        attacker.creature().level,
        attacker.stat_value(attack_stat),
        target.stat_value(defense_stat),
        move_data.base_power.unwrap_or(0),
        stab * effectiveness * critical,
    )
}

fn apply_stat_changes(move_data: &MoveData, target: &mut BattleCreature, log: &mut MessageLog) {
    for (stat, requested) in move_data.stat_changes.iter() {
        if requested == 0 {
            continue;
        }

        let applied = target.adjust_stat_adjusts(stat, requested);
        if let Some(change) = StatChange::describe(requested, applied, move_data.is_damaging()) {
            log.push(BattleMessage::StatChanged {
                name: target.in_battle_name(),
                stat,
                change,
            });
        }
    }
}

/// Marks a creature with no HP left as fainted, announcing it once.
pub fn check_fainted(creature: &mut BattleCreature, log: &mut MessageLog) {
    if creature.creature().current_hp() == 0 && !creature.is_fainted() {
        creature.creature_mut().fainted = true;
        info!("{} fainted", creature.in_battle_name());
        log.push(BattleMessage::Fainted {
            name: creature.in_battle_name(),
        });
    }
}
