use crate::battle::executor::{check_fainted, perform_move, MoveContext};
use crate::battle::messages::MessageLog;
use crate::battle::progression::{award_experience, LevelUpSnapshot};
use crate::battle::state::BattleData;
use crate::errors::{ActionError, BattleResult, StaticDataError};
use crate::static_data::StaticGameData;
use log::debug;
use schema::Stat;

/// Which side of the battle acts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

/// Everything a presentation layer needs after one turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnOutcome {
    pub messages: MessageLog,
    pub level_up: Option<LevelUpSnapshot>,
    pub battle_over: bool,
}

/// Main entry point for turn resolution.
///
/// Validates the player's move choice, asks the opponent's strategy for
/// its move, then executes both in speed order. The turn stops as soon as
/// either creature faints; the winner is awarded experience.
pub fn resolve_turn(
    battle: &mut BattleData,
    player_move: usize,
    static_data: &StaticGameData,
) -> BattleResult<TurnOutcome> {
    if battle.battle_over {
        return Err(ActionError::BattleOver.into());
    }
    if player_move >= battle.player_creature.creature().moves.len() {
        return Err(ActionError::InvalidMoveIndex(player_move).into());
    }
    // Either side may win experience this turn; its curve must be known
    // before any move runs.
    for creature in [&battle.player_creature, battle.opponent.creature()] {
        let rate = creature.creature().species.growth_rate;
        if !static_data.xp_lookup.has_rate(rate) {
            return Err(StaticDataError::GrowthRateNotFound(rate).into());
        }
    }

    let mut outcome = TurnOutcome::default();
    let computer_move = battle.computer_move(static_data);
    let order = determine_action_order(battle);
    debug!("Turn order: {:?}", order);

    for side in order {
        let move_index = match side {
            Side::Player => Some(player_move),
            Side::Opponent => computer_move,
        };
        // An AI with nothing usable skips its action.
        let Some(move_index) = move_index else {
            debug!("{:?} has no move to use", side);
            continue;
        };

        let context = MoveContext {
            static_data,
            config: &battle.config,
        };
        let (attacker, defender) = match side {
            Side::Player => (&mut battle.player_creature, battle.opponent.creature_mut()),
            Side::Opponent => (battle.opponent.creature_mut(), &mut battle.player_creature),
        };
        outcome
            .messages
            .append(perform_move(move_index, attacker, defender, context, &mut battle.rng));

        check_fainted(defender, &mut outcome.messages);
        check_fainted(attacker, &mut outcome.messages);

        let anyone_fainted = attacker.is_fainted() || defender.is_fainted();
        if anyone_fainted {
            battle.battle_over = true;
        }

        if defender.is_fainted() && !attacker.is_fainted() {
            let progression = award_experience(attacker, defender, &static_data.xp_lookup)?;
            outcome.messages.append(progression.messages);
            outcome.level_up = progression.level_up;
        }

        if anyone_fainted {
            break;
        }
    }

    outcome.battle_over = battle.battle_over;
    Ok(outcome)
}

/// Faster creature first. Equal speeds are settled by a fresh coin flip
/// every turn.
fn determine_action_order(battle: &mut BattleData) -> [Side; 2] {
    let player_speed = battle.player_creature.stat_value(Stat::Speed);
    let opponent_speed = battle.opponent.creature().stat_value(Stat::Speed);

    let player_first = if player_speed > opponent_speed {
        true
    } else if player_speed < opponent_speed {
        false
    } else {
        battle.rng.coin_flip("speed tie")
    };

    if player_first {
        [Side::Player, Side::Opponent]
    } else {
        [Side::Opponent, Side::Player]
    }
}
