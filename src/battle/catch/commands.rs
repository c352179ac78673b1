use crate::battle::catch::{
    can_attempt_catch, get_catch_message, modified_catch_rate, num_checks_passed, percent_complete,
};
use crate::battle::state::BattleData;
use crate::errors::BattleResult;
use crate::player::Player;
use crate::static_data::StaticGameData;
use log::{debug, info};
use schema::PokeballId;
use serde::{Deserialize, Serialize};

/// Result of one pokeball throw, for the catch animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatchOutcome {
    pub checks_passed: u32,
    pub percent_complete: u32,
    pub message: String,
    pub caught: bool,
}

/// Throws `pokeball` at the opponent, spending it.
///
/// Rejected before anything is spent if the throw is not allowed. A
/// successful catch ends the battle; the caught creature reaches the
/// player's roster through `Player::end_battle`.
pub fn throw_pokeball(
    battle: &mut BattleData,
    player: &mut Player,
    pokeball_id: PokeballId,
    static_data: &StaticGameData,
) -> BattleResult<CatchOutcome> {
    can_attempt_catch(battle, player, pokeball_id)?;
    let pokeball = static_data.pokeball(pokeball_id)?;
    player.use_pokeball(pokeball_id)?;

    let num_shakes = battle.config.catch_shakes;
    let target = battle.opponent.creature();
    let rate = modified_catch_rate(target, pokeball);
    let checks_passed = num_checks_passed(rate, num_shakes, &mut battle.rng);
    let percent = percent_complete(checks_passed, num_shakes);
    let message = get_catch_message(percent, target);
    let caught = percent == 100;

    debug!(
        "{} at {}: rate {:.1}, {} of {} checks passed",
        pokeball.name,
        target.in_battle_name(),
        rate,
        checks_passed,
        num_shakes
    );

    if caught {
        info!("{} was caught", target.in_battle_name());
        battle.caught = true;
        battle.battle_over = true;
    }

    Ok(CatchOutcome {
        checks_passed,
        percent_complete: percent,
        message,
        caught,
    })
}
