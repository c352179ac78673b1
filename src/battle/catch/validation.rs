use crate::battle::state::{BattleData, Opponent};
use crate::errors::ActionError;
use crate::player::Player;
use schema::PokeballId;

/// Check if a throw can be made: the battle is still running, the target
/// is wild and the player holds the ball.
pub fn can_attempt_catch(
    battle: &BattleData,
    player: &Player,
    pokeball: PokeballId,
) -> Result<(), ActionError> {
    if battle.is_over() {
        return Err(ActionError::BattleOver);
    }

    if let Opponent::Trainer(creature) = &battle.opponent {
        let trainer = creature
            .creature()
            .trainer
            .as_ref()
            .map(|trainer| trainer.name.clone())
            .unwrap_or_default();
        return Err(ActionError::CatchNotAllowed { trainer });
    }

    if player.pokeball_count(pokeball) == 0 {
        return Err(ActionError::PokeballNotOwned(pokeball));
    }

    Ok(())
}
