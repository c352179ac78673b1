//! When creating wild creatures their available moves and stats can be
//! calculated deterministically; only the individual values are rolled.

use crate::battle::rng::TurnRng;
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::errors::StaticDataResult;
use crate::moves::Move;
use crate::static_data::StaticGameData;
use schema::{SpeciesId, StatTable};

/// A random value in [min_val, max_val] for every stat.
pub fn random_stat_values(rng: &mut TurnRng, min_val: u8, max_val: u8) -> StatTable<u8> {
    StatTable::from_fn(|stat| rng.range_inclusive(min_val, max_val, &format!("{} IV", stat)))
}

/// Zero for every stat.
pub fn zero_stat_values() -> StatTable<u16> {
    StatTable::default()
}

/// Builds an untrained, untraded creature of `species_id` at `level`,
/// knowing the most recent moves it would have learned by leveling up.
pub fn create_wild_creature(
    static_data: &StaticGameData,
    config: &BattleConfig,
    species_id: SpeciesId,
    level: u8,
    rng: &mut TurnRng,
) -> StaticDataResult<Creature> {
    let species = static_data.species(species_id)?;

    let moves = species
        .moves_at_level(level, config.max_moves)
        .into_iter()
        .map(|id| Ok(Move::new(id, static_data.move_data(id)?.clone())))
        .collect::<StaticDataResult<Vec<_>>>()?;

    let current_xp = static_data.xp_at_level(species, level)?;
    let individual_values = random_stat_values(rng, config.wild_iv_min, config.wild_iv_max);

    Ok(Creature::new(
        species.clone(),
        level,
        None,
        None,
        individual_values,
        zero_stat_values(),
        false,
        moves,
        current_xp,
    ))
}
