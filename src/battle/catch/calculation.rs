use crate::battle::battle_creature::BattleCreature;
use crate::battle::rng::TurnRng;
use log::debug;
use schema::{Pokeball, Stat};

/// Highest value `modified_catch_rate` is measured against.
pub const MAX_CATCH_RATE: f64 = 255.0;

/// The target's capture rate scaled by the ball and by how much HP it has
/// lost. A creature at full health keeps a third of its rate.
pub fn modified_catch_rate(target: &BattleCreature, pokeball: &Pokeball) -> f64 {
    // TODO: ailments should raise the rate once they affect battles.
    let triple_max_hp = 3.0 * target.creature().max_stat(Stat::Hp).max(1) as f64;
    let current_hp = target.stat_value(Stat::Hp);
    let capture_rate = target.creature().species.capture_rate as f64;

    (triple_max_hp - 2.0 * current_hp) * capture_rate * pokeball.catch_rate / triple_max_hp
}

/// Runs up to `num_shakes` shake checks against `modified_rate` and returns
/// how many passed before the first failure.
pub fn num_checks_passed(modified_rate: f64, num_shakes: u32, rng: &mut TurnRng) -> u32 {
    let threshold = 65535.0 * (modified_rate.max(0.0) / MAX_CATCH_RATE).powf(0.25);

    for check in 0..num_shakes {
        let draw = rng.next_u16("shake check") as f64;
        if draw > threshold {
            debug!("Shake {} failed: {} > {:.1}", check + 1, draw, threshold);
            return check;
        }
    }

    num_shakes
}

/// Share of the checks passed, as a whole percentage.
pub fn percent_complete(checks_passed: u32, num_shakes: u32) -> u32 {
    if num_shakes == 0 {
        return 100;
    }
    100 * checks_passed.min(num_shakes) / num_shakes
}

/// Narration for a throw that got `percent_complete` of the way.
pub fn get_catch_message(percent_complete: u32, target: &BattleCreature) -> String {
    match percent_complete {
        0..=25 => "Not even close!".to_string(),
        26..=50 => "Well, that could have gone worse".to_string(),
        51..=70 => "I'll totally get it next time!".to_string(),
        71..=99 => "Damn...so close!".to_string(),
        _ => format!("Gotcha! {} was caught", target.in_battle_name()),
    }
}
