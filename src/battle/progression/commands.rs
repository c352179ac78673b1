use crate::battle::battle_creature::BattleCreature;
use crate::battle::messages::{BattleMessage, MessageLog};
use crate::battle::progression::{level_up_snapshot, xp_for_defeat, LevelUpSnapshot};
use crate::errors::StaticDataResult;
use log::{debug, info};
use schema::XpLookup;

/// What progression produced after a creature fainted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressionOutcome {
    pub messages: MessageLog,
    pub level_up: Option<LevelUpSnapshot>,
}

/// Awards `winner` the experience for defeating `defeated`.
///
/// On a level change the winner's current stats grow with their new
/// maximums and a snapshot for the level-up overlay is returned.
pub fn award_experience(
    winner: &mut BattleCreature,
    defeated: &BattleCreature,
    xp_lookup: &XpLookup,
) -> StaticDataResult<ProgressionOutcome> {
    let mut outcome = ProgressionOutcome::default();
    let xp = xp_for_defeat(defeated.creature(), winner.creature());
    let name = winner.in_battle_name();

    let creature = winner.creature_mut();
    let old_level = creature.level;
    let leveled_up = creature.add_xp(xp_lookup, xp)?;
    debug!("{} gained {} XP, now at {}", name, xp, creature.current_xp);

    outcome.messages.push(BattleMessage::ExperienceGained {
        name: name.clone(),
        amount: xp,
    });

    if leveled_up {
        creature.refresh_stats_after_level_up(old_level);
        info!("{} grew from level {} to {}", name, old_level, creature.level);
        outcome.messages.push(BattleMessage::LevelUp {
            name,
            level: creature.level,
        });
        outcome.level_up = Some(level_up_snapshot(creature, old_level));
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::tests::common::TestCreatureBuilder;
    use crate::creature::Trainer;
    use schema::{GrowthRate, Stat};

    #[test]
    fn test_experience_without_level_up() {
        let lookup = XpLookup::standard();
        let mut winner = TestCreatureBuilder::new(20).build_battler();
        let defeated = TestCreatureBuilder::rattata(2).build_battler();

        let outcome = award_experience(&mut winner, &defeated, &lookup).unwrap();

        // 51 * 2 / 7 = 14.57
        assert_eq!(outcome.messages.texts(), vec!["Wild Bulbasaur gains 14 experience"]);
        assert!(outcome.level_up.is_none());
        assert_eq!(winner.creature().level, 20);
    }

    #[test]
    fn test_level_up_keeps_damage_and_reports_snapshot() {
        let lookup = XpLookup::standard();
        let mut winner = TestCreatureBuilder::new(5)
            .with_trainer(Trainer::new("Red"))
            .build_battler();
        winner.creature_mut().adjust_stat(Stat::Hp, 5);
        let hp_before = winner.creature().current_hp();
        let max_before = winner.creature().max_stat(Stat::Hp);
        let defeated = TestCreatureBuilder::geodude(30).build_battler();

        let outcome = award_experience(&mut winner, &defeated, &lookup).unwrap();

        let creature = winner.creature();
        assert!(creature.level > 5);
        assert_eq!(
            lookup.level_at_xp(GrowthRate::MediumSlow, creature.current_xp),
            Some(creature.level)
        );
        let texts = outcome.messages.texts();
        assert_eq!(texts.len(), 2);
        assert_eq!(texts[1], format!("Red's Bulbasaur is now level {}!", creature.level));

        let snapshot = outcome.level_up.unwrap();
        assert_eq!(snapshot.old_level, 5);
        assert_eq!(snapshot.new_level, creature.level);
        assert_eq!(snapshot.stats[0], (Stat::Hp, max_before, creature.max_stat(Stat::Hp)));
        assert_eq!(
            creature.current_hp(),
            hp_before + creature.max_stat(Stat::Hp) - max_before
        );
    }
}
