#[cfg(test)]
mod tests {
    use crate::battle::ai::RandomMoveAi;
    use crate::battle::rng::TurnRng;
    use crate::battle::state::BattleData;
    use crate::battle::tests::common::{sample_static_data, TestCreatureBuilder, GROWL};
    use crate::config::BattleConfig;
    use crate::creature::Trainer;
    use rstest::rstest;

    fn mirror_battle(rng: TurnRng) -> BattleData {
        let player = TestCreatureBuilder::new(10)
            .with_trainer(Trainer::new("Red"))
            .with_moves(&[GROWL])
            .build();
        let wild = TestCreatureBuilder::new(10).with_moves(&[GROWL]).build();
        BattleData::wild(player, wild, Box::new(RandomMoveAi), BattleConfig::default(), rng)
    }

    fn player_went_first(texts: &[String]) -> bool {
        texts
            .first()
            .is_some_and(|text| text.starts_with("Red's Bulbasaur used"))
    }

    #[rstest]
    #[case::heads(0.2, true)]
    #[case::tails(0.8, false)]
    fn test_speed_tie_uses_coin_flip(#[case] flip: f64, #[case] player_first: bool) {
        let data = sample_static_data();
        // AI choice, speed tie, then one hit check per Growl.
        let mut battle = mirror_battle(TurnRng::new_for_test(vec![0.0, flip, 0.0, 0.0]));

        let outcome = battle.resolve_turn(0, &data).unwrap();

        assert_eq!(player_went_first(&outcome.messages.texts()), player_first);
        assert_eq!(outcome.messages.len(), 4);
    }

    #[test]
    fn test_speed_tie_is_roughly_fair() {
        let data = sample_static_data();
        let trials = 1000;
        let mut player_first = 0;

        for seed in 0..trials {
            let mut battle = mirror_battle(TurnRng::seeded(seed));
            let outcome = battle.resolve_turn(0, &data).unwrap();
            if player_went_first(&outcome.messages.texts()) {
                player_first += 1;
            }
        }

        assert!(
            (430..=570).contains(&player_first),
            "player went first {} times out of {}",
            player_first,
            trials
        );
    }

    #[test]
    fn test_speed_tie_is_rerolled_every_turn() {
        let data = sample_static_data();
        let mut battle = mirror_battle(TurnRng::seeded(2024));
        let mut orders = Vec::new();

        for _ in 0..40 {
            let outcome = battle.resolve_turn(0, &data).unwrap();
            orders.push(player_went_first(&outcome.messages.texts()));

            // Growl only lowers stages, so the speeds stay equal; keep PP topped up.
            for creature in [
                battle.player_creature.creature_mut(),
                battle.opponent.creature_mut().creature_mut(),
            ] {
                creature.moves[0].pp = creature.moves[0].max_pp();
            }
        }

        assert!(orders.iter().any(|&first| first));
        assert!(orders.iter().any(|&first| !first));
    }

    #[test]
    fn test_faster_creature_is_not_subject_to_coin_flip() {
        let data = sample_static_data();
        let player = TestCreatureBuilder::rattata(10)
            .with_trainer(Trainer::new("Red"))
            .with_moves(&[GROWL])
            .build();
        let wild = TestCreatureBuilder::new(10).with_moves(&[GROWL]).build();
        // AI choice, then the two hit checks; no draw for turn order.
        let mut battle = BattleData::wild(
            player,
            wild,
            Box::new(RandomMoveAi),
            BattleConfig::default(),
            TurnRng::new_for_test(vec![0.0, 0.0, 0.0]),
        );

        let outcome = battle.resolve_turn(0, &data).unwrap();

        assert_eq!(outcome.messages.texts()[0], "Red's Rattata used Growl");
    }
}
