use crate::battle::battle_creature::BattleCreature;
use crate::battle::rng::TurnRng;
use crate::creature::{Creature, Trainer};
use crate::errors::BattleResult;
use crate::moves::Move;
use crate::static_data::StaticGameData;
use schema::{
    DamageClass, GrowthRate, MoveData, MoveId, MoveTargetCategory, Pokeball, PokeballId, Species,
    SpeciesId, Stat, StatTable, Type, TypeChart, XpLookup,
};
use std::collections::BTreeMap;

pub const BULBASAUR: SpeciesId = SpeciesId(1);
pub const RATTATA: SpeciesId = SpeciesId(19);
pub const GEODUDE: SpeciesId = SpeciesId(74);

pub const SWORDS_DANCE: MoveId = MoveId(14);
pub const VINE_WHIP: MoveId = MoveId(22);
pub const TACKLE: MoveId = MoveId(33);
pub const GROWL: MoveId = MoveId(45);

pub const MASTER_BALL: PokeballId = PokeballId(1);
pub const POKE_BALL: PokeballId = PokeballId(4);
pub const GREAT_BALL: PokeballId = PokeballId(3);

fn base_stats(
    hp: u16,
    attack: u16,
    defense: u16,
    sp_attack: u16,
    sp_defense: u16,
    speed: u16,
) -> StatTable<u16> {
    let mut stats = StatTable::filled(schema::BASE_ACCURACY_EVASION);
    stats[Stat::Hp] = hp;
    stats[Stat::Attack] = attack;
    stats[Stat::Defense] = defense;
    stats[Stat::SpAttack] = sp_attack;
    stats[Stat::SpDefense] = sp_defense;
    stats[Stat::Speed] = speed;
    stats
}

#[allow(clippy::too_many_arguments)]
fn species(
    id: SpeciesId,
    name: &str,
    types: Vec<Type>,
    base_stats: StatTable<u16>,
    base_xp_yield: u16,
    growth_rate: GrowthRate,
    level_moves: &[(u8, &[MoveId])],
    capture_rate: u8,
) -> Species {
    Species {
        id,
        pokedex_number: id.0,
        name: name.to_string(),
        types,
        base_stats,
        base_xp_yield,
        growth_rate,
        level_moves: level_moves
            .iter()
            .map(|(level, moves)| (*level, moves.to_vec()))
            .collect::<BTreeMap<_, _>>(),
        capture_rate,
    }
}

/// A small but realistic data bundle: three species, four moves and three
/// pokeballs on top of the standard type chart and growth curves.
pub fn sample_static_data() -> StaticGameData {
    StaticGameData::new(TypeChart::standard(), XpLookup::standard())
        .with_species(species(
            BULBASAUR,
            "Bulbasaur",
            vec![Type::Grass, Type::Poison],
            base_stats(45, 49, 49, 65, 65, 45),
            64,
            GrowthRate::MediumSlow,
            &[(1, &[TACKLE, GROWL]), (7, &[VINE_WHIP]), (20, &[SWORDS_DANCE])],
            45,
        ))
        .with_species(species(
            RATTATA,
            "Rattata",
            vec![Type::Normal],
            base_stats(30, 56, 35, 25, 35, 72),
            51,
            GrowthRate::Medium,
            &[(1, &[TACKLE]), (2, &[GROWL])],
            255,
        ))
        .with_species(species(
            GEODUDE,
            "Geodude",
            vec![Type::Rock, Type::Ground],
            base_stats(40, 80, 100, 30, 30, 20),
            73,
            GrowthRate::MediumSlow,
            &[(1, &[TACKLE])],
            255,
        ))
        .with_move(
            TACKLE,
            MoveData::new(
                "Tackle",
                Type::Normal,
                DamageClass::Physical,
                35,
                Some(40),
                Some(100),
                MoveTargetCategory::SelectedPokemon,
            ),
        )
        .with_move(
            VINE_WHIP,
            MoveData::new(
                "Vine Whip",
                Type::Grass,
                DamageClass::Physical,
                25,
                Some(45),
                Some(100),
                MoveTargetCategory::SelectedPokemon,
            ),
        )
        .with_move(
            GROWL,
            MoveData::new(
                "Growl",
                Type::Normal,
                DamageClass::Status,
                40,
                None,
                Some(100),
                MoveTargetCategory::AllOpponents,
            )
            .with_stat_change(Stat::Attack, -1),
        )
        .with_move(
            SWORDS_DANCE,
            MoveData::new(
                "Swords Dance",
                Type::Normal,
                DamageClass::Status,
                20,
                None,
                Some(100),
                MoveTargetCategory::User,
            )
            .with_stat_change(Stat::Attack, 2),
        )
        .with_pokeball(Pokeball::new(MASTER_BALL, "Master Ball", 255.0, 'M'))
        .with_pokeball(Pokeball::new(GREAT_BALL, "Great Ball", 1.5, 'G'))
        .with_pokeball(Pokeball::new(POKE_BALL, "Poke Ball", 1.0, 'P'))
}

/// A builder for creating test creatures with common defaults: IVs of 10,
/// no EVs, no moves, full HP and the XP matching the level.
///
/// # Example
/// ```ignore
/// let creature = TestCreatureBuilder::rattata(5)
///     .with_moves(&[TACKLE])
///     .with_hp(3)
///     .build_battler();
/// ```
pub struct TestCreatureBuilder {
    species: SpeciesId,
    level: u8,
    moves: Vec<MoveId>,
    current_hp: Option<u32>,
    trainer: Option<Trainer>,
    individual_value: u8,
}

impl TestCreatureBuilder {
    /// A Bulbasaur at `level`.
    pub fn new(level: u8) -> Self {
        Self::for_species(BULBASAUR, level)
    }

    pub fn rattata(level: u8) -> Self {
        Self::for_species(RATTATA, level)
    }

    pub fn geodude(level: u8) -> Self {
        Self::for_species(GEODUDE, level)
    }

    pub fn for_species(species: SpeciesId, level: u8) -> Self {
        Self {
            species,
            level,
            moves: Vec::new(),
            current_hp: None,
            trainer: None,
            individual_value: 10,
        }
    }

    pub fn with_moves(mut self, moves: &[MoveId]) -> Self {
        self.moves = moves.to_vec();
        self
    }

    /// Sets the current HP. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_trainer(mut self, trainer: Trainer) -> Self {
        self.trainer = Some(trainer);
        self
    }

    pub fn with_individual_value(mut self, value: u8) -> Self {
        self.individual_value = value;
        self
    }

    pub fn build(self) -> Creature {
        let data = sample_static_data();
        let species = match data.species(self.species) {
            Ok(species) => species,
            Err(err) => panic!("Failed to load species data for {:?}: {}", self.species, err),
        };
        let moves = self
            .moves
            .iter()
            .map(|&id| Move::new(id, assert_ok(data.move_data(id).map_err(Into::into)).clone()))
            .collect();
        let current_xp = assert_ok(data.xp_at_level(species, self.level).map_err(Into::into));

        let mut creature = Creature::new(
            species.clone(),
            self.level,
            None,
            self.trainer,
            StatTable::filled(self.individual_value),
            StatTable::default(),
            false,
            moves,
            current_xp,
        );
        if let Some(hp) = self.current_hp {
            let lost = creature.current_hp().saturating_sub(hp);
            creature.adjust_stat(Stat::Hp, lost as i64);
        }
        creature
    }

    pub fn build_battler(self) -> BattleCreature {
        BattleCreature::new(self.build())
    }
}

/// Creates a `TurnRng` instance with a long list of default values (0.5).
/// Useful for tests where the specific RNG outcome is not important, preventing panics from exhaustion.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![0.5; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
