use crate::battle::ai::MoveSelector;
use crate::battle::battle_creature::BattleCreature;
use crate::battle::catch::{throw_pokeball, CatchOutcome};
use crate::battle::executor::MoveContext;
use crate::battle::rng::TurnRng;
use crate::battle::turn_orchestrator::{resolve_turn, TurnOutcome};
use crate::config::BattleConfig;
use crate::creature::Creature;
use crate::errors::BattleResult;
use crate::player::Player;
use crate::static_data::StaticGameData;
use schema::PokeballId;

/// Who the player is fighting.
#[derive(Debug, Clone, PartialEq)]
pub enum Opponent {
    Wild(BattleCreature),
    Trainer(BattleCreature),
}

impl Opponent {
    pub fn creature(&self) -> &BattleCreature {
        match self {
            Opponent::Wild(creature) | Opponent::Trainer(creature) => creature,
        }
    }

    pub fn creature_mut(&mut self) -> &mut BattleCreature {
        match self {
            Opponent::Wild(creature) | Opponent::Trainer(creature) => creature,
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Opponent::Wild(_))
    }

    pub fn into_creature(self) -> Creature {
        match self {
            Opponent::Wild(creature) | Opponent::Trainer(creature) => creature.into_creature(),
        }
    }
}

/// What is left of a battle once it is over.
#[derive(Debug, Clone, PartialEq)]
pub struct BattleSummary {
    pub player_creature: Creature,
    pub opponent_creature: Creature,
    pub caught: bool,
}

/// One battle session between the player's creature and an opponent.
///
/// Owns both combatants, the opponent's move strategy, the battle's
/// configuration and its random stream.
#[derive(Debug)]
pub struct BattleData {
    pub player_creature: BattleCreature,
    pub opponent: Opponent,
    pub(crate) computer_ai: Box<dyn MoveSelector>,
    pub(crate) config: BattleConfig,
    pub(crate) rng: TurnRng,
    pub(crate) battle_over: bool,
    pub(crate) caught: bool,
}

impl BattleData {
    pub fn new(
        player_creature: Creature,
        opponent: Opponent,
        computer_ai: Box<dyn MoveSelector>,
        config: BattleConfig,
        rng: TurnRng,
    ) -> Self {
        Self {
            player_creature: BattleCreature::new(player_creature),
            opponent,
            computer_ai,
            config,
            rng,
            battle_over: false,
            caught: false,
        }
    }

    /// A battle against a wild creature.
    pub fn wild(
        player_creature: Creature,
        wild_creature: Creature,
        computer_ai: Box<dyn MoveSelector>,
        config: BattleConfig,
        rng: TurnRng,
    ) -> Self {
        let opponent = Opponent::Wild(BattleCreature::new(wild_creature));
        Self::new(player_creature, opponent, computer_ai, config, rng)
    }

    /// A battle against another trainer's creature.
    pub fn trainer(
        player_creature: Creature,
        trainer_creature: Creature,
        computer_ai: Box<dyn MoveSelector>,
        config: BattleConfig,
        rng: TurnRng,
    ) -> Self {
        let opponent = Opponent::Trainer(BattleCreature::new(trainer_creature));
        Self::new(player_creature, opponent, computer_ai, config, rng)
    }

    /// The creature on the other side of the battle, wild or trainer owned.
    pub fn defending_creature(&self) -> &BattleCreature {
        self.opponent.creature()
    }

    pub fn defending_creature_mut(&mut self) -> &mut BattleCreature {
        self.opponent.creature_mut()
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn is_over(&self) -> bool {
        self.battle_over
    }

    pub fn was_caught(&self) -> bool {
        self.caught
    }

    /// The move slot the opponent's strategy picks this turn.
    pub fn computer_move(&mut self, static_data: &StaticGameData) -> Option<usize> {
        let context = MoveContext {
            static_data,
            config: &self.config,
        };
        self.computer_ai.select_move(
            self.opponent.creature(),
            &self.player_creature,
            context,
            &mut self.rng,
        )
    }

    /// Resolves one turn with the player using the move in `move_index`.
    pub fn resolve_turn(
        &mut self,
        move_index: usize,
        static_data: &StaticGameData,
    ) -> BattleResult<TurnOutcome> {
        resolve_turn(self, move_index, static_data)
    }

    /// Throws one of the player's pokeballs at the opponent.
    pub fn throw_pokeball(
        &mut self,
        player: &mut Player,
        pokeball: PokeballId,
        static_data: &StaticGameData,
    ) -> BattleResult<CatchOutcome> {
        throw_pokeball(self, player, pokeball, static_data)
    }

    /// Ends the battle, handing back both persistent creatures. Stat stages
    /// are discarded.
    pub fn finish(self) -> BattleSummary {
        BattleSummary {
            player_creature: self.player_creature.into_creature(),
            opponent_creature: self.opponent.into_creature(),
            caught: self.caught,
        }
    }
}
