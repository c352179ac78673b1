//! A module for defining AI behaviors for battle opponents.

use crate::battle::battle_creature::BattleCreature;
use crate::battle::calculators::{stab_modifier, type_modifier, MAX_STAGE, MIN_STAGE};
use crate::battle::executor::MoveContext;
use crate::battle::rng::TurnRng;
use log::debug;
use ordered_float::OrderedFloat;
use schema::TargetSide;
use std::fmt;

/// A strategy that picks which move an AI-controlled creature uses.
///
/// Only moves with PP left may be chosen. `None` means the creature has
/// nothing usable and skips its action.
pub trait MoveSelector: fmt::Debug {
    fn select_move(
        &self,
        creature: &BattleCreature,
        opponent: &BattleCreature,
        context: MoveContext<'_>,
        rng: &mut TurnRng,
    ) -> Option<usize>;
}

/// Indices of the moves that still have PP.
pub fn usable_moves(creature: &BattleCreature) -> Vec<usize> {
    creature
        .creature()
        .moves
        .iter()
        .enumerate()
        .filter(|(_, move_instance)| move_instance.has_pp())
        .map(|(index, _)| index)
        .collect()
}

/// Picks uniformly among the moves that still have PP.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoveAi;

impl MoveSelector for RandomMoveAi {
    fn select_move(
        &self,
        creature: &BattleCreature,
        _opponent: &BattleCreature,
        _context: MoveContext<'_>,
        rng: &mut TurnRng,
    ) -> Option<usize> {
        let usable = usable_moves(creature);
        if usable.is_empty() {
            return None;
        }

        Some(usable[rng.choose_index(usable.len(), "random AI move")])
    }
}

/// Scores every usable move and picks the best, preferring the earliest
/// slot on a tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringAi;

impl ScoringAi {
    pub fn new() -> Self {
        Self
    }

    fn score_move(
        &self,
        move_index: usize,
        creature: &BattleCreature,
        opponent: &BattleCreature,
        context: MoveContext<'_>,
    ) -> f64 {
        let move_data = &creature.creature().moves[move_index].data;

        // Moves that can never hit are worthless.
        let accuracy = match move_data.base_accuracy {
            Some(accuracy) if accuracy > 0 => accuracy as f64 / 100.0,
            _ => return -1.0,
        };

        let mut damage_score = 0.0;
        if move_data.is_damaging() {
            let effectiveness = type_modifier(
                &context.static_data.type_chart,
                move_data.move_type,
                &opponent.creature().species.types,
            );
            if effectiveness < 0.1 {
                return -1.0;
            }

            let stab = stab_modifier(
                context.config,
                move_data.move_type,
                &creature.creature().species.types,
            );
            damage_score = move_data.base_power.unwrap_or(0) as f64 * effectiveness * stab;
        }

        let mut utility_score = 0.0;
        for (stat, delta) in move_data.stat_changes.iter() {
            match move_data.target.side() {
                // Self-buffs are worth less the higher the stage already is.
                Some(TargetSide::User) if delta > 0 => {
                    let stage = creature.stat_adjust(stat);
                    if stage < MAX_STAGE {
                        let potential_gain = 1.0 - stage as f64 / MAX_STAGE as f64;
                        utility_score += 20.0 * delta as f64 * potential_gain;
                    }
                }
                Some(TargetSide::Opponent) if delta < 0 => {
                    if opponent.stat_adjust(stat) > MIN_STAGE {
                        utility_score += 15.0 * delta.unsigned_abs() as f64;
                    }
                }
                _ => {}
            }
        }

        // A status move with nothing left to change is wasted.
        if !move_data.is_damaging() && utility_score < 1.0 {
            return -1.0;
        }

        (damage_score + utility_score) * accuracy
    }
}

impl MoveSelector for ScoringAi {
    fn select_move(
        &self,
        creature: &BattleCreature,
        opponent: &BattleCreature,
        context: MoveContext<'_>,
        _rng: &mut TurnRng,
    ) -> Option<usize> {
        let best = usable_moves(creature)
            .into_iter()
            .map(|index| {
                let score = self.score_move(index, creature, opponent, context);
                (index, OrderedFloat(score))
            })
            .max_by(|(a_index, a_score), (b_index, b_score)| {
                a_score.cmp(b_score).then(b_index.cmp(a_index))
            });

        if let Some((index, score)) = best {
            debug!("Scoring AI picked move {} with score {}", index, score);
        }
        best.map(|(index, _)| index)
    }
}
