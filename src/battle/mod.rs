pub mod ai;
pub mod battle_creature;
pub mod calculators;
pub mod catch;
pub mod executor;
pub mod messages;
pub mod progression;
pub mod rng;
pub mod state;
pub mod turn_orchestrator;

#[cfg(test)]
pub(crate) mod tests;
