use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// The single source of randomness for a battle session.
///
/// Every probabilistic step (turn-order ties, hit checks, critical hits,
/// shake checks, AI choices) draws from here, so a seeded or scripted
/// `TurnRng` makes a whole battle reproducible.
#[derive(Debug, Clone)]
pub struct TurnRng {
    source: RngSource,
}

#[derive(Debug, Clone)]
enum RngSource {
    Seeded(StdRng),
    /// Pre-decided draws in [0, 1), consumed in order.
    Scripted(VecDeque<f64>),
}

impl TurnRng {
    /// A reproducible stream for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            source: RngSource::Seeded(StdRng::seed_from_u64(seed)),
        }
    }

    /// A stream seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self {
            source: RngSource::Seeded(StdRng::from_os_rng()),
        }
    }

    /// A stream that returns exactly `outcomes`, in order. Each value is a
    /// unit-interval draw; the helpers below scale it.
    pub fn new_for_test(outcomes: Vec<f64>) -> Self {
        Self {
            source: RngSource::Scripted(outcomes.into()),
        }
    }

    /// Uniform draw in [0, 1).
    pub fn next_unit(&mut self, reason: &str) -> f64 {
        let outcome = match &mut self.source {
            RngSource::Seeded(rng) => rng.random::<f64>(),
            RngSource::Scripted(outcomes) => match outcomes.pop_front() {
                Some(outcome) => outcome,
                // Add the reason to the panic message for better debugging!
                None => panic!(
                    "TurnRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                    reason
                ),
            },
        };

        trace!("[RNG] Consumed {} for: {}", outcome, reason);
        outcome
    }

    /// Uniform draw in [0, 100).
    pub fn next_percent(&mut self, reason: &str) -> f64 {
        self.next_unit(reason) * 100.0
    }

    /// Uniform integer in [0, 65535].
    pub fn next_u16(&mut self, reason: &str) -> u16 {
        let scaled = (self.next_unit(reason) * 65536.0) as u32;
        scaled.min(u16::MAX as u32) as u16
    }

    /// Fair coin: `true` half of the time.
    pub fn coin_flip(&mut self, reason: &str) -> bool {
        self.next_unit(reason) < 0.5
    }

    /// Uniform index in [0, len). `len` must be non-zero.
    pub fn choose_index(&mut self, len: usize, reason: &str) -> usize {
        let scaled = (self.next_unit(reason) * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }

    /// Uniform integer in [min, max].
    pub fn range_inclusive(&mut self, min: u8, max: u8, reason: &str) -> u8 {
        let span = max.saturating_sub(min) as usize + 1;
        min + self.choose_index(span, reason) as u8
    }
}
