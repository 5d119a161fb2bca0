//! The entropy engine: universe, belief state, entropy and move advice.

use alloc::vec::Vec;
use log::{debug, warn};

use crate::{
    ai,
    belief::BeliefState,
    bitboard::BB,
    common::{Coord, EngineError, GuessResult},
    config::EngineConfig,
    enumerate::enumerate_universe,
    entropy::entropy_bits,
};

/// Tracks which fleet layouts remain possible and recommends guesses.
///
/// The universe is enumerated once in [`EntropyEngine::new`] and never
/// recomputed. Every instance owns its own state; there is no global data.
#[derive(Debug, Clone)]
pub struct EntropyEngine {
    config: EngineConfig,
    universe: Vec<BB>,
    belief: BeliefState,
}

impl EntropyEngine {
    /// Enumerate the universe for `config` and start with no observations.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let universe = enumerate_universe(&config)?;
        let belief = BeliefState::new(config.grid_size, &universe);
        Ok(Self {
            config,
            universe,
            belief,
        })
    }

    /// Engine for the standard 5×5 game with three ships of length three.
    pub fn standard() -> Result<Self, EngineError> {
        Self::new(EngineConfig::default())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All layouts enumerated at construction.
    pub fn universe(&self) -> &[BB] {
        &self.universe
    }

    pub fn universe_size(&self) -> usize {
        self.universe.len()
    }

    pub fn belief(&self) -> &BeliefState {
        &self.belief
    }

    /// Number of layouts still consistent with the observations.
    pub fn remaining(&self) -> usize {
        self.belief.len()
    }

    /// Fold a hit/miss observation at `coord` into the belief state.
    ///
    /// Out-of-grid coordinates are rejected and leave the state untouched.
    /// Contradictory feedback is not an error: it can empty the belief state.
    pub fn update_belief(&mut self, coord: Coord, is_hit: bool) -> Result<(), EngineError> {
        let before = self.belief.len();
        let dropped = self.belief.retain_consistent(coord, is_hit)?;
        debug!(
            "{} at ({}, {}): {} -> {} boards ({} dropped)",
            if is_hit { "hit" } else { "miss" },
            coord.0,
            coord.1,
            before,
            self.belief.len(),
            dropped
        );
        if before > 0 && self.belief.is_empty() {
            warn!("no board is consistent with the observations");
        }
        Ok(())
    }

    /// Same as [`EntropyEngine::update_belief`], taking a guess result.
    pub fn observe(&mut self, coord: Coord, result: GuessResult) -> Result<(), EngineError> {
        self.update_belief(coord, result.is_hit())
    }

    /// `log2` of the number of remaining layouts; `0.0` when none or one remain.
    pub fn entropy(&self) -> f64 {
        entropy_bits(self.belief.len())
    }

    /// Best next guess among cells not set in `excluded`, or `None` once at
    /// most one layout remains.
    pub fn best_move(&self, excluded: &BB) -> Option<Coord> {
        ai::best_move(&self.belief, excluded)
    }

    /// Per-cell hit probability, row-major.
    pub fn hit_probabilities(&self) -> Vec<f64> {
        self.belief.hit_probabilities()
    }

    /// Drop all observations, restoring the belief state to the universe.
    pub fn reset(&mut self) {
        self.belief.reset(&self.universe);
    }
}
